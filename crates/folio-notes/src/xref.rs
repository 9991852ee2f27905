//! Cross-reference links between notes.

/// Link scheme marking a cross-reference to another node's notes.
pub const XREF_SCHEME: &str = "note:";

/// Schemes that are never allowed to reach an `href` or `src`.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// A reference from one note to another node, by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossRef {
    /// Node path exactly as written after the scheme
    pub path: String,
}

impl CrossRef {
    /// Parse a link destination, returning `None` if it is not a cross-reference.
    ///
    /// The path is kept byte-for-byte; an empty path is not a reference.
    pub fn from_dest(dest: &str) -> Option<Self> {
        let path = dest.strip_prefix(XREF_SCHEME)?;
        if path.is_empty() {
            return None;
        }
        Some(Self {
            path: path.to_string(),
        })
    }

    /// Opening anchor tag for this reference.
    pub fn open_tag(&self) -> String {
        format!(
            r##"<a href="#" class="note-link" data-note-path="{}">"##,
            escape_attr(&self.path)
        )
    }
}

/// Check whether a link or image destination uses a blocked scheme.
pub fn is_blocked(dest: &str) -> bool {
    let normalized: String = dest
        .trim_start()
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

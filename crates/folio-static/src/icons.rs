//! Built-in panel header icons.
//!
//! A group picks its icon from the `icon` key of its `description.json`
//! when that names a known icon, then from keywords in its display name,
//! and falls back to a folder.

macro_rules! svg {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">"#,
            $body,
            "</svg>"
        )
    };
}

/// Named icons as `(key, svg)`.
const ICONS: &[(&str, &str)] = &[
    (
        "code",
        svg!(r#"<path d="M8 3v3a2 2 0 0 1-2 2H3m18 0h-3a2 2 0 0 1-2-2V3M3 16v3a2 2 0 0 0 2 2h3m8-2h3a2 2 0 0 0 2-2v-3"/><path d="M12 12l-6-6 6-6 6 6-6 6z"/>"#),
    ),
    (
        "framework",
        svg!(r#"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 9h18M9 21V9"/>"#),
    ),
    (
        "book",
        svg!(r#"<path d="M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"/>"#),
    ),
    (
        "shield",
        svg!(r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#),
    ),
    (
        "cycle",
        svg!(r#"<path d="M21 12a9 9 0 1 1-9-9c2.52 0 4.93 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/>"#),
    ),
    (
        "cloud",
        svg!(r#"<path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"/>"#),
    ),
    (
        "layers",
        svg!(r#"<polygon points="12 2 2 7 12 12 22 7 12 2"/><path d="M2 17l10 5 10-5"/><path d="M2 12l10 5 10-5"/>"#),
    ),
    (
        "database",
        svg!(r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M21 12c0 1.66-4 3-9 3s-9-1.34-9-3"/><path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"/>"#),
    ),
    (
        "architecture",
        svg!(r#"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 9h18M9 21V9"/><path d="M15 21V9"/>"#),
    ),
    (
        "info",
        svg!(r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#),
    ),
    ("folder", FOLDER),
];

/// Lowercase name fragments and the icon they select, first match wins.
const KEYWORDS: &[(&str, &str)] = &[
    ("language", "code"),
    ("langage", "code"),
    ("framework", "framework"),
    ("librar", "book"),
    ("biblioth", "book"),
    ("test", "shield"),
    ("quality", "shield"),
    ("devops", "cycle"),
    ("devsecops", "cycle"),
    ("dev sec ops", "cycle"),
    ("cloud", "cloud"),
    ("model", "layers"),
    ("database", "database"),
    ("données", "database"),
    ("search", "database"),
    ("architecture", "architecture"),
    ("principle", "info"),
    ("principe", "info"),
];

fn named(key: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key.trim()))
        .map(|(_, svg)| *svg)
}

/// Icon markup for a group.
pub fn icon_for(key: Option<&str>, name: &str) -> &'static str {
    if let Some(svg) = key.and_then(named) {
        return svg;
    }
    if let Some(key) = key {
        tracing::debug!("Unknown icon {:?} for {}", key, name);
    }

    let lower = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .and_then(|(_, icon)| named(icon))
        .unwrap_or(FOLDER)
}

const FOLDER: &str = svg!(r#"<path d="M3 7a2 2 0 0 1 2-2h4l2 2h8a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>"#);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins() {
        assert_eq!(icon_for(Some("cloud"), "Programming Languages"), named("cloud").unwrap());
        assert_eq!(icon_for(Some(" Database "), "x"), named("database").unwrap());
    }

    #[test]
    fn name_keywords_pick_icon() {
        assert_eq!(icon_for(None, "Programming Languages"), named("code").unwrap());
        assert_eq!(icon_for(None, "Databases and Search Engines"), named("database").unwrap());
        assert_eq!(icon_for(None, "Testing and Quality"), named("shield").unwrap());
        assert_ne!(icon_for(None, "Frameworks"), icon_for(None, "Libraries"));
    }

    #[test]
    fn falls_back_to_folder() {
        assert_eq!(icon_for(None, "Misc"), FOLDER);
        assert_eq!(icon_for(Some("rocket"), "Misc"), FOLDER);
        assert!(FOLDER.starts_with("<svg"));
        assert!(FOLDER.ends_with("</svg>"));
    }
}

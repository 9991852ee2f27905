//! Per-directory metadata: `description.json` and `notes.md`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use folio_notes::{render_note, NoteHtml};
use serde_json::{Map, Value};

use crate::tree::DirectoryNode;

/// Sidecar description file name.
pub const DESCRIPTION_FILE: &str = "description.json";

/// Long-form note file name.
pub const NOTES_FILE: &str = "notes.md";

/// Short metadata record attached to a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionRecord {
    /// Display name (defaults to the directory name)
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Creation timestamp, if recorded
    pub created_at: Option<DateTime<Utc>>,

    /// Panel icon key, see [`crate::icons`]
    pub icon: Option<String>,

    /// Rendered notes HTML, filled from `notes.md`
    pub notes: Option<String>,
}

/// Errors that can occur when loading metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object in {path}")]
    NotAnObject { path: String },
}

/// Read a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>, MetadataError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MetadataError::Read {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

/// Load the description record for a directory.
///
/// Returns `Ok(None)` when the directory has no `description.json`.
pub fn load_description(dir: &Path) -> Result<Option<DescriptionRecord>, MetadataError> {
    let path = dir.join(DESCRIPTION_FILE);
    let Some(content) = read_optional(&path)? else {
        return Ok(None);
    };

    let value: Value = serde_json::from_str(&content).map_err(|e| MetadataError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    let Value::Object(fields) = value else {
        return Err(MetadataError::NotAnObject {
            path: path.display().to_string(),
        });
    };

    let fallback_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let created_at = fields
        .get("created")
        .or_else(|| fields.get("createdAt"))
        .and_then(|raw| {
            let parsed = parse_timestamp(raw);
            if parsed.is_none() {
                tracing::debug!("Ignoring timestamp {} in {}", raw, path.display());
            }
            parsed
        });

    Ok(Some(DescriptionRecord {
        name: text_field(&fields, "name")
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback_name),
        description: text_field(&fields, "description").unwrap_or_default(),
        created_at,
        icon: text_field(&fields, "icon"),
        notes: None,
    }))
}

/// Read a field as text. Scalars are stringified; null, arrays and objects
/// count as absent.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// RFC 3339 strings, or integer milliseconds since the Unix epoch.
fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

/// Load and render the notes for a directory.
///
/// Returns `Ok(None)` when the directory has no `notes.md`.
pub fn load_notes(dir: &Path) -> Result<Option<NoteHtml>, MetadataError> {
    let path = dir.join(NOTES_FILE);
    Ok(read_optional(&path)?.map(|source| render_note(&source)))
}

/// Description records for a scanned tree, keyed by node path.
#[derive(Debug, Default, Clone)]
pub struct MetadataIndex {
    records: HashMap<String, DescriptionRecord>,
}

impl MetadataIndex {
    /// Record for the node at `path`, if it has one.
    pub fn get(&self, path: &str) -> Option<&DescriptionRecord> {
        self.records.get(path)
    }

    /// Insert a record for `path`.
    pub fn insert(&mut self, path: impl Into<String>, record: DescriptionRecord) {
        self.records.insert(path.into(), record);
    }

    /// Number of described nodes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of described nodes that carry notes.
    pub fn notes_count(&self) -> usize {
        self.records.values().filter(|r| r.notes.is_some()).count()
    }
}

/// Load metadata for every node of `tree`, which was scanned from `root`.
///
/// Failures are isolated per node: they are logged and the node is
/// treated as undescribed.
pub fn load_all(root: &Path, tree: &DirectoryNode) -> MetadataIndex {
    let mut index = MetadataIndex::default();
    let mut references = Vec::new();

    for child in &tree.children {
        visit(&root.join(&child.name), child, &mut index, &mut references);
    }

    // Cross-references resolve in the browser; flag the ones that will dangle
    for (from, to) in references {
        if index.get(&to).and_then(|r| r.notes.as_ref()).is_none() {
            tracing::warn!("Notes for {} link to {} which has no notes", from, to);
        }
    }

    tracing::debug!(
        "Loaded {} description records ({} with notes)",
        index.len(),
        index.notes_count()
    );
    index
}

fn visit(
    dir: &Path,
    node: &DirectoryNode,
    index: &mut MetadataIndex,
    references: &mut Vec<(String, String)>,
) {
    match load_description(dir) {
        Ok(Some(mut record)) => {
            match load_notes(dir) {
                Ok(Some(note)) => {
                    references.extend(
                        note.references
                            .into_iter()
                            .map(|r| (node.path.clone(), r.path)),
                    );
                    record.notes = Some(note.html);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping notes for {}: {}", node.path, e),
            }
            index.insert(node.path.clone(), record);
        }
        Ok(None) => {
            if dir.join(NOTES_FILE).is_file() {
                tracing::debug!("Ignoring notes for {}: no {}", node.path, DESCRIPTION_FILE);
            }
        }
        Err(e) => tracing::warn!("Skipping description for {}: {}", node.path, e),
    }

    for child in &node.children {
        visit(&dir.join(&child.name), child, index, references);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{scan, ScanOptions};
    use tempfile::tempdir;

    #[test]
    fn missing_description_is_none() {
        let temp = tempdir().unwrap();

        assert!(load_description(temp.path()).unwrap().is_none());
        assert!(load_notes(temp.path()).unwrap().is_none());
    }

    #[test]
    fn loads_full_description() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(DESCRIPTION_FILE),
            r#"{"name": "Kafka", "description": "Event streaming", "created": "2024-03-01T10:00:00.000Z"}"#,
        )
        .unwrap();

        let record = load_description(temp.path()).unwrap().unwrap();

        assert_eq!(record.name, "Kafka");
        assert_eq!(record.description, "Event streaming");
        assert_eq!(
            record.created_at.unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );
        assert!(record.notes.is_none());
    }

    #[test]
    fn defaults_name_to_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("Python");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(DESCRIPTION_FILE), r#"{"description":"Scripting"}"#).unwrap();

        let record = load_description(&dir).unwrap().unwrap();

        assert_eq!(record.name, "Python");
        assert_eq!(record.description, "Scripting");
        assert!(record.created_at.is_none());
    }

    #[test]
    fn accepts_created_at_alias_and_bad_timestamps() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(DESCRIPTION_FILE),
            r#"{"createdAt": "yesterday", "extra": [1, 2]}"#,
        )
        .unwrap();

        let record = load_description(temp.path()).unwrap().unwrap();

        assert!(record.created_at.is_none());
        assert_eq!(record.description, "");
    }

    #[test]
    fn accepts_millisecond_timestamps() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(DESCRIPTION_FILE),
            r#"{"description":"Scripting","created":1700000000000}"#,
        )
        .unwrap();

        let record = load_description(temp.path()).unwrap().unwrap();

        assert_eq!(record.description, "Scripting");
        assert_eq!(
            record.created_at.unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn tolerates_unexpected_field_types() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("Python");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join(DESCRIPTION_FILE),
            r#"{"name": null, "description": 42, "created": {"at": "now"}, "icon": ["code"]}"#,
        )
        .unwrap();

        let record = load_description(&dir).unwrap().unwrap();

        assert_eq!(record.name, "Python");
        assert_eq!(record.description, "42");
        assert!(record.created_at.is_none());
        assert!(record.icon.is_none());
    }

    #[test]
    fn non_object_root_is_an_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(DESCRIPTION_FILE), r#"["Python"]"#).unwrap();

        let result = load_description(temp.path());

        assert!(matches!(result, Err(MetadataError::NotAnObject { .. })));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(DESCRIPTION_FILE), "{ not json").unwrap();

        let result = load_description(temp.path());

        assert!(matches!(result, Err(MetadataError::Parse { .. })));
    }

    #[test]
    fn renders_notes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(NOTES_FILE), "Uses **Spring**.").unwrap();

        let note = load_notes(temp.path()).unwrap().unwrap();

        assert_eq!(note.html, "<p>Uses <strong>Spring</strong>.</p>\n");
    }

    #[test]
    fn load_all_isolates_failures() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("Skills/Languages/Python")).unwrap();
        fs::create_dir_all(root.join("Skills/Languages/Rust")).unwrap();
        fs::create_dir_all(root.join("Skills/Languages/Java")).unwrap();
        fs::write(
            root.join("Skills/Languages/Python").join(DESCRIPTION_FILE),
            r#"{"description":"Scripting"}"#,
        )
        .unwrap();
        fs::write(
            root.join("Skills/Languages/Python").join(NOTES_FILE),
            "See [Rust](note:Skills/Languages/Rust).",
        )
        .unwrap();
        fs::write(
            root.join("Skills/Languages/Rust").join(DESCRIPTION_FILE),
            "{\"description\": ",
        )
        .unwrap();

        let tree = scan(root, &ScanOptions::default());
        let index = load_all(root, &tree);

        assert_eq!(index.len(), 1);
        let python = index.get("Skills/Languages/Python").unwrap();
        assert!(python.notes.as_ref().unwrap().contains("data-note-path"));
        assert!(index.get("Skills/Languages/Rust").is_none());
        assert!(index.get("Skills/Languages/Java").is_none());
        assert_eq!(index.notes_count(), 1);
    }

    #[test]
    fn notes_without_description_are_ignored() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("Skills")).unwrap();
        fs::write(root.join("Skills").join(NOTES_FILE), "orphan").unwrap();

        let tree = scan(root, &ScanOptions::default());
        let index = load_all(root, &tree);

        assert!(index.is_empty());
    }
}

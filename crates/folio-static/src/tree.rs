//! Directory tree scanning.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

/// A directory in the scanned content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Directory name
    pub name: String,

    /// Path relative to the scan root, `/`-separated (empty for the root)
    pub path: String,

    /// Child directories in filesystem enumeration order
    pub children: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Create an empty root node.
    pub fn root() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            children: Vec::new(),
        }
    }

    fn new(name: String, parent_path: &str) -> Self {
        let path = if parent_path.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", parent_path, name)
        };
        Self {
            name,
            path,
            children: Vec::new(),
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// Options controlling the directory walk.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum depth below the root
    pub max_depth: usize,

    /// Descend into symlinked directories
    pub follow_links: bool,

    /// Directory names to skip (hidden directories are always skipped)
    pub ignore: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: 16,
            follow_links: false,
            ignore: vec!["node_modules".to_string(), "target".to_string()],
        }
    }
}

impl ScanOptions {
    fn is_skipped(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.ignore.iter().any(|i| *i == name)
    }
}

/// Scan `root` and return its directory tree.
///
/// Files are ignored. A missing root yields an empty tree. Unreadable
/// entries and symlink loops are logged and skipped.
pub fn scan(root: &Path, options: &ScanOptions) -> DirectoryNode {
    if !root.is_dir() {
        tracing::warn!("Content root not found: {}", root.display());
        return DirectoryNode::root();
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(options.max_depth)
        .follow_links(options.follow_links)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !options.is_skipped(e));

    // stack[i] is the open node at depth i
    let mut stack = vec![DirectoryNode::root()];

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if let Some(ancestor) = e.loop_ancestor() {
                    tracing::warn!(
                        "Skipping symlink cycle back to {}: {}",
                        ancestor.display(),
                        e.path().map(|p| p.display().to_string()).unwrap_or_default()
                    );
                } else {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                }
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let depth = entry.depth();
        while stack.len() > depth {
            close_node(&mut stack);
        }
        if stack.len() != depth {
            tracing::debug!("Skipping orphaned entry {}", entry.path().display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let parent_path = stack.last().map(|p| p.path.as_str()).unwrap_or("");
        let node = DirectoryNode::new(name, parent_path);
        stack.push(node);
    }

    while stack.len() > 1 {
        close_node(&mut stack);
    }

    let tree = stack.pop().unwrap_or_else(DirectoryNode::root);
    tracing::debug!(
        "Scanned {} directories under {}",
        tree.descendant_count(),
        root.display()
    );
    tree
}

/// Pop the deepest open node and attach it to its parent.
fn close_node(stack: &mut Vec<DirectoryNode>) {
    if let Some(node) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(node);
        }
    }
}

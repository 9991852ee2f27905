//! Content rendering: scanned tree plus metadata to HTML fragments.

use std::collections::{BTreeMap, HashSet};

use crate::builder::BuildError;
use crate::icons;
use crate::metadata::{DescriptionRecord, MetadataIndex};
use crate::templates::{EntryContext, GroupContext, Layout, SidebarEntry, TemplateEngine};
use crate::tree::DirectoryNode;

/// The three fixed top-level sections of a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Skills,
    Mvp,
    Poc,
}

impl Bucket {
    /// Buckets in page order.
    pub const ALL: [Bucket; 3] = [Bucket::Skills, Bucket::Mvp, Bucket::Poc];

    fn key(&self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Mvp => "mvp",
            Self::Poc => "poc",
        }
    }
}

/// Directory names of the buckets under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    pub skills: String,
    pub mvp: String,
    pub poc: String,
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            skills: "Skills".to_string(),
            mvp: "MVP Projects".to_string(),
            poc: "POC Projects".to_string(),
        }
    }
}

impl Buckets {
    /// Directory name for `bucket`.
    pub fn dir(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::Skills => &self.skills,
            Bucket::Mvp => &self.mvp,
            Bucket::Poc => &self.poc,
        }
    }

    fn contains(&self, name: &str) -> bool {
        Bucket::ALL.iter().any(|b| self.dir(*b) == name)
    }
}

/// Output of the renderer.
#[derive(Debug, Default, Clone)]
pub struct Rendered {
    /// One fragment per rendered bucket, in page order
    pub fragments: Vec<String>,

    /// Sidebar navigation
    pub sidebar: Vec<SidebarEntry>,

    /// Notes HTML of every rendered node, keyed by node path
    pub notes: BTreeMap<String, String>,

    /// Number of rendered nodes that have a description record
    pub described: usize,
}

/// A rendered node, before it is placed in its parent.
struct NodeFragment {
    html: String,
    title: String,
    anchor: String,
}

struct Renderer<'a> {
    index: &'a MetadataIndex,
    templates: &'a TemplateEngine,
    layout: Layout,
    ids: HashSet<String>,
    notes: BTreeMap<String, String>,
    described: usize,
}

/// Render the portfolio body for `tree`.
///
/// Nodes without a description record get no card; they appear only as
/// group headings when a descendant is described. Buckets with no described
/// descendant are omitted.
pub fn render(
    tree: &DirectoryNode,
    index: &MetadataIndex,
    buckets: &Buckets,
    layout: Layout,
    templates: &TemplateEngine,
) -> Result<Rendered, BuildError> {
    let mut renderer = Renderer {
        index,
        templates,
        layout,
        ids: HashSet::new(),
        notes: BTreeMap::new(),
        described: 0,
    };

    for child in &tree.children {
        if !buckets.contains(&child.name) {
            tracing::debug!("Ignoring top-level directory {}", child.name);
        }
    }

    let mut fragments = Vec::new();
    let mut sidebar = Vec::new();

    for bucket in Bucket::ALL {
        let dir = buckets.dir(bucket);
        let Some(node) = tree.child(dir) else {
            tracing::debug!("No {} directory; skipping {} bucket", dir, bucket.key());
            continue;
        };

        if let Some((html, entry)) = renderer.render_bucket(bucket, node)? {
            fragments.push(html);
            sidebar.push(entry);
        } else {
            tracing::info!("Nothing described under {}; bucket omitted", dir);
        }
    }

    Ok(Rendered {
        fragments,
        sidebar,
        notes: renderer.notes,
        described: renderer.described,
    })
}

impl Renderer<'_> {
    fn render_bucket(
        &mut self,
        bucket: Bucket,
        node: &DirectoryNode,
    ) -> Result<Option<(String, SidebarEntry)>, BuildError> {
        let children = self.render_children(node, 1)?;
        if children.is_empty() {
            return Ok(None);
        }

        let index = self.index;
        let anchor = self.unique_id(&format!("bucket-{}", bucket.key()));
        let entry = self.entry(node, anchor.clone(), index.get(&node.path));

        let sidebar = SidebarEntry {
            title: entry.name.clone(),
            anchor,
            children: children
                .iter()
                .map(|c| SidebarEntry {
                    title: c.title.clone(),
                    anchor: c.anchor.clone(),
                    children: Vec::new(),
                })
                .collect(),
        };

        let group = GroupContext {
            entry,
            depth: 0,
            icon: "",
            children: children.into_iter().map(|c| c.html).collect(),
        };

        let html = self
            .templates
            .render_bucket(self.layout, &group)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(Some((html, sidebar)))
    }

    fn render_children(
        &mut self,
        node: &DirectoryNode,
        depth: usize,
    ) -> Result<Vec<NodeFragment>, BuildError> {
        let mut fragments = Vec::new();
        for child in &node.children {
            if let Some(fragment) = self.render_node(child, depth)? {
                fragments.push(fragment);
            }
        }
        Ok(fragments)
    }

    fn render_node(
        &mut self,
        node: &DirectoryNode,
        depth: usize,
    ) -> Result<Option<NodeFragment>, BuildError> {
        let children = self.render_children(node, depth + 1)?;
        let index = self.index;
        let record = index.get(&node.path);

        if children.is_empty() && record.is_none() {
            return Ok(None);
        }

        let anchor = self.unique_id(&format!("node-{}", slugify(&node.path)));
        let entry = self.entry(node, anchor.clone(), record);
        let title = entry.name.clone();

        let result = if children.is_empty() {
            self.templates.render_card(self.layout, &entry)
        } else {
            let group = GroupContext {
                icon: icons::icon_for(record.and_then(|r| r.icon.as_deref()), &entry.name),
                entry,
                depth,
                children: children.into_iter().map(|c| c.html).collect(),
            };
            self.templates.render_group(self.layout, &group)
        };
        let html = result.map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(Some(NodeFragment {
            html,
            title,
            anchor,
        }))
    }

    /// Build the template entry for a node, registering its notes.
    fn entry(
        &mut self,
        node: &DirectoryNode,
        id: String,
        record: Option<&DescriptionRecord>,
    ) -> EntryContext {
        let Some(record) = record else {
            return EntryContext {
                id,
                path: node.path.clone(),
                name: node.name.clone(),
                description: String::new(),
                created: None,
                has_notes: false,
            };
        };

        self.described += 1;
        if let Some(notes) = &record.notes {
            self.notes.insert(node.path.clone(), notes.clone());
        }

        EntryContext {
            id,
            path: node.path.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            created: record
                .created_at
                .map(|ts| ts.format("%Y-%m-%d").to_string()),
            has_notes: record.notes.is_some(),
        }
    }

    /// Reserve an element id, suffixing it if already taken.
    fn unique_id(&mut self, base: &str) -> String {
        let mut id = base.to_string();
        let mut n = 2;
        while self.ids.contains(&id) {
            id = format!("{}-{}", base, n);
            n += 1;
        }
        self.ids.insert(id.clone());
        id
    }
}

/// Convert a node path to an id-safe slug.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::load_all;
    use crate::tree::{scan, ScanOptions};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn describe(root: &Path, path: &str, json: &str) {
        let dir = root.join(path);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("description.json"), json).unwrap();
    }

    fn render_root(root: &Path, layout: Layout) -> Rendered {
        let tree = scan(root, &ScanOptions::default());
        let index = load_all(root, &tree);
        render(
            &tree,
            &index,
            &Buckets::default(),
            layout,
            &TemplateEngine::new(),
        )
        .unwrap()
    }

    fn record(name: &str, notes: Option<&str>) -> DescriptionRecord {
        DescriptionRecord {
            name: name.to_string(),
            description: format!("About {}", name),
            created_at: None,
            icon: None,
            notes: notes.map(str::to_string),
        }
    }

    fn node(name: &str, path: &str, children: Vec<DirectoryNode>) -> DirectoryNode {
        DirectoryNode {
            name: name.to_string(),
            path: path.to_string(),
            children,
        }
    }

    #[test]
    fn renders_python_card_and_omits_java() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        describe(root, "Skills/Languages/Python", r#"{"description":"Scripting"}"#);
        fs::create_dir_all(root.join("Skills/Languages/Java")).unwrap();

        let rendered = render_root(root, Layout::Panels);
        let html = rendered.fragments.join("\n");

        assert!(html.contains("<span class=\"skill-name\">Python</span>"));
        assert!(html.contains("<p class=\"skill-description\">Scripting</p>"));
        assert!(!html.contains("notes-toggle"));
        assert!(!html.contains("Java"));
        assert_eq!(rendered.described, 1);
        assert!(rendered.notes.is_empty());
    }

    #[test]
    fn undescribed_intermediate_becomes_heading() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        describe(root, "Skills/Languages/Python", r#"{"description":"Scripting"}"#);

        let rendered = render_root(root, Layout::Grid);
        let html = &rendered.fragments[0];

        assert!(html.contains("<h3 class=\"group-title\">Languages</h3>"));
        assert!(html.contains("<h4 class=\"card-title\">Python</h4>"));
        assert!(!html.contains("<h4 class=\"card-title\">Languages</h4>"));
    }

    #[test]
    fn panel_headers_get_category_icons() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        describe(root, "Skills/Cloud/GCP", r#"{"description":"Google Cloud"}"#);
        describe(root, "Skills/Tooling", r#"{"icon":"database"}"#);
        describe(root, "Skills/Tooling/Redis", r#"{"description":"Cache"}"#);

        let rendered = render_root(root, Layout::Panels);
        let html = &rendered.fragments[0];

        assert!(html.contains(icons::icon_for(None, "Cloud")));
        assert!(html.contains(icons::icon_for(Some("database"), "Tooling")));
        assert!(!html.contains(icons::icon_for(None, "Misc")));
    }

    #[test]
    fn empty_buckets_are_omitted() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        describe(root, "MVP Projects/Shop", r#"{"description":"Online shop"}"#);
        fs::create_dir_all(root.join("Skills/Languages/Java")).unwrap();
        fs::create_dir_all(root.join("POC Projects")).unwrap();
        describe(root, "POC Projects", r#"{"description":"Only the bucket itself"}"#);

        let rendered = render_root(root, Layout::Panels);

        assert_eq!(rendered.fragments.len(), 1);
        assert_eq!(rendered.sidebar.len(), 1);
        assert_eq!(rendered.sidebar[0].title, "MVP Projects");
        assert_eq!(rendered.sidebar[0].anchor, "bucket-mvp");
        assert_eq!(rendered.sidebar[0].children[0].title, "Shop");
    }

    #[test]
    fn keeps_enumeration_order_and_fixed_bucket_order() {
        let tree = node(
            "",
            "",
            vec![
                node(
                    "POC Projects",
                    "POC Projects",
                    vec![node("Zeta", "POC Projects/Zeta", vec![])],
                ),
                node(
                    "Skills",
                    "Skills",
                    vec![
                        node("Zig", "Skills/Zig", vec![]),
                        node("Ada", "Skills/Ada", vec![]),
                    ],
                ),
            ],
        );
        let mut index = MetadataIndex::default();
        index.insert("POC Projects/Zeta", record("Zeta", None));
        index.insert("Skills/Zig", record("Zig", None));
        index.insert("Skills/Ada", record("Ada", None));

        let rendered = render(
            &tree,
            &index,
            &Buckets::default(),
            Layout::List,
            &TemplateEngine::new(),
        )
        .unwrap();

        let titles: Vec<_> = rendered.sidebar.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Skills", "POC Projects"]);

        let skills = &rendered.fragments[0];
        let zig = skills.find("Zig").unwrap();
        let ada = skills.find("Ada").unwrap();
        assert!(zig < ada);
    }

    #[test]
    fn collects_notes_of_rendered_nodes() {
        let tree = node(
            "",
            "",
            vec![node(
                "Skills",
                "Skills",
                vec![node(
                    "Libraries",
                    "Skills/Libraries",
                    vec![node("Kafka", "Skills/Libraries/Kafka", vec![])],
                )],
            )],
        );
        let mut index = MetadataIndex::default();
        index.insert("Skills/Libraries", record("Libraries", Some("<p>libs</p>")));
        index.insert("Skills/Libraries/Kafka", record("Kafka", Some("<p>kafka</p>")));

        let rendered = render(
            &tree,
            &index,
            &Buckets::default(),
            Layout::Panels,
            &TemplateEngine::new(),
        )
        .unwrap();

        assert_eq!(rendered.notes.len(), 2);
        assert_eq!(rendered.notes["Skills/Libraries/Kafka"], "<p>kafka</p>");
        assert_eq!(rendered.described, 2);

        let html = &rendered.fragments[0];
        assert_eq!(html.matches("class=\"notes-toggle\"").count(), 2);
        assert!(html.contains("<p class=\"group-description\">About Libraries</p>"));
    }

    #[test]
    fn custom_bucket_names() {
        let tree = node(
            "",
            "",
            vec![node(
                "Competences",
                "Competences",
                vec![node("Java", "Competences/Java", vec![])],
            )],
        );
        let mut index = MetadataIndex::default();
        index.insert("Competences/Java", record("Java", None));
        let buckets = Buckets {
            skills: "Competences".to_string(),
            ..Default::default()
        };

        let rendered = render(&tree, &index, &buckets, Layout::Panels, &TemplateEngine::new())
            .unwrap();

        assert_eq!(rendered.fragments.len(), 1);
        assert_eq!(rendered.sidebar[0].anchor, "bucket-skills");
    }

    #[test]
    fn ids_are_unique() {
        let tree = node(
            "",
            "",
            vec![node(
                "Skills",
                "Skills",
                vec![
                    node("C++", "Skills/C++", vec![]),
                    node("C", "Skills/C", vec![]),
                ],
            )],
        );
        let mut index = MetadataIndex::default();
        index.insert("Skills/C++", record("C++", None));
        index.insert("Skills/C", record("C", None));

        let rendered = render(
            &tree,
            &index,
            &Buckets::default(),
            Layout::Grid,
            &TemplateEngine::new(),
        )
        .unwrap();

        let anchors: Vec<_> = rendered.sidebar[0]
            .children
            .iter()
            .map(|c| c.anchor.as_str())
            .collect();
        assert_eq!(anchors, vec!["node-skills-c", "node-skills-c-2"]);
    }

    #[test]
    fn empty_tree_renders_nothing() {
        let rendered = render(
            &DirectoryNode::root(),
            &MetadataIndex::default(),
            &Buckets::default(),
            Layout::Panels,
            &TemplateEngine::new(),
        )
        .unwrap();

        assert!(rendered.fragments.is_empty());
        assert!(rendered.sidebar.is_empty());
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Skills/Languages/Python"), "skills-languages-python");
        assert_eq!(slugify("MVP Projects/My Shop"), "mvp-projects-my-shop");
        assert_eq!(slugify("Skills/UML (draw.io)"), "skills-uml-draw-io");
        assert_eq!(slugify("Compétences/Bibliothèques"), "compétences-bibliothèques");
    }
}

//! Template engine for rendering portfolio fragments and the page shell.

use std::fmt;
use std::str::FromStr;

use minijinja::Environment;
use serde::{Deserialize, Serialize};

/// Visual layout used for groups and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Collapsible expansion panels
    #[default]
    Panels,
    /// Sections with a grid of cards
    Grid,
    /// Plain nested lists
    List,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Panels, Layout::Grid, Layout::List];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Panels => "panels",
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown layout '{}' (expected panels, grid or list)", s))
    }
}

/// Initial color theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A described node as seen by the templates.
#[derive(Debug, Clone, Serialize)]
pub struct EntryContext {
    /// Element id
    pub id: String,
    /// Node path, used to look up notes client-side
    pub path: String,
    /// Display name
    pub name: String,
    /// Description text (may be empty)
    pub description: String,
    /// Creation date as `YYYY-MM-DD`
    pub created: Option<String>,
    /// Whether a notes button should be shown
    pub has_notes: bool,
}

/// A node or bucket with rendered children.
#[derive(Debug, Clone, Serialize)]
pub struct GroupContext {
    #[serde(flatten)]
    pub entry: EntryContext,
    /// Nesting depth (1 for bucket children)
    pub depth: usize,
    /// Header icon markup
    pub icon: &'static str,
    /// Rendered child fragments
    pub children: Vec<String>,
}

/// A sidebar link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    /// Display title
    pub title: String,
    /// Target element id
    pub anchor: String,
    /// Nested links
    pub children: Vec<SidebarEntry>,
}

/// A rendered note placed in the page's note store.
#[derive(Debug, Clone, Serialize)]
pub struct NoteEntry {
    pub path: String,
    pub html: String,
}

/// Context for rendering the page shell.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentContext {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub lang: String,
    pub layout: Layout,
    pub theme: &'static str,
    pub css: String,
    pub js: String,
    pub fragments: Vec<String>,
    pub sidebar: Vec<SidebarEntry>,
    pub notes: Vec<NoteEntry>,
    /// Particle library URL, when the effect is enabled
    pub particles_src: Option<String>,
    pub generated_at: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        let templates = [
            ("document.html", DOCUMENT_TEMPLATE),
            ("sidebar.html", SIDEBAR_TEMPLATE),
            ("bucket.html", BUCKET_TEMPLATE),
            ("panels/card.html", PANELS_CARD_TEMPLATE),
            ("panels/group.html", PANELS_GROUP_TEMPLATE),
            ("grid/card.html", GRID_CARD_TEMPLATE),
            ("grid/group.html", GRID_GROUP_TEMPLATE),
            ("list/card.html", LIST_CARD_TEMPLATE),
            ("list/group.html", LIST_GROUP_TEMPLATE),
        ];

        for (name, source) in templates {
            env.add_template(name, source)
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render a leaf card.
    pub fn render_card(
        &self,
        layout: Layout,
        card: &EntryContext,
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(&format!("{}/card.html", layout))?
            .render(card)
    }

    /// Render a node with children.
    pub fn render_group(
        &self,
        layout: Layout,
        group: &GroupContext,
    ) -> Result<String, minijinja::Error> {
        self.env
            .get_template(&format!("{}/group.html", layout))?
            .render(group)
    }

    /// Render a top-level bucket section.
    pub fn render_bucket(
        &self,
        layout: Layout,
        bucket: &GroupContext,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("bucket.html")?;
        tmpl.render(minijinja::context! {
            layout => layout,
            bucket => bucket,
        })
    }

    /// Render the complete page.
    pub fn render_document(&self, doc: &DocumentContext) -> Result<String, minijinja::Error> {
        self.env.get_template("document.html")?.render(doc)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}" data-theme="{{ theme }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>{{ css | safe }}</style>
</head>
<body class="layout-{{ layout }}">
  {% if particles_src %}<div id="particles-js" aria-hidden="true"></div>{% endif %}
  <header class="site-header">
    <button type="button" class="menu-btn" aria-label="Toggle navigation">&#9776;</button>
    <div class="site-heading">
      <h1 class="site-title">{{ title }}</h1>
      {% if subtitle %}<p class="site-subtitle">{{ subtitle }}</p>{% endif %}
    </div>
    <button type="button" class="theme-toggle" aria-label="Toggle theme">&#9680;</button>
  </header>
  <div class="page">
    <nav class="sidebar">
      {% include "sidebar.html" %}
    </nav>
    <main class="main">
      {% for fragment in fragments %}{{ fragment | safe }}
      {% else %}<p class="empty">Nothing to show yet.</p>
      {% endfor %}
    </main>
  </div>
  <div class="notes-store" hidden>
    {% for note in notes %}<template data-note-path="{{ note.path }}">{{ note.html | safe }}</template>
    {% endfor %}
  </div>
  <dialog class="notes-dialog">
    <div class="notes-body"></div>
    <form method="dialog"><button class="notes-close">Close</button></form>
  </dialog>
  <footer class="site-footer">
    {% if author %}<span class="site-author">&copy; {{ author }}</span>{% endif %}
    {% if generated_at %}<span class="generated-at">Generated {{ generated_at }}</span>{% endif %}
  </footer>
  {% if particles_src %}<script src="{{ particles_src }}"></script>{% endif %}
  <script>{{ js | safe }}</script>
</body>
</html>
"##;

const SIDEBAR_TEMPLATE: &str = r##"<ul class="nav-list">
{% for item in sidebar %}
  <li class="nav-item">
    <a href="#{{ item.anchor }}">{{ item.title }}</a>
    {% if item.children %}
    <ul class="nav-children">
      {% for child in item.children %}
      <li class="nav-item"><a href="#{{ child.anchor }}">{{ child.title }}</a></li>
      {% endfor %}
    </ul>
    {% endif %}
  </li>
{% endfor %}
</ul>"##;

const BUCKET_TEMPLATE: &str = r##"<section class="bucket" id="{{ bucket.id }}">
  <h2 class="section-title">{{ bucket.name }}</h2>
  {% if bucket.description %}<p class="section-description">{{ bucket.description }}</p>{% endif %}
  {% if bucket.has_notes %}<button type="button" class="notes-toggle" data-note-path="{{ bucket.path }}">Notes</button>{% endif %}
  {% if layout == "list" %}<ul class="entry-list">{% else %}<div class="bucket-content">{% endif %}
  {% for child in bucket.children %}{{ child | safe }}
  {% endfor %}
  {% if layout == "list" %}</ul>{% else %}</div>{% endif %}
</section>"##;

const PANELS_CARD_TEMPLATE: &str = r##"<div class="skill-item" id="{{ id }}">
  <span class="skill-name">{{ name }}</span>
  {% if description %}<p class="skill-description">{{ description }}</p>{% endif %}
  {% if created %}<time class="skill-date" datetime="{{ created }}">{{ created }}</time>{% endif %}
  {% if has_notes %}<button type="button" class="notes-toggle" data-note-path="{{ path }}">Notes</button>{% endif %}
</div>"##;

const PANELS_GROUP_TEMPLATE: &str = r##"<div class="expansion-panel depth-{{ depth }}" id="{{ id }}">
  <input type="checkbox" id="{{ id }}-toggle" class="expansion-toggle">
  <label class="expansion-header" for="{{ id }}-toggle">
    {{ icon | safe }}
    <h3 class="skill-category-title">{{ name }}</h3>
  </label>
  <div class="expansion-content">
    {% if description %}<p class="group-description">{{ description }}</p>{% endif %}
    {% if has_notes %}<button type="button" class="notes-toggle" data-note-path="{{ path }}">Notes</button>{% endif %}
    <div class="skill-list">
    {% for child in children %}{{ child | safe }}
    {% endfor %}
    </div>
  </div>
</div>"##;

const GRID_CARD_TEMPLATE: &str = r##"<article class="card" id="{{ id }}">
  <h4 class="card-title">{{ name }}</h4>
  {% if description %}<p class="card-description">{{ description }}</p>{% endif %}
  {% if created %}<time class="card-date" datetime="{{ created }}">{{ created }}</time>{% endif %}
  {% if has_notes %}<button type="button" class="notes-toggle" data-note-path="{{ path }}">Notes</button>{% endif %}
</article>"##;

const GRID_GROUP_TEMPLATE: &str = r##"<section class="group depth-{{ depth }}" id="{{ id }}">
  <h3 class="group-title">{{ name }}</h3>
  {% if description %}<p class="group-description">{{ description }}</p>{% endif %}
  {% if has_notes %}<button type="button" class="notes-toggle" data-note-path="{{ path }}">Notes</button>{% endif %}
  <div class="card-grid">
  {% for child in children %}{{ child | safe }}
  {% endfor %}
  </div>
</section>"##;

const LIST_CARD_TEMPLATE: &str = r##"<li class="entry" id="{{ id }}">
  <span class="entry-name">{{ name }}</span>{% if description %} <span class="entry-description">{{ description }}</span>{% endif %}
  {% if has_notes %}<button type="button" class="notes-toggle" data-note-path="{{ path }}">Notes</button>{% endif %}
</li>"##;

const LIST_GROUP_TEMPLATE: &str = r##"<li class="entry-group depth-{{ depth }}" id="{{ id }}">
  <span class="entry-name">{{ name }}</span>{% if description %} <span class="entry-description">{{ description }}</span>{% endif %}
  {% if has_notes %}<button type="button" class="notes-toggle" data-note-path="{{ path }}">Notes</button>{% endif %}
  <ul class="entry-list">
  {% for child in children %}{{ child | safe }}
  {% endfor %}
  </ul>
</li>"##;

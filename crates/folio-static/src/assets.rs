//! Inline style and script assets.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the page stylesheet.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the page script.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* folio portfolio theme */

:root {
  --sidebar-width: 260px;
  --content-max-width: 960px;
  --background-color: #f7f8fa;
  --surface-color: #ffffff;
  --text-color: #1f2933;
  --muted-color: #5f6b7a;
  --light-gray: #e4e7eb;
  --medium-gray: #7b8794;
  --accent-color: #2f6fed;
  --accent-contrast: #ffffff;
  --radius: 8px;
}

[data-theme="dark"] {
  --background-color: #111418;
  --surface-color: #1a1f26;
  --text-color: #e4e7eb;
  --muted-color: #9aa5b1;
  --light-gray: #2a313b;
  --medium-gray: #52606d;
  --accent-color: #6b9cff;
  --accent-contrast: #0b0d10;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background-color);
  color: var(--text-color);
  line-height: 1.6;
  min-height: 100vh;
}

#particles-js {
  position: fixed;
  inset: 0;
  z-index: -1;
  pointer-events: none;
}

/* Header */
.site-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.5rem;
  background: var(--surface-color);
  border-bottom: 1px solid var(--light-gray);
  position: sticky;
  top: 0;
  z-index: 20;
}

.site-heading {
  flex: 1;
}

.site-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.site-subtitle {
  color: var(--muted-color);
}

.menu-btn,
.theme-toggle {
  background: none;
  border: 1px solid var(--light-gray);
  border-radius: var(--radius);
  color: var(--text-color);
  font-size: 1.25rem;
  padding: 0.25rem 0.6rem;
  cursor: pointer;
}

/* Layout */
.page {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
}

body.sidebar-collapsed .page {
  grid-template-columns: 1fr;
}

body.sidebar-collapsed .sidebar {
  display: none;
}

/* Sidebar */
.sidebar {
  background: var(--surface-color);
  border-right: 1px solid var(--light-gray);
  padding: 1.5rem;
  position: sticky;
  top: 4.5rem;
  height: calc(100vh - 4.5rem);
  overflow-y: auto;
}

.nav-list,
.nav-children {
  list-style: none;
}

.nav-children {
  margin-left: 1rem;
  margin-top: 0.25rem;
}

.nav-item a {
  display: block;
  padding: 0.35rem 0.75rem;
  color: var(--muted-color);
  text-decoration: none;
  border-radius: var(--radius);
  transition: background 0.15s, color 0.15s;
}

.nav-item a:hover {
  background: var(--accent-color);
  color: var(--accent-contrast);
}

/* Main content */
.main {
  padding: 2rem;
  max-width: var(--content-max-width);
  width: 100%;
}

.bucket {
  margin-bottom: 2.5rem;
}

.section-title {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.section-description,
.group-description {
  color: var(--muted-color);
  margin-bottom: 0.75rem;
}

.empty {
  color: var(--muted-color);
}

/* Panels layout */
.expansion-panel {
  border: 1px solid var(--light-gray);
  border-radius: var(--radius);
  margin-bottom: 1rem;
  overflow: hidden;
  background: var(--surface-color);
}

.expansion-header {
  display: flex;
  align-items: center;
  padding: 1rem;
  cursor: pointer;
  background-color: var(--light-gray);
  transition: background-color 0.3s ease;
}

.expansion-header:hover {
  background-color: var(--medium-gray);
  color: white;
}

.expansion-header svg {
  margin-right: 1rem;
  width: 24px;
  height: 24px;
}

.expansion-content {
  max-height: 0;
  overflow: hidden;
  transition: max-height 0.3s ease;
}

.expansion-toggle {
  display: none;
}

.expansion-toggle:checked + .expansion-header + .expansion-content {
  max-height: none;
  padding: 1rem;
}

.skill-item {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem;
  border-bottom: 1px solid var(--light-gray);
}

.skill-item:last-child {
  border-bottom: none;
}

.skill-name {
  font-weight: 600;
}

.skill-description {
  color: var(--muted-color);
  flex: 1;
}

.skill-date,
.card-date {
  font-size: 0.8rem;
  color: var(--medium-gray);
}

/* Grid layout */
.group {
  margin-bottom: 1.5rem;
}

.group-title {
  margin-bottom: 0.75rem;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.card-grid > .group {
  grid-column: 1 / -1;
}

.card {
  background: var(--surface-color);
  border: 1px solid var(--light-gray);
  border-radius: var(--radius);
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.card-title {
  font-size: 1.05rem;
}

.card-description {
  color: var(--muted-color);
  flex: 1;
}

/* List layout */
.entry-list {
  list-style: disc;
  margin-left: 1.25rem;
}

.entry,
.entry-group {
  margin: 0.25rem 0;
}

.entry-name {
  font-weight: 600;
}

.entry-description {
  color: var(--muted-color);
}

/* Notes */
.notes-toggle {
  background: var(--accent-color);
  color: var(--accent-contrast);
  border: none;
  border-radius: var(--radius);
  padding: 0.2rem 0.7rem;
  font-size: 0.8rem;
  cursor: pointer;
}

.notes-dialog {
  border: 1px solid var(--light-gray);
  border-radius: var(--radius);
  background: var(--surface-color);
  color: var(--text-color);
  max-width: min(720px, 90vw);
  padding: 1.5rem;
  margin: auto;
}

.notes-dialog::backdrop {
  background: rgba(0, 0, 0, 0.4);
}

.notes-body h1,
.notes-body h2,
.notes-body h3 {
  margin: 1rem 0 0.5rem;
}

.notes-body p,
.notes-body ul,
.notes-body pre {
  margin-bottom: 0.75rem;
}

.notes-body pre {
  background: var(--light-gray);
  padding: 0.75rem;
  border-radius: var(--radius);
  overflow-x: auto;
}

.note-link {
  color: var(--accent-color);
}

.notes-close {
  margin-top: 1rem;
  padding: 0.3rem 0.9rem;
  cursor: pointer;
}

/* Footer */
.site-footer {
  display: flex;
  justify-content: space-between;
  padding: 1rem 2rem;
  color: var(--muted-color);
  border-top: 1px solid var(--light-gray);
  font-size: 0.875rem;
}

/* Responsive */
@media (max-width: 900px) {
  .page {
    grid-template-columns: 1fr;
  }

  .sidebar {
    position: fixed;
    left: -100%;
    z-index: 30;
    transition: left 0.3s;
    width: var(--sidebar-width);
  }

  .sidebar.open {
    left: 0;
  }
}
"#;

const DEFAULT_JS: &str = r#"// folio page runtime
(function () {
  const root = document.documentElement;

  // Theme
  const stored = localStorage.getItem('folio-theme');
  if (stored === 'light' || stored === 'dark') {
    root.dataset.theme = stored;
  }
  const themeBtn = document.querySelector('.theme-toggle');
  if (themeBtn) {
    themeBtn.addEventListener('click', () => {
      const next = root.dataset.theme === 'dark' ? 'light' : 'dark';
      root.dataset.theme = next;
      localStorage.setItem('folio-theme', next);
    });
  }

  // Sidebar
  const menuBtn = document.querySelector('.menu-btn');
  const sidebar = document.querySelector('.sidebar');
  if (menuBtn && sidebar) {
    menuBtn.addEventListener('click', () => {
      if (window.matchMedia('(max-width: 900px)').matches) {
        sidebar.classList.toggle('open');
      } else {
        document.body.classList.toggle('sidebar-collapsed');
      }
    });
  }

  // Notes
  const dialog = document.querySelector('.notes-dialog');
  const body = dialog ? dialog.querySelector('.notes-body') : null;

  function findNote(path) {
    const notes = document.querySelectorAll('.notes-store template');
    for (const note of notes) {
      if (note.dataset.notePath === path) {
        return note;
      }
    }
    return null;
  }

  function openNote(path) {
    if (!dialog || !body) return;
    const note = findNote(path);
    body.replaceChildren();
    if (note) {
      body.appendChild(note.content.cloneNode(true));
    } else {
      const missing = document.createElement('p');
      missing.textContent = 'No notes for ' + path;
      body.appendChild(missing);
    }
    if (!dialog.open) dialog.showModal();
  }

  document.addEventListener('click', (event) => {
    const target = event.target.closest('.notes-toggle, .note-link');
    if (!target) return;
    event.preventDefault();
    openNote(target.dataset.notePath);
  });

  // Particles
  if (window.particlesJS && document.getElementById('particles-js')) {
    window.particlesJS('particles-js', {
      particles: {
        number: { value: 60 },
        size: { value: 3 },
        move: { speed: 1.5 },
        line_linked: { enable: true, opacity: 0.3 }
      },
      interactivity: { events: { onhover: { enable: true, mode: 'grab' } } }
    });
  }
})();
"#;

//! Portfolio builder: scan, describe, render, assemble, write.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::assemble::{assemble, write_output};
use crate::metadata::load_all;
use crate::render::{render, Buckets};
use crate::templates::{Layout, TemplateEngine, Theme};
use crate::tree::{scan, ScanOptions};

/// Default particle library location.
pub const DEFAULT_PARTICLES_SRC: &str =
    "https://cdn.jsdelivr.net/particles.js/2.0.0/particles.min.js";

/// Page-level presentation options.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Page title
    pub title: String,

    /// Line shown under the title
    pub subtitle: String,

    /// Footer author name
    pub author: String,

    /// Document language
    pub lang: String,

    /// Layout for groups and cards
    pub layout: Layout,

    /// Initial theme
    pub theme: Theme,

    /// Particle library URL, `None` to disable the effect
    pub particles: Option<String>,

    /// Footer timestamp; leave unset for reproducible output
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            subtitle: String::new(),
            author: String::new(),
            lang: "en".to_string(),
            layout: Layout::default(),
            theme: Theme::default(),
            particles: Some(DEFAULT_PARTICLES_SRC.to_string()),
            generated_at: None,
        }
    }
}

/// Configuration for building a portfolio.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content root to scan
    pub root: PathBuf,

    /// Output HTML file
    pub output: PathBuf,

    /// Directory walk options
    pub scan: ScanOptions,

    /// Bucket directory names
    pub buckets: Buckets,

    /// Presentation options
    pub site: SiteOptions,

    /// Minify inlined CSS
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("index.html"),
            scan: ScanOptions::default(),
            buckets: Buckets::default(),
            site: SiteOptions::default(),
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of directories scanned
    pub nodes: usize,

    /// Number of described nodes on the page
    pub described: usize,

    /// Number of notes embedded in the page
    pub notes: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output file
    pub output: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Static portfolio builder.
pub struct StaticBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Render the page without writing it.
    pub fn render_page(&self) -> Result<(String, BuildResult), BuildError> {
        let start = Instant::now();

        let tree = scan(&self.config.root, &self.config.scan);
        let index = load_all(&self.config.root, &tree);

        let rendered = render(
            &tree,
            &index,
            &self.config.buckets,
            self.config.site.layout,
            &self.templates,
        )?;

        let html = assemble(
            &rendered,
            &self.config.site,
            self.config.minify,
            &self.templates,
        )?;

        let result = BuildResult {
            nodes: tree.descendant_count(),
            described: rendered.described,
            notes: rendered.notes.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output: self.config.output.clone(),
        };

        Ok((html, result))
    }

    /// Build the portfolio and write the output file.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let (html, mut result) = self.render_page()?;
        write_output(&self.config.output, &html)?;

        result.duration_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }
}

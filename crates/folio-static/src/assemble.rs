//! Document assembly and output.

use std::fs;
use std::io;
use std::path::Path;

use crate::assets::AssetPipeline;
use crate::builder::{BuildError, SiteOptions};
use crate::render::Rendered;
use crate::templates::{DocumentContext, NoteEntry, TemplateEngine};

/// Wrap rendered fragments in the complete page.
pub fn assemble(
    rendered: &Rendered,
    site: &SiteOptions,
    minify: bool,
    templates: &TemplateEngine,
) -> Result<String, BuildError> {
    let css = AssetPipeline::generate_css();
    let css = if minify {
        match AssetPipeline::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Using unminified CSS: {}", e);
                css
            }
        }
    } else {
        css
    };

    let notes = rendered
        .notes
        .iter()
        .map(|(path, html)| NoteEntry {
            path: path.clone(),
            html: html.clone(),
        })
        .collect();

    let context = DocumentContext {
        title: site.title.clone(),
        subtitle: site.subtitle.clone(),
        author: site.author.clone(),
        lang: site.lang.clone(),
        layout: site.layout,
        theme: site.theme.as_str(),
        css,
        js: AssetPipeline::generate_js(),
        fragments: rendered.fragments.clone(),
        sidebar: rendered.sidebar.clone(),
        notes,
        particles_src: site.particles.clone(),
        generated_at: site
            .generated_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string()),
    };

    templates
        .render_document(&context)
        .map_err(|e| BuildError::TemplateError(e.to_string()))
}

/// Replace the output file with `html`.
///
/// The previous file is deleted before the new one is written, so a failed
/// write leaves no output behind.
pub fn write_output(path: &Path, html: &str) -> Result<(), BuildError> {
    let write_error = |e: io::Error| BuildError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    match fs::remove_file(path) {
        Ok(()) => tracing::debug!("Removed previous {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(write_error(e)),
    }

    fs::write(path, html).map_err(write_error)
}

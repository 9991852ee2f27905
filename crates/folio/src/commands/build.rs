//! Portfolio build command.

use std::path::PathBuf;

use anyhow::Result;
use folio_static::{Layout, StaticBuilder};

use crate::config::ConfigFile;

/// Run the build command.
pub fn run(
    config: ConfigFile,
    output: Option<PathBuf>,
    layout: Option<Layout>,
    minify: Option<bool>,
) -> Result<()> {
    tracing::info!("Building portfolio...");

    let mut build = config.into_build_config();
    if let Some(output) = output {
        build.output = output;
    }
    if let Some(layout) = layout {
        build.site.layout = layout;
    }
    if let Some(minify) = minify {
        build.minify = minify;
    }

    tracing::debug!(
        "Scanning {} with {} layout",
        build.root.display(),
        build.site.layout
    );

    let result = StaticBuilder::new(build).build()?;

    tracing::info!(
        "Rendered {} of {} directories ({} with notes) in {}ms",
        result.described,
        result.nodes,
        result.notes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output.display());

    Ok(())
}

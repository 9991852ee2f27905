//! Configuration file (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use folio_static::builder::DEFAULT_PARTICLES_SRC;
use folio_static::{BuildConfig, Buckets, Layout, ScanOptions, SiteOptions, Theme};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub content: ContentSection,
    #[serde(default)]
    pub buckets: BucketsSection,
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub particles: ParticlesSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub lang: String,
    pub layout: Layout,
    pub theme: Theme,
    /// Embed the generation time in the footer
    pub timestamp: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        let site = SiteOptions::default();
        Self {
            title: site.title,
            subtitle: site.subtitle,
            author: site.author,
            lang: site.lang,
            layout: site.layout,
            theme: site.theme,
            timestamp: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    pub root: PathBuf,
    pub output: PathBuf,
    pub max_depth: usize,
    pub follow_links: bool,
    pub ignore: Vec<String>,
}

impl Default for ContentSection {
    fn default() -> Self {
        let scan = ScanOptions::default();
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("index.html"),
            max_depth: scan.max_depth,
            follow_links: scan.follow_links,
            ignore: scan.ignore,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BucketsSection {
    pub skills: String,
    pub mvp: String,
    pub poc: String,
}

impl Default for BucketsSection {
    fn default() -> Self {
        let buckets = Buckets::default();
        Self {
            skills: buckets.skills,
            mvp: buckets.mvp,
            poc: buckets.poc,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub minify: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self { minify: true }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ParticlesSection {
    pub enabled: bool,
    pub src: String,
}

impl Default for ParticlesSection {
    fn default() -> Self {
        Self {
            enabled: true,
            src: DEFAULT_PARTICLES_SRC.to_string(),
        }
    }
}

impl ConfigFile {
    /// Bucket directory names.
    pub fn buckets(&self) -> Buckets {
        Buckets {
            skills: self.buckets.skills.clone(),
            mvp: self.buckets.mvp.clone(),
            poc: self.buckets.poc.clone(),
        }
    }

    /// Convert into builder configuration.
    pub fn into_build_config(self) -> BuildConfig {
        let buckets = self.buckets();
        BuildConfig {
            root: self.content.root,
            output: self.content.output,
            scan: ScanOptions {
                max_depth: self.content.max_depth,
                follow_links: self.content.follow_links,
                ignore: self.content.ignore,
            },
            buckets,
            site: SiteOptions {
                title: self.site.title,
                subtitle: self.site.subtitle,
                author: self.site.author,
                lang: self.site.lang,
                layout: self.site.layout,
                theme: self.site.theme,
                particles: self.particles.enabled.then_some(self.particles.src),
                generated_at: self.site.timestamp.then(Utc::now),
            },
            minify: self.build.minify,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {}; using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

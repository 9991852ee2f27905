//! Scaffold the portfolio content tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use folio_static::metadata::DESCRIPTION_FILE;
use folio_static::Buckets;

use crate::config::ConfigFile;

/// Starter skill categories and their entries.
const STARTER_SKILLS: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &["Java", "JavaScript", "Python", "Shell", "C++", "Scala", "PL-SQL", "KSQL"],
    ),
    (
        "Frameworks",
        &["Spring", "Micronaut", "Quarkus", "Django", "Angular", "VueJS", "MuleSoft"],
    ),
    ("Libraries", &["Hibernate", "OpenAPI", "Kafka"]),
    ("Testing and Quality", &["JUnit 5", "Cucumber", "SonarQube"]),
    (
        "DevSecOps",
        &["Git", "Bitbucket", "GitLab CI", "Jenkins", "Docker", "Kubernetes"],
    ),
    ("Cloud", &["GCP"]),
    ("Modeling", &["UML (draw.io)", "UI-UX (Figma)", "API (RAML, YAML)"]),
    (
        "Databases and Search Engines",
        &["PostgreSQL", "Oracle", "MySQL", "MongoDB", "Elasticsearch"],
    ),
    (
        "Software Architecture",
        &["Layered", "MVC", "Microservices", "Hexagonal"],
    ),
    ("Engineering Principles", &["SOLID", "Clean Code"]),
];

/// Run the init command.
pub fn run(config_path: &Path, config: &ConfigFile, yes: bool) -> Result<()> {
    tracing::info!("Initializing portfolio...");

    if !config_path.exists() {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let root = &config.content.root;
    let written = scaffold(root, &config.buckets(), yes, Utc::now())?;

    tracing::info!(
        "Wrote {} description files under {}",
        written,
        root.display()
    );
    tracing::info!("Edit them, add notes.md files, then run 'folio build'.");

    Ok(())
}

/// Create the bucket directories and starter skills under `root`, each
/// with a `description.json`.
///
/// Existing description files are kept unless `overwrite` is set.
/// Returns the number of description files written.
pub fn scaffold(
    root: &Path,
    buckets: &Buckets,
    overwrite: bool,
    now: DateTime<Utc>,
) -> Result<usize> {
    let mut written = 0;

    let skills = root.join(&buckets.skills);
    written += write_description(&skills, &buckets.skills, overwrite, now)?;
    for (category, items) in STARTER_SKILLS {
        let category_dir = skills.join(category);
        written += write_description(&category_dir, category, overwrite, now)?;
        for item in *items {
            written += write_description(&category_dir.join(item), item, overwrite, now)?;
        }
    }

    for bucket in [&buckets.mvp, &buckets.poc] {
        written += write_description(&root.join(bucket), bucket, overwrite, now)?;
    }

    Ok(written)
}

fn write_description(
    dir: &Path,
    name: &str,
    overwrite: bool,
    now: DateTime<Utc>,
) -> Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(DESCRIPTION_FILE);
    if path.exists() && !overwrite {
        tracing::debug!("Keeping {}", path.display());
        return Ok(0);
    }

    let record = serde_json::json!({
        "name": name,
        "description": format!("Description for {}", name),
        "created": now.to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    let json = serde_json::to_string_pretty(&record)?;

    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(1)
}

const DEFAULT_CONFIG: &str = r#"# folio configuration

[site]
title = "My Portfolio"
subtitle = ""
author = ""
# panels, grid or list
layout = "panels"
# light or dark
theme = "light"
# Embed the generation time in the footer
timestamp = false

[content]
# Directory holding the three buckets
root = "."
# Generated page
output = "index.html"
max_depth = 16
follow_links = false
ignore = ["node_modules", "target"]

[buckets]
skills = "Skills"
mvp = "MVP Projects"
poc = "POC Projects"

[build]
minify = true

[particles]
enabled = true
src = "https://cdn.jsdelivr.net/particles.js/2.0.0/particles.min.js"
"#;

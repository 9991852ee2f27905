//! Static portfolio generator for folio.
//!
//! Scans a content directory, loads per-directory `description.json` and
//! `notes.md` metadata, and writes one self-contained HTML page.

pub mod assemble;
pub mod assets;
pub mod builder;
pub mod icons;
pub mod metadata;
pub mod render;
pub mod templates;
pub mod tree;

pub use assemble::{assemble, write_output};
pub use builder::{BuildConfig, BuildError, BuildResult, SiteOptions, StaticBuilder};
pub use metadata::{
    load_all, load_description, load_notes, DescriptionRecord, MetadataError, MetadataIndex,
};
pub use render::{render, Bucket, Buckets, Rendered};
pub use templates::{Layout, TemplateEngine, Theme};
pub use tree::{scan, DirectoryNode, ScanOptions};

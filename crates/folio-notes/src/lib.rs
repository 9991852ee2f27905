//! Markdown note rendering for folio.
//!
//! Converts `notes.md` files to HTML with raw HTML neutralized and
//! `note:` links turned into client-side cross-references.

pub mod markdown;
pub mod xref;

pub use markdown::{render_note, NoteHtml};
pub use xref::{CrossRef, XREF_SCHEME};

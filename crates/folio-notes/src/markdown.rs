//! Sanitizing Markdown renderer.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::xref::{is_blocked, CrossRef};

/// A rendered note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteHtml {
    /// Sanitized HTML output
    pub html: String,

    /// Cross-references in document order
    pub references: Vec<CrossRef>,
}

/// How a link start event was rewritten, so the matching end can follow suit.
#[derive(Debug, Clone, Copy)]
enum LinkRewrite {
    Keep,
    CrossRef,
    Drop,
}

/// Render Markdown note source to sanitized HTML.
///
/// Raw HTML is emitted as escaped text. Links and images with script-capable
/// schemes lose their destination. `note:` links become cross-reference anchors.
pub fn render_note(source: &str) -> NoteHtml {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut references = Vec::new();
    let mut links: Vec<LinkRewrite> = Vec::new();
    let mut images: Vec<LinkRewrite> = Vec::new();
    let mut events: Vec<Event> = Vec::new();

    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(Tag::HtmlBlock) => events.push(Event::Start(Tag::Paragraph)),
            Event::End(TagEnd::HtmlBlock) => events.push(Event::End(TagEnd::Paragraph)),
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                if let Some(xref) = CrossRef::from_dest(&dest_url) {
                    events.push(Event::Html(CowStr::from(xref.open_tag())));
                    references.push(xref);
                    links.push(LinkRewrite::CrossRef);
                } else if is_blocked(&dest_url) {
                    links.push(LinkRewrite::Drop);
                } else {
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url,
                        title,
                        id,
                    }));
                    links.push(LinkRewrite::Keep);
                }
            }
            Event::End(TagEnd::Link) => match links.pop() {
                Some(LinkRewrite::CrossRef) => events.push(Event::Html(CowStr::from("</a>"))),
                Some(LinkRewrite::Drop) => {}
                Some(LinkRewrite::Keep) | None => events.push(Event::End(TagEnd::Link)),
            },

            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                if is_blocked(&dest_url) {
                    images.push(LinkRewrite::Drop);
                } else {
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url,
                        title,
                        id,
                    }));
                    images.push(LinkRewrite::Keep);
                }
            }
            Event::End(TagEnd::Image) => match images.pop() {
                Some(LinkRewrite::Drop) => {}
                _ => events.push(Event::End(TagEnd::Image)),
            },

            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    NoteHtml {
        html: html_output,
        references,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_plain_markdown() {
        let note = render_note("# Kafka\n\nUsed for **event streaming**.");

        assert_eq!(
            note.html,
            "<h1>Kafka</h1>\n<p>Used for <strong>event streaming</strong>.</p>\n"
        );
        assert!(note.references.is_empty());
    }

    #[test]
    fn escapes_raw_html() {
        let note = render_note("Hello <script>alert(1)</script> world\n\n<div onclick=\"x()\">block</div>\n");

        assert!(!note.html.contains("<script>"));
        assert!(!note.html.contains("<div"));
        assert!(note.html.contains("&lt;script&gt;"));
        assert!(note.html.contains("&lt;div onclick="));
    }

    #[test]
    fn converts_cross_reference_link() {
        let note = render_note("See [Kafka](<note:Skills/Libraries/Kafka>) for details.");

        assert_eq!(
            note.html,
            "<p>See <a href=\"#\" class=\"note-link\" data-note-path=\"Skills/Libraries/Kafka\">Kafka</a> for details.</p>\n"
        );
        assert_eq!(note.references.len(), 1);
        assert_eq!(note.references[0].path, "Skills/Libraries/Kafka");
    }

    #[test]
    fn cross_reference_path_is_unmodified() {
        let path = "Skills/Test and quality tools/C++ (legacy)";
        let note = render_note(&format!("[legacy](<note:{}>)", path));

        assert!(note
            .html
            .contains(&format!("data-note-path=\"{}\"", path)));
        assert_eq!(note.references[0].path, path);
    }

    #[test]
    fn drops_script_links() {
        let note = render_note("[click](javascript:alert(1)) and ![img](javascript:x)");

        assert!(!note.html.contains("javascript"));
        assert!(!note.html.contains("<a"));
        assert!(!note.html.contains("<img"));
        assert!(note.html.contains("click"));
    }

    #[test]
    fn keeps_regular_links() {
        let note = render_note("[docs](https://kafka.apache.org/)");

        assert_eq!(
            note.html,
            "<p><a href=\"https://kafka.apache.org/\">docs</a></p>\n"
        );
    }

    #[test]
    fn collects_references_in_order() {
        let note = render_note("[a](note:A) then [b](note:B/C) then [a again](note:A)");

        let paths: Vec<_> = note.references.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["A", "B/C", "A"]);
    }
}

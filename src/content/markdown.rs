//! Markdown rendering for message bubbles
//!
//! GFM extensions, soft breaks as `<br />`, guarded link targets, mention
//! spans and compact block styling. Raw HTML in a message is shown as text.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::escape_html;

use super::links::{classify_link_target, LinkKind};
use crate::types::User;

const PARAGRAPH_OPEN: &str = "<p style=\"margin: 0\">";
const ITEM_OPEN: &str = "<li style=\"margin: 0; padding: 0\">";
const LIST_STYLE: &str = "margin: 0.2em 0; padding-left: 1.4em";

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Render sanitized, mention-linked markdown to HTML.
pub fn render_html(markdown: &str, roster: &[User]) -> String {
    // One entry per open link: true when it was rendered as a mention span.
    let mut open_links: Vec<bool> = Vec::new();
    let events = Parser::new_ext(markdown, parser_options())
        .map(|event| rewrite_event(event, roster, &mut open_links));

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn rewrite_event<'a>(event: Event<'a>, roster: &[User], open_links: &mut Vec<bool>) -> Event<'a> {
    match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),

        Event::Start(Tag::Paragraph) => Event::Html(PARAGRAPH_OPEN.into()),
        Event::End(TagEnd::Paragraph) => Event::Html("</p>\n".into()),
        Event::Start(Tag::Item) => Event::Html(ITEM_OPEN.into()),
        Event::End(TagEnd::Item) => Event::Html("</li>\n".into()),
        Event::Start(Tag::List(None)) => {
            Event::Html(format!("<ul style=\"{LIST_STYLE}\">\n").into())
        }
        Event::Start(Tag::List(Some(1))) => {
            Event::Html(format!("<ol style=\"{LIST_STYLE}\">\n").into())
        }
        Event::Start(Tag::List(Some(start))) => {
            Event::Html(format!("<ol start=\"{start}\" style=\"{LIST_STYLE}\">\n").into())
        }
        Event::End(TagEnd::List(true)) => Event::Html("</ol>\n".into()),
        Event::End(TagEnd::List(false)) => Event::Html("</ul>\n".into()),

        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let target = classify_link_target(&dest_url);
            match LinkKind::of(&target, roster) {
                kind @ LinkKind::Mention { .. } => {
                    open_links.push(true);
                    let open = match kind.tooltip() {
                        Some(tooltip) => format!(
                            "<span class=\"mention-highlight\" title=\"{}\">",
                            escape_attr(&tooltip)
                        ),
                        None => "<span class=\"mention-highlight\">".to_string(),
                    };
                    Event::Html(open.into())
                }
                LinkKind::Anchor { href } => {
                    open_links.push(false);
                    Event::Start(Tag::Link {
                        link_type,
                        dest_url: CowStr::from(href),
                        title,
                        id,
                    })
                }
            }
        }
        Event::End(TagEnd::Link) => {
            if open_links.pop().unwrap_or(false) {
                Event::Html("</span>".into())
            } else {
                Event::End(TagEnd::Link)
            }
        }
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::from(classify_link_target(&dest_url)),
            title,
            id,
        }),

        other => other,
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    // Writing into a String cannot fail.
    escape_html(&mut escaped, value).unwrap_or_default();
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<User> {
        vec![User::new("u1", "Alice"), User::new("u2", "Bob \"B\" <Ops>")]
    }

    #[test]
    fn test_paragraph_is_compact() {
        let out = render_html("hello", &[]);
        assert_eq!(out, "<p style=\"margin: 0\">hello</p>\n");
    }

    #[test]
    fn test_soft_break_becomes_br() {
        let out = render_html("line one\nline two", &[]);
        assert!(out.contains("line one<br />"), "{out}");
    }

    #[test]
    fn test_mention_renders_as_span_with_tooltip() {
        let out = render_html("hi [@alice](mention://u1)", &roster());
        assert!(
            out.contains("<span class=\"mention-highlight\" title=\"@Alice\">@alice</span>"),
            "{out}"
        );
        assert!(!out.contains("<a "));
    }

    #[test]
    fn test_unknown_mention_has_no_tooltip() {
        let out = render_html("[@ghost](mention://nobody)", &roster());
        assert!(out.contains("<span class=\"mention-highlight\">@ghost</span>"), "{out}");
    }

    #[test]
    fn test_tooltip_is_escaped() {
        let out = render_html("[@bob](mention://u2)", &roster());
        assert!(out.contains("title=\"@Bob &quot;B&quot; &lt;Ops&gt;\""), "{out}");
    }

    #[test]
    fn test_escape_attr_covers_quotes_and_ampersand() {
        assert_eq!(escape_attr("O'Neil & \"Co\""), "O&#39;Neil &amp; &quot;Co&quot;");
        assert_eq!(escape_attr("plain"), "plain");
    }

    #[test]
    fn test_unsafe_link_is_blanked() {
        let out = render_html("[click](javascript:alert(1))", &[]);
        assert!(out.contains("<a href=\"\">click</a>"), "{out}");
        assert!(!out.contains("javascript"));
    }

    #[test]
    fn test_ordinary_link_is_anchor() {
        let out = render_html("[docs](https://example.com/a?b=1)", &[]);
        assert!(out.contains("<a href=\"https://example.com/a?b=1\">docs</a>"), "{out}");
    }

    #[test]
    fn test_unsafe_image_source_is_blanked() {
        let out = render_html("![x](data:image/svg+xml,abc)", &[]);
        assert!(out.contains("src=\"\""), "{out}");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render_html("<script>alert(1)</script>", &[]);
        assert!(!out.contains("<script>"), "{out}");
        assert!(out.contains("&lt;script&gt;"), "{out}");

        let inline = render_html("say <b>hi</b>", &[]);
        assert!(inline.contains("&lt;b&gt;hi&lt;/b&gt;"), "{inline}");
    }

    #[test]
    fn test_lists_are_compact() {
        let out = render_html("- a\n- b", &[]);
        assert!(out.starts_with(&format!("<ul style=\"{LIST_STYLE}\">")), "{out}");
        assert!(out.contains("<li style=\"margin: 0; padding: 0\">a</li>"), "{out}");

        let ordered = render_html("3. c\n4. d", &[]);
        assert!(ordered.contains("<ol start=\"3\""), "{ordered}");
        assert!(ordered.contains("</ol>"));
    }

    #[test]
    fn test_gfm_extensions() {
        let table = render_html("| a | b |\n|---|---|\n| 1 | 2 |", &[]);
        assert!(table.contains("<table>"), "{table}");

        let strike = render_html("~~gone~~", &[]);
        assert!(strike.contains("<del>gone</del>"), "{strike}");
    }
}

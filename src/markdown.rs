//! Markdown rendering for article content.
//!
//! Wraps [pulldown-cmark](https://crates.io/crates/pulldown-cmark) with the
//! extensions article content relies on: GFM tables and fenced code blocks
//! (fenced code is native to the parser). Headings additionally get
//! slugified `id` attributes so every section is linkable by anchor —
//! duplicate headings get a `-1`, `-2`, … suffix in document order.
//!
//! Rendering is a pure function of the input text: the same markdown always
//! produces the same HTML, which is what makes rebuilds byte-identical.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use std::collections::HashMap;

/// Convert markdown text to HTML.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let events: Vec<Event> = Parser::new_ext(text, options).collect();
    let events = anchor_headings(events);

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Assign a slugified `id` to every heading that doesn't carry one.
fn anchor_headings(mut events: Vec<Event>) -> Vec<Event> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        let needs_id = matches!(&events[i], Event::Start(Tag::Heading { id: None, .. }));
        if !needs_id {
            continue;
        }
        let text = heading_text(&events[i + 1..]);
        let slug = unique_slug(&mut seen, &slugify(&text));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
    }
    events
}

/// Plain text of a heading: everything up to the matching end tag.
fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::End(TagEnd::Heading(_)) => break,
            _ => {}
        }
    }
    text
}

/// Lowercase, alphanumerics kept, everything else collapsed to single dashes.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        // Headings with no alphanumeric content still need an anchor
        "section".to_string()
    } else {
        slug
    }
}

fn unique_slug(seen: &mut HashMap<String, usize>, slug: &str) -> String {
    let count = seen.entry(slug.to_string()).or_insert(0);
    *count += 1;
    if *count == 1 {
        slug.to_string()
    } else {
        format!("{slug}-{}", *count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_and_emphasis() {
        let html = render("This is **bold** and *italic*.");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn fenced_code_blocks() {
        let html = render("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre><code"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn tables_are_enabled() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn headings_get_slug_ids() {
        let html = render("# Getting Started\n\ntext\n\n## Next Steps");
        assert!(html.contains(r##"<h1 id="getting-started">"##));
        assert!(html.contains(r##"<h2 id="next-steps">"##));
    }

    #[test]
    fn duplicate_headings_get_suffixes() {
        let html = render("## Setup\n\n## Setup\n\n## Setup");
        assert!(html.contains(r##"id="setup""##));
        assert!(html.contains(r##"id="setup-1""##));
        assert!(html.contains(r##"id="setup-2""##));
    }

    #[test]
    fn heading_slug_strips_punctuation() {
        let html = render("# What's new, in 2024?");
        assert!(html.contains(r##"id="what-s-new-in-2024""##));
    }

    #[test]
    fn heading_with_inline_code_uses_code_text() {
        let html = render("# The `build` command");
        assert!(html.contains(r##"id="the-build-command""##));
    }

    #[test]
    fn symbol_only_heading_gets_fallback_anchor() {
        let html = render("# ---");
        assert!(html.contains(r##"id="section""##));
    }

    #[test]
    fn rendering_is_deterministic() {
        let text = "# Title\n\nSome *content* with a [link](https://example.com).\n";
        assert_eq!(render(text), render(text));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }
}

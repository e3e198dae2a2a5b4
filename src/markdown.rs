//! Markdown rendering for event descriptions
//!
//! Descriptions are user supplied, so raw HTML is shown as text and links
//! with script-capable schemes are dropped to plain text.

use pulldown_cmark::{html::push_html, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to an HTML string safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let mut html_output = String::new();
    push_html(&mut html_output, sanitize(Parser::new_ext(text, get_options())).into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn sanitize<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut in_unsafe_link = false;
    let mut in_unsafe_image = false;

    for event in parser {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::Start(Tag::Link { ref dest_url, .. }) if !is_safe_url(dest_url) => {
                in_unsafe_link = true;
            }
            Event::End(TagEnd::Link) if in_unsafe_link => in_unsafe_link = false,
            // alt text still comes through as plain text
            Event::Start(Tag::Image { ref dest_url, .. }) if !is_safe_url(dest_url) => {
                in_unsafe_image = true;
            }
            Event::End(TagEnd::Image) if in_unsafe_image => in_unsafe_image = false,
            other => events.push(other),
        }
    }
    events
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    match lower.split_once(':') {
        // relative urls, or a colon that only appears after a path/query/fragment
        None => true,
        Some((scheme, _)) if scheme.contains(['/', '?', '#']) => true,
        Some((scheme, _)) => matches!(scheme, "http" | "https" | "mailto"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("**Live** jazz\n\n- drinks\n- food");
        assert!(html.contains("<strong>Live</strong>"));
        assert!(html.contains("<li>drinks</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn script_links_lose_their_href() {
        let html = render_markdown("[click](javascript:alert(1)) and [site](https://example.org)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click"));
        assert!(html.contains("href=\"https://example.org\""));
    }
}

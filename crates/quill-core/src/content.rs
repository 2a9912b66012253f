//! Rendering of submitted post content.
//!
//! Content is rendered once, at write time, and stored as HTML. Create and
//! edit share this transform so a post body means the same thing no matter
//! which path stored it.

use pulldown_cmark::{Parser, html};

/// Render submitted markdown/plain text to HTML.
///
/// A bare line of text becomes a single wrapped paragraph:
/// `"Test content"` renders to `"<p>Test content</p>\n"`.
pub fn render_markdown(input: &str) -> String {
    let parser = Parser::new(input);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_becomes_one_paragraph() {
        assert_eq!(render_markdown("Test content"), "<p>Test content</p>\n");
    }

    #[test]
    fn emphasis_is_rendered() {
        assert_eq!(
            render_markdown("hello *world*"),
            "<p>hello <em>world</em></p>\n"
        );
    }

    #[test]
    fn paragraphs_are_separated() {
        assert_eq!(
            render_markdown("first\n\nsecond"),
            "<p>first</p>\n<p>second</p>\n"
        );
    }

    #[test]
    fn empty_input_renders_to_nothing() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn rendering_is_stable() {
        let once = render_markdown("Test content");
        let twice = render_markdown("Test content");
        assert_eq!(once, twice);
    }
}

//! Markdown rendering for doc-comments.

use comrak::Options;
use regex::Regex;
use std::sync::LazyLock;

static PRE_AFTER_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n])<pre>").expect("pre pattern compiles"));

static PRE_LEADING_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pre>(<code>)?\n?").expect("pre newline pattern compiles"));

/// Renders doc-comment markdown to HTML.
///
/// Raw HTML in doc-comments is trusted and passed through, since API docs
/// routinely embed `<pre>`, `<code>` and tables written by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates renderer with table and strikethrough extensions.
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options<'static> {
        let mut options = Options::default();

        // Extension options
        options.extension.strikethrough = true;
        options.extension.table = true;

        // Render options (doc-comments are trusted)
        options.render.unsafe_ = true;

        options
    }

    /// Renders markdown content to HTML string.
    ///
    /// `<pre>` blocks are normalized first, see [`normalize_pre_blocks`].
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML as string
    pub fn render(&self, content: &str) -> String {
        let content = normalize_pre_blocks(content);
        comrak::markdown_to_html(&content, &Self::options())
    }
}

/// Prepares hand written `<pre>` blocks for the markdown parser.
///
/// Doc-comments often put `<pre>` at the end of a paragraph line. Markdown
/// only starts an HTML block when the tag opens a line, otherwise the
/// contents get parsed as markdown and end up in nested code blocks, so a
/// newline is added before such `<pre>`. A newline right after `<pre>` or
/// `<pre><code>` is dropped so code never starts with a blank line.
pub fn normalize_pre_blocks(input: &str) -> String {
    let separated = PRE_AFTER_TEXT.replace_all(input, "${1}\n<pre>");
    PRE_LEADING_NEWLINE
        .replace_all(&separated, "<pre>${1}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_inline_pre_moves_to_new_line() {
        assert_eq!(normalize_pre_blocks("text<pre>code"), "text\n<pre>code");
    }

    #[test]
    fn test_normalize_pre_strips_leading_newline() {
        assert_eq!(normalize_pre_blocks("<pre>\ncode"), "<pre>code");
        assert_eq!(
            normalize_pre_blocks("<pre><code>\ncode</code></pre>"),
            "<pre><code>code</code></pre>"
        );
    }

    #[test]
    fn test_normalize_pre_strips_only_one_newline() {
        assert_eq!(normalize_pre_blocks("<pre>\n\ncode"), "<pre>\ncode");
    }

    #[test]
    fn test_normalize_pre_combined() {
        // Arrange
        let input = "Example:<pre>\nvar x = 1;\n</pre>";

        // Act
        let normalized = normalize_pre_blocks(input);

        // Assert
        assert_eq!(normalized, "Example:\n<pre>var x = 1;\n</pre>");
    }

    #[test]
    fn test_normalize_without_pre_unchanged() {
        let input = "Plain *markdown* with <b>html</b>.\n";
        assert_eq!(normalize_pre_blocks(input), input);
    }

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "# Hello\n\nThis is **bold** text.";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(html.contains("<h1>"), "Should contain h1 tag");
        assert!(html.contains("Hello"), "Should contain heading text");
        assert!(html.contains("<strong>bold</strong>"), "Should contain strong tag");
    }

    #[test]
    fn test_render_gfm_tables() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = r#"
| Option | Type |
|--------|------|
| title  | String |
"#;

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(html.contains("<table>"), "Should contain table tag");
        assert!(html.contains("<td>title</td>"), "Should contain cell: {}", html);
    }

    #[test]
    fn test_render_html_passthrough() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "<div class=\"note\">Raw</div>\n\nNormal text.";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(
            html.contains("<div class=\"note\">Raw</div>"),
            "Should pass through raw HTML: {}",
            html
        );
    }

    #[test]
    fn test_render_inline_pre_stays_single_block() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "For example:<pre>\n    var p = new Panel();\n</pre>\n";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert_eq!(html.matches("<pre>").count(), 1, "No nested pre blocks: {}", html);
        assert!(!html.contains("<code>"), "Indented line must not become code: {}", html);
    }

    #[test]
    fn test_render_keeps_doc_tags_intact() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "See {@link Ext.Panel#add} and {@img logo.png Logo}.";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(html.contains("{@link Ext.Panel#add}"), "Link tag kept: {}", html);
        assert!(html.contains("{@img logo.png Logo}"), "Image tag kept: {}", html);
    }

    #[test]
    fn test_render_indented_example_code() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "Usage:\n\n    @example\n    var x = 1;\n";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(
            html.contains("<pre><code>@example\nvar x = 1;"),
            "Example annotation should open the code block: {}",
            html
        );
    }

    #[test]
    fn test_render_empty_markdown() {
        let renderer = MarkdownRenderer::default();
        assert_eq!(renderer.render(""), "");
    }
}

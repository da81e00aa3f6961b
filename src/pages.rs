//! Standalone HTML page for formatted documentation.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Data container for documentation page generation.
#[derive(Debug, Clone, Copy)]
pub struct DocPageData<'a> {
    /// Page heading, usually the documented class name
    pub title: &'a str,
    /// Shortened description shown above the body
    pub summary: Option<&'a str>,
    /// Formatted doc-comment HTML
    pub body_html: &'a str,
}

/// Generates HTML page wrapping formatted documentation.
///
/// Title and summary are escaped, the body is inserted verbatim since it
/// is already HTML.
///
/// # Arguments
///
/// * `data`: Page data container
///
/// # Returns
///
/// Complete HTML document
pub fn doc_page(data: DocPageData<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (data.title) " - docfmt" }
            }
            body {
                div class="container" {
                    h1 class="doc-title" { (data.title) }
                    @if let Some(summary) = data.summary {
                        p class="doc-summary" { (summary) }
                    }
                    div class="doc-body" {
                        (PreEscaped(data.body_html))
                    }
                }
            }
        }
    }
}

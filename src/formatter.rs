//! Doc-comment formatting.

use anyhow::{Context, Result};
use std::path::Path;

use crate::context::RenderContext;
use crate::example::ExampleSource;
use crate::markdown::{LinkResolver, MarkdownRenderer};
use crate::relations::Relations;
use crate::scanner::{Scanner, Span};
use crate::summary::{DEFAULT_MAX_LENGTH, Shortener};
use crate::template::{DEFAULT_EXAMPLE_TEMPLATE, DEFAULT_IMG_TEMPLATE, DEFAULT_LINK_TEMPLATE, Template};
use crate::util::{escape_text, html_escape};
use crate::warning::{Warning, WarningKind, Warnings};

/// Opening of a code block marked with `@example`.
const INLINE_EXAMPLE_OPEN: &str = r#"<pre class="inline-example"><code>"#;

/// Templates and limits used by a formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Replaces `{@link Class#member text}`
    pub link_template: Template,
    /// Replaces `{@img url alt}`
    pub img_template: Template,
    /// Replaces `{@example path}`
    pub example_template: Template,
    /// Maximum length of text that doesn't get shortened
    pub max_length: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            link_template: Template::new(DEFAULT_LINK_TEMPLATE),
            img_template: Template::new(DEFAULT_IMG_TEMPLATE),
            example_template: Template::new(DEFAULT_EXAMPLE_TEMPLATE),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Formats doc-comments into HTML.
///
/// Configuration is fixed at construction; everything that varies per
/// document travels in the [`RenderContext`] passed to each call, so one
/// formatter serves many classes and can be shared between threads.
pub struct DocFormatter<'a> {
    config: FormatterConfig,
    relations: &'a (dyn Relations + Sync),
    examples: Option<&'a (dyn ExampleSource + Sync)>,
    markdown: MarkdownRenderer,
}

impl<'a> DocFormatter<'a> {
    /// Creates formatter with default templates.
    ///
    /// # Arguments
    ///
    /// * `relations`: Classes that links and auto-links resolve against
    pub fn new(relations: &'a (dyn Relations + Sync)) -> Self {
        Self {
            config: FormatterConfig::default(),
            relations,
            examples: None,
            markdown: MarkdownRenderer::new(),
        }
    }

    /// Replaces configuration.
    pub fn with_config(mut self, config: FormatterConfig) -> Self {
        self.config = config;
        self
    }

    /// Enables `{@example}` tags using given source.
    pub fn with_examples(mut self, examples: &'a (dyn ExampleSource + Sync)) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Formats doc-comment for placement into HTML.
    ///
    /// Renders markdown, then replaces tags and auto-links class names.
    pub fn format(&self, input: &str, ctx: &RenderContext) -> String {
        self.format_with_warnings(input, ctx).0
    }

    /// Formats doc-comment and returns the warnings it raised.
    pub fn format_with_warnings(&self, input: &str, ctx: &RenderContext) -> (String, Vec<Warning>) {
        let html = self.markdown.render(input);
        self.replace_with_warnings(&html, ctx)
    }

    /// Formats doc-comment read from file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn format_file(&self, path: impl AsRef<Path>, ctx: &RenderContext) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read doc-comment file {}", path.display()))?;
        Ok(self.format(&content, ctx))
    }

    /// Replaces tags in HTML and auto-links class names.
    ///
    /// - `{@link Class#member text}` becomes the link template
    /// - `{@img path/to/image.jpg alt text}` becomes the image template
    /// - `{@example path/to/example.js}` becomes the example source
    /// - code blocks starting with `@example` get the `inline-example` class
    ///
    /// Text outside these spans is copied unchanged except for class names
    /// recognized by the auto-linker.
    pub fn replace(&self, input: &str, ctx: &RenderContext) -> String {
        self.replace_with_warnings(input, ctx).0
    }

    /// Replaces tags and returns the warnings raised for unresolved ones.
    pub fn replace_with_warnings(&self, input: &str, ctx: &RenderContext) -> (String, Vec<Warning>) {
        let resolver = LinkResolver::new(self.relations, &self.config.link_template, ctx);
        let mut warnings = Warnings::default();
        let mut out = String::with_capacity(input.len());

        for span in Scanner::new(input) {
            match span {
                Span::Link { raw, target, text } => {
                    out.push_str(&resolver.resolve_tag(raw, target, text, &mut warnings));
                }
                Span::Image { url, alt, .. } => out.push_str(&self.img(url, alt)),
                Span::Example { raw, path } => {
                    out.push_str(&self.example(raw, path, ctx, &mut warnings));
                }
                Span::ExampleAnnotation { .. } => out.push_str(INLINE_EXAMPLE_OPEN),
                Span::Literal(literal) => out.push_str(literal),
                Span::Text(text) => out.push_str(&resolver.auto_link(text)),
            }
        }

        (out, warnings.into_vec())
    }

    /// Applies the image template.
    fn img(&self, url: &str, alt: Option<&str>) -> String {
        self.config.img_template.render(|key| match key {
            'u' => Some(url.to_string()),
            'a' => Some(escape_text(alt.unwrap_or(""))),
            _ => None,
        })
    }

    /// Applies the example template with source fetched for path.
    ///
    /// Missing or failing example source leaves the body empty.
    fn example(&self, raw: &str, path: &str, ctx: &RenderContext, warnings: &mut Warnings) -> String {
        let body = match self.examples {
            Some(source) => match source.fetch(path) {
                Ok(code) => html_escape(&code),
                Err(e) => {
                    let reason = format!("{:#}", e);
                    warnings.push(WarningKind::ExampleFetch { reason }, ctx.location(), raw);
                    String::new()
                }
            },
            None => {
                warnings.push(WarningKind::NoExampleSource, ctx.location(), raw);
                String::new()
            }
        };

        self.config.example_template.render(|key| match key {
            'a' => Some(body.clone()),
            _ => None,
        })
    }

    /// Shortens rendered HTML, see [`Shortener::shorten`].
    pub fn shorten(&self, html: &str) -> String {
        Shortener::new(self.config.max_length).shorten(html)
    }

    /// Returns true when rendered HTML should get shortened.
    pub fn too_long(&self, html: &str) -> bool {
        Shortener::new(self.config.max_length).too_long(html)
    }
}

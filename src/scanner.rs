//! Span scanner for doc-comment HTML.
//!
//! Splits text into tag spans and plain text runs. At every position the
//! recognizers are tried in fixed priority order and the first one that
//! matches at the cursor wins:
//!
//! 1. `{@link Target optional text}`
//! 2. `{@img url optional alt text}`
//! 3. `{@example path}`
//! 4. `<pre><code>@example` annotation left by the markdown renderer
//! 5. a lone `{` or `<`
//! 6. the longest run containing neither `{` nor `<`

use regex::{Captures, Regex};
use std::sync::LazyLock;

static LINK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\{@link\s+(\S*?)(?:\s+(.+?))?\}").expect("link tag pattern compiles")
});

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\{@img\s+(\S*?)(?:\s+(.+?))?\}").expect("img tag pattern compiles")
});

static EXAMPLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\{@example\s+(\S*?)\s*\}").expect("example tag pattern compiles")
});

static EXAMPLE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A<pre><code>@example(?: +[^\n]*)?\s+").expect("annotation pattern compiles")
});

/// Classified piece of scanned text.
///
/// Every variant borrows from the scanned input; `raw` always holds the
/// exact consumed text so unresolved tags can be reported verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'t> {
    /// `{@link target text}`
    Link {
        raw: &'t str,
        target: &'t str,
        text: Option<&'t str>,
    },
    /// `{@img url alt}`
    Image {
        raw: &'t str,
        url: &'t str,
        alt: Option<&'t str>,
    },
    /// `{@example path}`
    Example { raw: &'t str, path: &'t str },
    /// `<pre><code>@example ...` opening of an inline example block
    ExampleAnnotation { raw: &'t str },
    /// Lone `{` or `<` not starting any tag
    Literal(&'t str),
    /// Text free of `{` and `<`
    Text(&'t str),
}

impl<'t> Span<'t> {
    /// Exact input text this span consumed.
    pub fn raw(&self) -> &'t str {
        match *self {
            Span::Link { raw, .. }
            | Span::Image { raw, .. }
            | Span::Example { raw, .. }
            | Span::ExampleAnnotation { raw }
            | Span::Literal(raw)
            | Span::Text(raw) => raw,
        }
    }
}

type Recognizer = for<'t> fn(&'t str) -> Option<Span<'t>>;

/// Recognizers in priority order.
const RECOGNIZERS: [Recognizer; 6] = [
    link_tag,
    img_tag,
    example_tag,
    example_annotation,
    literal,
    text,
];

fn group<'t>(caps: &Captures<'t>, idx: usize) -> Option<&'t str> {
    caps.get(idx).map(|m| m.as_str())
}

fn link_tag(rest: &str) -> Option<Span<'_>> {
    let caps = LINK_TAG.captures(rest)?;
    Some(Span::Link {
        raw: group(&caps, 0)?,
        target: group(&caps, 1)?,
        text: group(&caps, 2),
    })
}

fn img_tag(rest: &str) -> Option<Span<'_>> {
    let caps = IMG_TAG.captures(rest)?;
    Some(Span::Image {
        raw: group(&caps, 0)?,
        url: group(&caps, 1)?,
        alt: group(&caps, 2),
    })
}

fn example_tag(rest: &str) -> Option<Span<'_>> {
    let caps = EXAMPLE_TAG.captures(rest)?;
    Some(Span::Example {
        raw: group(&caps, 0)?,
        path: group(&caps, 1)?,
    })
}

fn example_annotation(rest: &str) -> Option<Span<'_>> {
    EXAMPLE_ANNOTATION
        .find(rest)
        .map(|m| Span::ExampleAnnotation { raw: m.as_str() })
}

fn literal(rest: &str) -> Option<Span<'_>> {
    let first = rest.chars().next()?;
    matches!(first, '{' | '<').then(|| Span::Literal(&rest[..first.len_utf8()]))
}

fn text(rest: &str) -> Option<Span<'_>> {
    let end = rest.find(['{', '<']).unwrap_or(rest.len());
    (end > 0).then(|| Span::Text(&rest[..end]))
}

/// Iterator over the spans of a text.
///
/// Concatenating the `raw` text of all yielded spans reproduces the input.
#[derive(Debug, Clone)]
pub struct Scanner<'t> {
    input: &'t str,
    pos: usize,
}

impl<'t> Scanner<'t> {
    pub fn new(input: &'t str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'t> Iterator for Scanner<'t> {
    type Item = Span<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let span = RECOGNIZERS.iter().find_map(|recognize| recognize(rest))?;
        self.pos += span.raw().len();
        Some(span)
    }
}

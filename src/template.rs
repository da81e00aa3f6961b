//! Placeholder templates for generated HTML fragments.

use std::fmt;

/// Default template for `{@link}` tags.
pub const DEFAULT_LINK_TEMPLATE: &str = r#"<a href="%c%#%m">%a</a>"#;

/// Default template for `{@img}` tags.
pub const DEFAULT_IMG_TEMPLATE: &str = r#"<img src="%u" alt="%a"/>"#;

/// Default template for `{@example}` tags.
pub const DEFAULT_EXAMPLE_TEMPLATE: &str = r#"<pre class="inline-example"><code>%a</code></pre>"#;

/// HTML template with `%x` placeholder tokens.
///
/// A token is `%` followed by one significant character: a word character,
/// `#` or `-`. Each template kind has its own vocabulary:
///
/// - link: `%c` class name, `%m` member fragment (`method-urlEncode`),
///   `%#` and `%-` inserting `#` and `-` when a member is present, `%a`
///   anchor text
/// - image: `%u` URL, `%a` alt text
/// - example: `%a` example source
///
/// Tokens outside the vocabulary are copied literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Creates template from raw source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the raw template source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders template substituting placeholder tokens.
    ///
    /// # Arguments
    ///
    /// * `lookup`: Returns the value for a placeholder character, or None
    ///   when the character is not part of this template's vocabulary
    ///
    /// # Returns
    ///
    /// Rendered HTML fragment
    pub fn render<F>(&self, lookup: F) -> String
    where
        F: Fn(char) -> Option<String>,
    {
        let mut out = String::with_capacity(self.source.len());
        let mut chars = self.source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            match chars.peek().copied() {
                Some(key) if is_placeholder_char(key) => {
                    chars.next();
                    match lookup(key) {
                        Some(value) => out.push_str(&value),
                        None => {
                            out.push('%');
                            out.push(key);
                        }
                    }
                }
                _ => out.push('%'),
            }
        }

        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

fn is_placeholder_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '#' || c == '-'
}

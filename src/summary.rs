//! Short descriptions for member summaries.

use regex::Regex;
use std::sync::LazyLock;

use crate::util::take_chars;

/// Default maximum length of text left unshortened.
pub const DEFAULT_MAX_LENGTH: usize = 120;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("tag pattern compiles"));

static FIRST_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A(.+?\.)\s.*\z").expect("sentence pattern compiles")
});

/// Cuts rendered HTML down to a one line summary.
///
/// The cut leaves room for a three character ellipsis and happens only
/// when the first sentence is longer than the maximum. A short sentence
/// never turns into a near duplicate like `Blah blah some text...`
/// expanding to `Blah blah some text.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortener {
    max_length: usize,
}

impl Shortener {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Shortens HTML to its first sentence followed by an ellipsis.
    ///
    /// # Arguments
    ///
    /// * `html`: Rendered HTML
    ///
    /// # Returns
    ///
    /// Plain text summary, tags removed
    pub fn shorten(&self, html: &str) -> String {
        let plain = strip_tags(html);
        let sentence = first_sentence(&plain);

        if sentence.chars().count() > self.max_length {
            let keep = self.max_length.saturating_sub(3);
            format!("{}...", take_chars(sentence, keep))
        } else {
            format!("{} ...", sentence)
        }
    }

    /// Returns true when HTML should get shortened.
    ///
    /// True when text continues past its first sentence or is longer than
    /// the maximum length.
    pub fn too_long(&self, html: &str) -> bool {
        let plain = strip_tags(html);
        first_sentence(&plain).len() < plain.len() || plain.chars().count() > self.max_length
    }
}

impl Default for Shortener {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

/// Removes HTML tags and surrounding whitespace.
///
/// Tags are matched non-greedily and never across line breaks.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").trim().to_string()
}

/// Returns text through the first period that is followed by whitespace
/// and more text, or the whole text when there is no such period.
pub fn first_sentence(text: &str) -> &str {
    FIRST_SENTENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str())
}

//! Per-document rendering context.

use std::fmt;

/// Source location of the doc-comment being rendered.
///
/// Only used in warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocLocation {
    pub filename: String,
    pub linenr: usize,
}

impl DocLocation {
    pub fn new(filename: impl Into<String>, linenr: usize) -> Self {
        Self {
            filename: filename.into(),
            linenr,
        }
    }
}

impl fmt::Display for DocLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line {}", self.filename, self.linenr)
    }
}

/// Class and document a doc-comment belongs to.
///
/// The class context resolves member references without a class part, so
/// `{@link #add}` inside `Ext.Panel` docs means `Ext.Panel#add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    class: String,
    location: DocLocation,
}

impl RenderContext {
    /// Creates context for documentation of given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            location: DocLocation::default(),
        }
    }

    /// Sets source location reported in warnings.
    pub fn with_location(mut self, filename: impl Into<String>, linenr: usize) -> Self {
        self.location = DocLocation::new(filename, linenr);
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn location(&self) -> &DocLocation {
        &self.location
    }
}

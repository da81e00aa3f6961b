//! Non-fatal diagnostics raised while formatting.

use std::fmt;
use tracing::warn;

use crate::context::DocLocation;

/// Reason a tag could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// `{@link}` names a class missing from relations
    MissingClass,
    /// `{@link}` names a member its class does not have
    MissingMember,
    /// `{@example}` used without an example source
    NoExampleSource,
    /// Example source failed to provide the example
    ExampleFetch { reason: String },
}

/// Diagnostic for one unrendered tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub location: DocLocation,
    /// Offending tag text as written
    pub tag: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::MissingClass => {
                write!(f, "{} {} links to non-existing class.", self.location, self.tag)
            }
            WarningKind::MissingMember => {
                write!(f, "{} {} links to non-existing member.", self.location, self.tag)
            }
            WarningKind::NoExampleSource => write!(
                f,
                "--examples not specified, but {{@example}} found in {}.",
                self.location
            ),
            WarningKind::ExampleFetch { reason } => {
                write!(f, "{} {} failed to load: {}", self.location, self.tag, reason)
            }
        }
    }
}

/// Collects warnings of one render call, logging each as it arrives.
#[derive(Debug, Default)]
pub(crate) struct Warnings {
    items: Vec<Warning>,
}

impl Warnings {
    pub(crate) fn push(&mut self, kind: WarningKind, location: &DocLocation, tag: &str) {
        let warning = Warning {
            kind,
            location: location.clone(),
            tag: tag.to_string(),
        };
        warn!(
            file = %warning.location.filename,
            line = warning.location.linenr,
            tag = %warning.tag,
            "{}",
            warning
        );
        self.items.push(warning);
    }

    pub(crate) fn into_vec(self) -> Vec<Warning> {
        self.items
    }
}

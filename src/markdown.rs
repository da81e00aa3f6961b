//! Markdown rendering and class reference resolution.
//!
//! This module renders doc-comment markdown using comrak and resolves
//! `{@link}` references and bare class names against the known classes.

mod links;
mod renderer;

pub use links::{LinkResolver, LinkTarget};
pub use renderer::{MarkdownRenderer, normalize_pre_blocks};

//! Shared test utilities for integration tests.
//!
//! Provides sample class relations and helpers for writing fixture files
//! used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use docfmt::{ClassDescriptor, ClassIndex};
use std::path::Path;

/// Relations JSON matching [`sample_relations`].
pub const SAMPLE_RELATIONS_JSON: &str = r#"[
    {"name": "Ext.Panel", "alternateClassNames": ["Ext.panel.Panel"],
     "members": [
        {"name": "add", "tagname": "method"},
        {"name": "title", "tagname": "cfg"},
        {"name": "render", "tagname": "event"}
     ]},
    {"name": "Ext.Component", "members": [{"name": "show", "tagname": "method"}]},
    {"name": "Button", "members": [{"name": "click", "tagname": "event"}]}
]"#;

/// Creates class index used by integration tests.
///
/// Contains `Ext.Panel` (alias `Ext.panel.Panel`), `Ext.Component` and a
/// single word `Button` class.
pub fn sample_relations() -> ClassIndex {
    ClassIndex::from_classes([
        ClassDescriptor::new("Ext.Panel")
            .with_alias("Ext.panel.Panel")
            .with_member("add", "method")
            .with_member("title", "cfg")
            .with_member("render", "event"),
        ClassDescriptor::new("Ext.Component").with_member("show", "method"),
        ClassDescriptor::new("Button").with_member("click", "event"),
    ])
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

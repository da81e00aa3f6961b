//! Class and member lookup for link resolution.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Symbol table consulted when resolving class references.
///
/// Implementations map any known class name, canonical or alternate, to
/// its descriptor. The formatter only reads from it.
pub trait Relations {
    /// Looks up class by canonical or alternate name.
    fn class(&self, name: &str) -> Option<&ClassDescriptor>;
}

/// Documented class member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberDescriptor {
    name: String,
    tagname: String,
}

impl MemberDescriptor {
    pub fn new(name: impl Into<String>, tagname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagname: tagname.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member kind: "method", "property", "event", "cfg", ...
    pub fn tagname(&self) -> &str {
        &self.tagname
    }

    /// Anchor fragment identifier within the class page (`method-add`).
    pub fn fragment(&self) -> String {
        format!("{}-{}", self.tagname, self.name)
    }
}

/// Documented class with its members.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDescriptor {
    name: String,
    #[serde(default)]
    alternate_class_names: Vec<String>,
    #[serde(default)]
    members: Vec<MemberDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternate_class_names: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Adds alternate name under which the class is also known.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alternate_class_names.push(alias.into());
        self
    }

    /// Adds member of given kind.
    pub fn with_member(mut self, name: impl Into<String>, tagname: impl Into<String>) -> Self {
        self.members.push(MemberDescriptor::new(name, tagname));
        self
    }

    /// Canonical class name, even when looked up through an alias.
    pub fn full_name(&self) -> &str {
        &self.name
    }

    pub fn alternate_class_names(&self) -> &[String] {
        &self.alternate_class_names
    }

    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// Finds member by name, optionally restricted to one kind.
    ///
    /// # Arguments
    ///
    /// * `name`: Member name
    /// * `kind`: Member kind to require, None accepts any kind
    ///
    /// # Returns
    ///
    /// First matching member in declaration order
    pub fn member(&self, name: &str, kind: Option<&str>) -> Option<&MemberDescriptor> {
        self.members
            .iter()
            .find(|m| m.name == name && kind.is_none_or(|k| m.tagname == k))
    }
}

/// In-memory `Relations` built from class descriptors.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    classes: Vec<ClassDescriptor>,
    by_name: HashMap<String, usize>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates index from class descriptors.
    ///
    /// Canonical names and alternate names all resolve to their class.
    /// When two classes claim the same name the first one keeps it.
    pub fn from_classes(classes: impl IntoIterator<Item = ClassDescriptor>) -> Self {
        let mut index = Self::new();
        for class in classes {
            index.insert(class);
        }
        index
    }

    /// Loads index from JSON file holding an array of classes.
    ///
    /// ```json
    /// [{"name": "Ext.Panel", "alternateClassNames": ["Ext.panel.Panel"],
    ///   "members": [{"name": "add", "tagname": "method"}]}]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or is not a valid class list
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read relations file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse relations file {}", path.display()))
    }

    /// Parses index from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if text is not a valid class list
    pub fn from_json(json: &str) -> Result<Self> {
        let classes: Vec<ClassDescriptor> =
            serde_json::from_str(json).context("Invalid class list JSON")?;
        Ok(Self::from_classes(classes))
    }

    /// Registers class under its canonical and alternate names.
    pub fn insert(&mut self, class: ClassDescriptor) {
        let idx = self.classes.len();
        self.by_name.entry(class.name.clone()).or_insert(idx);
        for alias in &class.alternate_class_names {
            self.by_name.entry(alias.clone()).or_insert(idx);
        }
        self.classes.push(class);
    }

    /// Number of registered classes, aliases not counted.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Relations for ClassIndex {
    fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.by_name.get(name).map(|&idx| &self.classes[idx])
    }
}

//! Source lookup for `{@example}` tags.

use anyhow::{Context, Result, bail};
use std::path::{Component, Path, PathBuf};

/// Provides raw source text for inline examples.
pub trait ExampleSource {
    /// Fetches example source for path given in `{@example path}`.
    ///
    /// # Errors
    ///
    /// Returns error if the example cannot be found or read
    fn fetch(&self, path: &str) -> Result<String>;
}

impl<F> ExampleSource for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, path: &str) -> Result<String> {
        self(path)
    }
}

/// Reads examples from files beneath a root directory.
#[derive(Debug, Clone)]
pub struct ExampleDir {
    root: PathBuf,
}

impl ExampleDir {
    /// Creates example source rooted at given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Normalizes path by resolving .. and . components.
    ///
    /// Security: Prevents directory traversal outside example root.
    ///
    /// # Errors
    ///
    /// Returns error if path attempts to escape example root
    fn normalize_path(path: &Path) -> Result<PathBuf> {
        let mut components = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(c) => {
                    components.push(c);
                }
                Component::ParentDir => {
                    if components.is_empty() {
                        bail!("Path escapes example root: {}", path.display());
                    }
                    components.pop();
                }
                _ => {
                    // Skip current directory, prefix and root markers
                }
            }
        }

        Ok(components.iter().collect())
    }
}

impl ExampleSource for ExampleDir {
    fn fetch(&self, path: &str) -> Result<String> {
        let relative = Self::normalize_path(Path::new(path))?;
        let full = self.root.join(relative);
        std::fs::read_to_string(&full)
            .with_context(|| format!("Failed to read example {}", full.display()))
    }
}

//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::context::RenderContext;
use crate::formatter::FormatterConfig;
use crate::summary::DEFAULT_MAX_LENGTH;
use crate::template::{DEFAULT_IMG_TEMPLATE, DEFAULT_LINK_TEMPLATE, Template};

/// Smallest max length leaving room for the ellipsis.
const MIN_MAX_LENGTH: usize = 4;

/// Command line configuration for docfmt.
#[derive(Debug, Clone, Parser)]
#[command(name = "docfmt", version, about, long_about = None)]
pub struct Config {
    /// Doc-comment file (markdown with {@link}, {@img} and {@example} tags)
    pub input: PathBuf,

    /// JSON file listing known classes and their members
    #[arg(short, long)]
    pub relations: Option<PathBuf>,

    /// Directory containing files referenced by {@example} tags
    #[arg(long)]
    pub examples: Option<PathBuf>,

    /// Class the doc-comment belongs to
    #[arg(long, default_value = "")]
    pub class: String,

    /// Maximum length of text that doesn't get shortened
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Template for {@link} tags (%c class, %m member, %# and %- separators, %a text)
    #[arg(long, default_value = DEFAULT_LINK_TEMPLATE)]
    pub link_template: String,

    /// Template for {@img} tags (%u url, %a alt text)
    #[arg(long, default_value = DEFAULT_IMG_TEMPLATE)]
    pub img_template: String,

    /// Print shortened summary instead of full HTML
    #[arg(long)]
    pub summary: bool,

    /// Write standalone HTML page to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if input, relations or examples path does not exist,
    /// or max length leaves no room for the ellipsis.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if let Some(relations) = &self.relations
            && !relations.exists()
        {
            bail!("Relations file does not exist: {}", relations.display());
        }

        if let Some(examples) = &self.examples
            && !examples.is_dir()
        {
            bail!("Examples directory does not exist: {}", examples.display());
        }

        if self.max_length < MIN_MAX_LENGTH {
            bail!(
                "Max length must be at least {}, got {}",
                MIN_MAX_LENGTH,
                self.max_length
            );
        }

        Ok(())
    }

    /// Returns formatter configuration built from command line templates.
    pub fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig {
            link_template: Template::new(&self.link_template),
            img_template: Template::new(&self.img_template),
            max_length: self.max_length,
            ..FormatterConfig::default()
        }
    }

    /// Returns render context for the input document.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(&self.class).with_location(self.input.display().to_string(), 1)
    }

    /// Returns page title from class name or input file stem.
    ///
    /// # Errors
    ///
    /// Returns error if input path has no file name or contains invalid UTF8.
    pub fn page_title(&self) -> Result<String> {
        if !self.class.is_empty() {
            return Ok(self.class.clone());
        }

        Path::new(&self.input)
            .file_stem()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract title from path: {}", self.input.display()))
            .map(String::from)
    }
}

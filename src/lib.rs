//! Doc-comment formatter for API documentation.

mod config;
mod context;
mod example;
mod formatter;
mod markdown;
pub mod pages;
mod relations;
mod scanner;
mod summary;
mod template;
mod util;
mod warning;

pub use config::Config;
pub use context::{DocLocation, RenderContext};
pub use example::{ExampleDir, ExampleSource};
pub use formatter::{DocFormatter, FormatterConfig};
pub use markdown::{LinkResolver, LinkTarget, MarkdownRenderer, normalize_pre_blocks};
pub use relations::{ClassDescriptor, ClassIndex, MemberDescriptor, Relations};
pub use scanner::{Scanner, Span};
pub use summary::{DEFAULT_MAX_LENGTH, Shortener, first_sentence, strip_tags};
pub use template::{DEFAULT_EXAMPLE_TEMPLATE, DEFAULT_IMG_TEMPLATE, DEFAULT_LINK_TEMPLATE, Template};
pub use util::{escape_text, html_escape};
pub use warning::{Warning, WarningKind};

use anyhow::{Context, Result};
use docfmt::pages::{DocPageData, doc_page};
use docfmt::{ClassIndex, Config, DocFormatter, ExampleDir};
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("docfmt=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let relations = match &config.relations {
        Some(path) => ClassIndex::load(path).context("Failed to load relations")?,
        None => ClassIndex::new(),
    };
    debug!(classes = relations.len(), "Loaded relations");

    let examples = config.examples.as_ref().map(ExampleDir::new);

    let mut formatter = DocFormatter::new(&relations).with_config(config.formatter_config());
    if let Some(examples) = &examples {
        formatter = formatter.with_examples(examples);
    }

    let ctx = config.render_context();
    let input = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;
    let (html, warnings) = formatter.format_with_warnings(&input, &ctx);

    if !warnings.is_empty() {
        info!(count = warnings.len(), "Unresolved references left as plain text");
    }

    if config.summary {
        println!("{}", formatter.shorten(&html));
        return Ok(());
    }

    match &config.output {
        Some(output) => {
            let title = config.page_title()?;
            let summary = formatter.too_long(&html).then(|| formatter.shorten(&html));
            let page = doc_page(DocPageData {
                title: &title,
                summary: summary.as_deref(),
                body_html: &html,
            });
            fs::write(output, page.into_string())
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(path = %output.display(), "Wrote documentation page");
        }
        None => print!("{}", html),
    }

    Ok(())
}

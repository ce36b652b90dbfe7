//! scroll-indicator — attach the indicator to a headless page, replay a
//! series of scroll offsets, and print the resulting markup.
//!
//! Run with:  `RUST_LOG=debug scroll-indicator 0 600 1200`

use anyhow::{Context, Result};
use clap::Parser;
use indicator_config::{default_path, from_json, load as load_config, ConfigOverrides};
use indicator_dom::{Document, NodeId, Page, Viewport};
use indicator_widget::IndicatorRegistry;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Preview the scroll indicator on a headless page")]
struct Cli {
    /// TOML file with indicator options (defaults to the XDG config path).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Inline options object, layered over the config file,
    /// e.g. '{"color": "red", "where": "header"}'.
    #[arg(short, long, value_name = "JSON")]
    options: Option<String>,

    /// Total content height in pixels.
    #[arg(long, default_value_t = 4000.0)]
    document_height: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1000.0)]
    window_height: f64,

    /// Scroll offsets to replay, in order.
    #[arg(value_name = "SCROLL_OFFSETS")]
    offsets: Vec<f64>,
}

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("scroll-indicator v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let overrides = overrides(&cli)?;

    let (document, body) = sample_document()?;
    let mut page = Page::loading(
        document,
        Viewport {
            scroll_top:      0.0,
            window_height:   cli.window_height,
            document_height: cli.document_height,
        },
    );

    let mut registry = IndicatorRegistry::new();
    let indicator = registry.attach(&mut page, body, overrides)?;
    page.finish_loading();

    for offset in &cli.offsets {
        page.scroll_to(*offset);
        tracing::info!("scrollTop={offset} → {}", indicator.percent());
    }

    println!("{}", page.document().outer_html(page.document().root()));
    Ok(())
}

/// Config file first, then the inline options on top.
fn overrides(cli: &Cli) -> Result<ConfigOverrides> {
    let path = cli.config.clone().unwrap_or_else(default_path);
    let mut overrides = load_config(&path)
        .with_context(|| format!("loading '{}'", path.display()))?;
    if let Some(raw) = &cli.options {
        overrides = overrides.merge(from_json(raw).context("parsing --options")?);
    }
    Ok(overrides)
}

/// A page with a header, a main section and a footer to place the bar in.
fn sample_document() -> Result<(Document, NodeId)> {
    let mut doc = Document::new();
    let body = doc.body();
    for (tag, text) in [("header", "Header"), ("main", "Content"), ("footer", "Footer")] {
        let section = doc.append_element(body, tag)?;
        let label = doc.create_text(text);
        doc.append_child(section, label)?;
    }
    Ok((doc, body))
}

//! Minimal example — a default indicator on a page scrolled halfway down.
//!
//! ```
//! cargo run --example minimal
//! ```

use indicator_config::ConfigOverrides;
use indicator_dom::{Document, Page, Viewport};
use indicator_widget::IndicatorRegistry;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let viewport = Viewport {
        scroll_top:      0.0,
        window_height:   900.0,
        document_height: 2700.0,
    };
    let mut page = Page::ready(Document::new(), viewport);
    let body = page.document().body();

    let mut registry = IndicatorRegistry::new();
    let indicator = registry.attach(&mut page, body, ConfigOverrides::default())?;
    page.scroll_to(900.0);

    tracing::info!("scrolled to {}", indicator.percent());
    println!("{}", page.document().outer_html(body));
    Ok(())
}

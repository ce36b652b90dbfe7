use indicator_core::{Result, ScrollState};
use indicator_dom::{NodeId, Page};
use tracing::trace;

/// Sample the page's scroll geometry and set the fill width to match.
pub fn paint_progress(page: &mut Page, bar: NodeId) -> Result<ScrollState> {
    let metrics = page.metrics();
    if metrics.max_scroll() <= 0.0 {
        trace!(
            "Content ({}px) fits the viewport ({}px); nothing to scroll",
            metrics.document_height,
            metrics.window_height
        );
    }

    let state = metrics.percent();
    page.document_mut().set_style(bar, "width", &state.css_width())?;
    trace!("Scroll at {}px → {state}", metrics.scroll_top);
    Ok(state)
}

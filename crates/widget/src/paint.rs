use crate::placement::BarNodes;
use indicator_core::Result;
use indicator_dom::Document;
use indicator_theme::{IndicatorTheme, GLOBAL_STYLESHEET, STYLESHEET_ID};
use tracing::debug;

/// Insert the shared `<style>` block into `<head>` unless a previous
/// indicator already did.  Returns `true` if it was inserted now.
pub fn ensure_stylesheet(doc: &mut Document) -> Result<bool> {
    if doc.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(false);
    }
    let style = doc.append_element(doc.head(), "style")?;
    doc.set_id(style, STYLESHEET_ID)?;
    let css = doc.create_text(GLOBAL_STYLESHEET);
    doc.append_child(style, css)?;
    debug!("Inserted indicator stylesheet");
    Ok(true)
}

/// Apply the track and fill styles.  Called once per indicator.
pub fn apply_theme(doc: &mut Document, nodes: BarNodes, theme: &IndicatorTheme) -> Result<()> {
    for (property, value) in theme.track.declarations() {
        doc.set_style(nodes.track, property, &value)?;
    }
    for (property, value) in theme.fill.declarations() {
        doc.set_style(nodes.bar, property, &value)?;
    }
    Ok(())
}

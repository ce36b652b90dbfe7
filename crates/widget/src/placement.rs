use indicator_config::{IndicatorConfig, Position};
use indicator_core::{IndicatorError, Result};
use indicator_dom::{Document, NodeId};
use indicator_theme::{BAR_ID, TRACK_ID};
use tracing::debug;

/// The two elements making up one indicator: the track and the fill bar
/// nested inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarNodes {
    pub track: NodeId,
    pub bar:   NodeId,
}

/// Where the markup is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// End of `<body>`, pinned to a viewport edge.
    Overlay,
    /// First child of the container.
    ContainerStart(NodeId),
    /// Last child of the container.
    ContainerEnd(NodeId),
}

/// Decide the insertion slot without touching the document.
///
/// A `where` selector that matches several containers uses the first one.
pub fn resolve_slot(doc: &Document, config: &IndicatorConfig) -> Result<Slot> {
    let Some(selector) = config.target.as_deref() else {
        return Ok(Slot::Overlay);
    };

    let matches = doc.query_selector_all(selector)?;
    let Some(&container) = matches.first() else {
        return Err(IndicatorError::TargetNotFound {
            selector: selector.to_string(),
        });
    };
    if matches.len() > 1 {
        debug!(
            "'{selector}' matched {} containers; placing the bar in the first",
            matches.len()
        );
    }

    Ok(match config.position {
        Position::Bottom => Slot::ContainerEnd(container),
        Position::Top => Slot::ContainerStart(container),
    })
}

/// Build the track/bar markup and insert it according to `config`.
///
/// Fails before creating any node if `where` matches nothing.
pub fn place(doc: &mut Document, config: &IndicatorConfig) -> Result<BarNodes> {
    let slot = resolve_slot(doc, config)?;

    let track = doc.create_element("div");
    doc.set_id(track, TRACK_ID)?;
    let bar = doc.append_element(track, "div")?;
    doc.set_id(bar, BAR_ID)?;

    match slot {
        Slot::Overlay => doc.append_child(doc.body(), track)?,
        Slot::ContainerStart(container) => doc.prepend_child(container, track)?,
        Slot::ContainerEnd(container) => doc.append_child(container, track)?,
    }
    debug!("Placed indicator markup ({slot:?})");

    Ok(BarNodes { track, bar })
}

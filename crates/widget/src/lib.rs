//! The scroll indicator: a thin bar whose width follows how far the page
//! has been scrolled.
//!
//! Attach through an [`IndicatorRegistry`]:
//!
//! ```
//! use indicator_config::ConfigOverrides;
//! use indicator_dom::{Document, Page, Viewport};
//! use indicator_widget::IndicatorRegistry;
//!
//! let viewport = Viewport { scroll_top: 0.0, window_height: 800.0, document_height: 2400.0 };
//! let mut page = Page::ready(Document::new(), viewport);
//! let body = page.document().body();
//!
//! let mut registry = IndicatorRegistry::new();
//! let indicator = registry.attach(&mut page, body, ConfigOverrides::default()).unwrap();
//!
//! page.scroll_to(800.0);
//! assert_eq!(indicator.percent().percent, 50);
//! ```

pub mod indicator;
pub mod paint;
pub mod placement;
pub mod registry;
pub mod tracker;

pub use indicator::IndicatorHandle;
pub use placement::BarNodes;
pub use registry::IndicatorRegistry;

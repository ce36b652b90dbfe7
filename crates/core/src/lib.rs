pub mod error;
pub mod event;
pub mod state;

pub use error::{IndicatorError, Result};
pub use event::HostEvent;
pub use state::{ScrollMetrics, ScrollState, TrackingPhase};

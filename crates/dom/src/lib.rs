//! Headless host environment for the indicator: a document tree, a window
//! with scroll geometry, and synchronous event subscriptions.
//!
//! A browser binding would provide the same surface backed by the real DOM.

pub mod document;
pub mod page;
pub mod selector;

pub use document::{Document, Element, NodeId};
pub use page::{Listener, ListenerId, Page, Viewport};
pub use selector::Selector;

/// Events a host environment dispatches to its listeners.
///
/// Sources:
/// - Document load completion → `Ready` (fires once per page)
/// - Window scrolling          → `Scroll`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// The document finished loading and may be mutated.
    Ready,
    /// The window's vertical scroll offset changed.
    Scroll,
}

impl HostEvent {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Scroll => "scroll",
        }
    }
}

use crate::{paint, placement, placement::BarNodes, tracker};
use indicator_config::IndicatorConfig;
use indicator_core::{HostEvent, Result, ScrollState, TrackingPhase};
use indicator_dom::{ListenerId, NodeId, Page};
use indicator_theme::IndicatorTheme;
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, warn};

#[derive(Debug)]
struct Inner {
    host:           NodeId,
    config:         IndicatorConfig,
    theme:          IndicatorTheme,
    phase:          TrackingPhase,
    nodes:          Option<BarNodes>,
    last:           ScrollState,
    ready_listener: Option<ListenerId>,
    scroll_listener: Option<ListenerId>,
}

/// Shared handle to one attached indicator.
///
/// Clones refer to the same indicator.  The page's scroll listener holds a
/// clone too, so the indicator keeps tracking after every caller-side
/// handle is dropped; use [`IndicatorRegistry::detach`] to stop it.
///
/// [`IndicatorRegistry::detach`]: crate::IndicatorRegistry::detach
#[derive(Debug, Clone)]
pub struct IndicatorHandle {
    inner: Rc<RefCell<Inner>>,
}

impl IndicatorHandle {
    pub(crate) fn new(host: NodeId, config: IndicatorConfig) -> Self {
        let theme = IndicatorTheme::from_config(&config);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                host,
                config,
                theme,
                phase: TrackingPhase::Idle,
                nodes: None,
                last: ScrollState::default(),
                ready_listener: None,
                scroll_listener: None,
            })),
        }
    }

    /// Element the indicator was attached to.
    pub fn host(&self) -> NodeId {
        self.inner.borrow().host
    }

    pub fn config(&self) -> IndicatorConfig {
        self.inner.borrow().config.clone()
    }

    pub fn theme(&self) -> IndicatorTheme {
        self.inner.borrow().theme.clone()
    }

    pub fn phase(&self) -> TrackingPhase {
        self.inner.borrow().phase
    }

    /// Most recently painted scroll percentage.
    pub fn percent(&self) -> ScrollState {
        self.inner.borrow().last
    }

    /// Injected markup, once placed.
    pub fn nodes(&self) -> Option<BarNodes> {
        self.inner.borrow().nodes
    }

    pub fn track(&self) -> Option<NodeId> {
        self.nodes().map(|n| n.track)
    }

    pub fn bar(&self) -> Option<NodeId> {
        self.nodes().map(|n| n.bar)
    }

    /// Start now if the page is ready, otherwise once it becomes ready.
    ///
    /// A missing `where` target is returned as an error when starting now;
    /// a deferred start can only log it.
    pub(crate) fn start_when_ready(&self, page: &mut Page) -> Result<()> {
        if page.is_ready() {
            return self.start(page);
        }

        let deferred = self.clone();
        let id = page.on_ready(move |page| {
            deferred.inner.borrow_mut().ready_listener = None;
            if let Err(e) = deferred.start(page) {
                warn!("Scroll indicator not started: {e}");
            }
        });
        self.inner.borrow_mut().ready_listener = id;
        debug!("Page still loading; indicator start deferred");
        Ok(())
    }

    /// Place → style → paint the initial state → subscribe to scrolling.
    fn start(&self, page: &mut Page) -> Result<()> {
        let (config, theme) = {
            let inner = self.inner.borrow();
            (inner.config.clone(), inner.theme.clone())
        };

        let doc = page.document_mut();
        let nodes = placement::place(doc, &config)?;
        paint::ensure_stylesheet(doc)?;
        paint::apply_theme(doc, nodes, &theme)?;
        let initial = tracker::paint_progress(page, nodes.bar)?;

        let tracked = self.clone();
        let listener = page.add_listener(HostEvent::Scroll, move |page| tracked.on_scroll(page));

        let mut inner = self.inner.borrow_mut();
        inner.nodes = Some(nodes);
        inner.last = initial;
        inner.phase = TrackingPhase::Tracking;
        inner.scroll_listener = Some(listener);
        debug!("Scroll indicator tracking from {initial}");
        Ok(())
    }

    fn on_scroll(&self, page: &mut Page) {
        let Some(nodes) = self.nodes() else {
            return;
        };
        match tracker::paint_progress(page, nodes.bar) {
            Ok(state) => self.inner.borrow_mut().last = state,
            Err(e) => warn!("Failed to update scroll indicator: {e}"),
        }
    }

    /// Unsubscribe every listener and remove the injected markup.  The shared
    /// stylesheet stays in `<head>`.
    pub(crate) fn teardown(&self, page: &mut Page) -> Result<()> {
        let (ready, scroll, nodes) = {
            let mut inner = self.inner.borrow_mut();
            (inner.ready_listener.take(), inner.scroll_listener.take(), inner.nodes.take())
        };
        for id in ready.into_iter().chain(scroll) {
            page.remove_listener(id);
        }
        if let Some(nodes) = nodes {
            page.document_mut().remove(nodes.track)?;
        }
        self.inner.borrow_mut().phase = TrackingPhase::Idle;
        Ok(())
    }
}

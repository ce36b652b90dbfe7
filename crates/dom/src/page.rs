use crate::document::Document;
use indicator_core::{HostEvent, ScrollMetrics};
use std::fmt;

/// Callback invoked with the page that dispatched the event.
pub type Listener = Box<dyn FnMut(&mut Page)>;

/// Handle returned by [`Page::add_listener`]; pass it to
/// [`Page::remove_listener`] to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registration {
    id:       ListenerId,
    event:    HostEvent,
    callback: Listener,
}

/// Window geometry of a page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_top:      f64,
    pub window_height:   f64,
    pub document_height: f64,
}

/// A single-threaded host environment: one document, one window, and the
/// listeners subscribed to its events.
///
/// Dispatch is synchronous.  Listeners added while an event is being
/// dispatched only see later events; events triggered from inside a
/// listener are queued and dispatched once the current one finishes.
pub struct Page {
    document:    Document,
    viewport:    Viewport,
    ready:       bool,
    listeners:   Vec<Registration>,
    next_id:     u64,
    dispatching: bool,
    in_flight:   Vec<ListenerId>,
    cancelled:   Vec<ListenerId>,
    queued:      Vec<HostEvent>,
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("viewport", &self.viewport)
            .field("ready", &self.ready)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Page {
    /// A page that is still loading; `Ready` fires on [`Page::finish_loading`].
    pub fn loading(document: Document, viewport: Viewport) -> Self {
        Self {
            document,
            viewport,
            ready: false,
            listeners: Vec::new(),
            next_id: 0,
            dispatching: false,
            in_flight: Vec::new(),
            cancelled: Vec::new(),
            queued: Vec::new(),
        }
    }

    /// A page whose document has already loaded.
    pub fn ready(document: Document, viewport: Viewport) -> Self {
        let mut page = Self::loading(document, viewport);
        page.ready = true;
        page
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.viewport.scroll_top,
            self.viewport.document_height,
            self.viewport.window_height,
        )
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    // ── Host-side driving ─────────────────────────────────────────────────────

    /// Mark the document loaded and fire `Ready` once.  Later calls do nothing.
    pub fn finish_loading(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        self.trigger(HostEvent::Ready);
    }

    /// Move the window to `offset` and fire `Scroll` if the offset changed.
    pub fn scroll_to(&mut self, offset: f64) {
        if self.viewport.scroll_top == offset {
            return;
        }
        self.viewport.scroll_top = offset;
        self.trigger(HostEvent::Scroll);
    }

    /// Change the content height without firing any event.
    pub fn resize_document(&mut self, height: f64) {
        self.viewport.document_height = height;
    }

    /// Change the viewport height without firing any event.
    pub fn resize_window(&mut self, height: f64) {
        self.viewport.window_height = height;
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    pub fn add_listener<F>(&mut self, event: HostEvent, callback: F) -> ListenerId
    where
        F: FnMut(&mut Page) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Registration {
            id,
            event,
            callback: Box::new(callback),
        });
        tracing::trace!("Subscribed listener {id:?} to '{}'", event.name());
        id
    }

    /// Run `callback` once the document is ready.  Runs it immediately and
    /// returns `None` if the page is already ready.
    pub fn on_ready<F>(&mut self, callback: F) -> Option<ListenerId>
    where
        F: FnOnce(&mut Page) + 'static,
    {
        if self.ready {
            callback(self);
            return None;
        }
        let mut once = Some(callback);
        Some(self.add_listener(HostEvent::Ready, move |page| {
            if let Some(callback) = once.take() {
                callback(page);
            }
        }))
    }

    /// Unsubscribe a listener.  Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        if let Some(pos) = self.listeners.iter().position(|r| r.id == id) {
            self.listeners.remove(pos);
            return true;
        }
        if self.in_flight.contains(&id) && !self.cancelled.contains(&id) {
            self.cancelled.push(id);
            return true;
        }
        false
    }

    /// Number of listeners subscribed to `event`.  Only meaningful outside
    /// of dispatch.
    pub fn listener_count(&self, event: HostEvent) -> usize {
        self.listeners.iter().filter(|r| r.event == event).count()
    }

    /// Dispatch `event` to every listener subscribed to it.
    pub fn trigger(&mut self, event: HostEvent) {
        self.queued.push(event);
        if self.dispatching {
            return;
        }
        while !self.queued.is_empty() {
            let next = self.queued.remove(0);
            self.dispatch(next);
        }
    }

    fn dispatch(&mut self, event: HostEvent) {
        self.dispatching = true;
        let mut active = std::mem::take(&mut self.listeners);
        self.in_flight = active.iter().map(|r| r.id).collect();

        for registration in active.iter_mut().filter(|r| r.event == event) {
            if self.cancelled.contains(&registration.id) {
                continue;
            }
            (registration.callback)(self);
        }

        // Keep registrations added during dispatch, drop cancelled ones.
        active.append(&mut self.listeners);
        active.retain(|r| !self.cancelled.contains(&r.id));
        if event == HostEvent::Ready {
            // `Ready` never fires twice.
            active.retain(|r| r.event != HostEvent::Ready);
        }
        self.listeners = active;
        self.in_flight.clear();
        self.cancelled.clear();
        self.dispatching = false;
    }
}

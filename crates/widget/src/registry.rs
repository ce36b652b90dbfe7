use crate::indicator::IndicatorHandle;
use indicator_config::{ConfigOverrides, IndicatorConfig};
use indicator_core::{IndicatorError, Result};
use indicator_dom::{NodeId, Page};
use std::collections::HashMap;
use tracing::debug;

/// Tracks which host elements already carry an indicator, so attaching
/// twice to the same element is a no-op.
#[derive(Debug, Default)]
pub struct IndicatorRegistry {
    attached: HashMap<NodeId, IndicatorHandle>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an indicator to `host`.
    ///
    /// The first call resolves `overrides` against the defaults and starts
    /// the indicator (or schedules it for when the page is ready).  Later
    /// calls for the same host return the existing handle and ignore their
    /// overrides.
    pub fn attach(
        &mut self,
        page: &mut Page,
        host: NodeId,
        overrides: ConfigOverrides,
    ) -> Result<IndicatorHandle> {
        if let Some(existing) = self.attached.get(&host) {
            debug!("Host {host:?} already has a scroll indicator");
            return Ok(existing.clone());
        }
        if page.document().element(host).is_none() {
            return Err(IndicatorError::Dom(format!("host {host:?} is not an element")));
        }

        let handle = IndicatorHandle::new(host, IndicatorConfig::resolve(overrides));
        handle.start_when_ready(page)?;
        self.attached.insert(host, handle.clone());
        Ok(handle)
    }

    /// Attach to every element matching `selector`, in document order.
    pub fn attach_all(
        &mut self,
        page: &mut Page,
        selector: &str,
        overrides: ConfigOverrides,
    ) -> Result<Vec<IndicatorHandle>> {
        let hosts = page.document().query_selector_all(selector)?;
        hosts
            .into_iter()
            .map(|host| self.attach(page, host, overrides.clone()))
            .collect()
    }

    /// Stop the indicator on `host` and remove its markup.  Returns `false`
    /// if nothing was attached.
    pub fn detach(&mut self, page: &mut Page, host: NodeId) -> Result<bool> {
        let Some(handle) = self.attached.remove(&host) else {
            return Ok(false);
        };
        handle.teardown(page)?;
        debug!("Detached scroll indicator from {host:?}");
        Ok(true)
    }

    pub fn get(&self, host: NodeId) -> Option<&IndicatorHandle> {
        self.attached.get(&host)
    }

    pub fn is_attached(&self, host: NodeId) -> bool {
        self.attached.contains_key(&host)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

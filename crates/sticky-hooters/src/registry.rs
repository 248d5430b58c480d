//! Binding table and scroll input port
//!
//! `StickyHooters` owns every bound region, keyed by container, so a
//! container is bound at most once. The host forwards native scroll events
//! to `on_scroll` and calls `run_timers` as its clock advances.

use std::collections::{BTreeMap, HashMap};

use hooters_dom::{Document, DomEvent, ListenerId, NodeId};

use crate::region::Region;
use crate::{Config, HooterError, Result};

/// Result of a bind call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// Region created and listening for scroll
    Bound,
    /// Region created, but there is no header or footer to track
    Inert,
    /// The container already has a region; nothing changed
    AlreadyBound,
}

/// One-instance-per-container registry
#[derive(Debug, Default)]
pub struct StickyHooters {
    regions: BTreeMap<NodeId, Region>,
    listeners: HashMap<ListenerId, NodeId>,
}

impl StickyHooters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind sticky behavior to `container`.
    ///
    /// On success the container is wrapped, overlays are built, a scroll
    /// listener is registered and one synthetic scroll event is dispatched so
    /// the initial position is evaluated straight away.
    pub fn bind(
        &mut self,
        doc: &mut Document,
        container: NodeId,
        config: Config,
    ) -> Result<BindOutcome> {
        if self.regions.contains_key(&container) {
            tracing::debug!(?container, "already bound");
            return Ok(BindOutcome::AlreadyBound);
        }

        let mut region = Region::new(doc, container, config)?;
        let listener = region.listen(&mut doc.window);
        self.regions.insert(container, region);

        let Some(listener) = listener else {
            return Ok(BindOutcome::Inert);
        };
        self.listeners.insert(listener, container);
        tracing::debug!(?container, ?listener, "bound");

        // Other listeners see the synthetic event too; only this region's
        // failure is reported to the caller.
        let event = DomEvent::synthetic_scroll(doc.window.now());
        let failures = self.dispatch(doc, &event);
        match failures.into_iter().find(|(failed, _)| *failed == container) {
            Some((_, err)) => Err(err),
            None => Ok(BindOutcome::Bound),
        }
    }

    /// Remove the container's scroll listener and forget the region.
    ///
    /// The wrapper and overlays stay in the document; binding the same
    /// container again wraps it a second time.
    pub fn unbind(&mut self, doc: &mut Document, container: NodeId) -> bool {
        let Some(mut region) = self.regions.remove(&container) else {
            return false;
        };
        if let Some(listener) = region.scroll_listener() {
            self.listeners.remove(&listener);
        }
        region.tear_down(&mut doc.window);
        tracing::debug!(?container, "unbound");
        true
    }

    /// Native scroll event at the window's current time.
    ///
    /// Every listening region is evaluated even when an earlier one fails;
    /// the first failure is returned afterwards.
    pub fn on_scroll(&mut self, doc: &mut Document) -> Result<()> {
        let event = DomEvent::scroll(doc.window.now());
        first_failure(self.dispatch(doc, &event))
    }

    fn dispatch(&mut self, doc: &mut Document, event: &DomEvent) -> Vec<(NodeId, HooterError)> {
        let mut failures = Vec::new();
        for listener in doc.window.dispatch_event(event) {
            let Some(&container) = self.listeners.get(&listener) else {
                continue;
            };
            if let Some(region) = self.regions.get_mut(&container) {
                if let Err(err) = region.handle_scroll(doc, event) {
                    tracing::warn!(?container, error = %err, "scroll tick failed");
                    failures.push((container, err));
                }
            }
        }
        failures
    }

    /// Run deferred scroll ticks that are due at the window's current time.
    ///
    /// Like `on_scroll`, a failing region does not hold back the others.
    pub fn run_timers(&mut self, doc: &mut Document) -> Result<()> {
        let now = doc.window.now();
        let mut failures = Vec::new();
        for (&container, region) in self.regions.iter_mut() {
            if let Err(err) = region.run_timers(doc, now) {
                tracing::warn!(?container, error = %err, "deferred scroll tick failed");
                failures.push((container, err));
            }
        }
        first_failure(failures)
    }

    pub fn region(&self, container: NodeId) -> Option<&Region> {
        self.regions.get(&container)
    }

    pub fn region_mut(&mut self, container: NodeId) -> Option<&mut Region> {
        self.regions.get_mut(&container)
    }

    pub fn is_bound(&self, container: NodeId) -> bool {
        self.regions.contains_key(&container)
    }

    pub fn bound_count(&self) -> usize {
        self.regions.len()
    }
}

fn first_failure(failures: Vec<(NodeId, HooterError)>) -> Result<()> {
    match failures.into_iter().next() {
        Some((_, err)) => Err(err),
        None => Ok(()),
    }
}

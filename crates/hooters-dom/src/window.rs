//! Window - viewport, clock and event listener surface
//!
//! The window never runs callbacks itself: `dispatch_event` reports which
//! listeners should be notified and the owner of those listeners calls into
//! its own handlers.

use std::time::Duration;

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Scroll,
    Resize,
}

/// Registered listener handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Window-level event
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub event_type: EventType,
    /// Window clock at dispatch time
    pub timestamp: Duration,
    /// Dispatched by script rather than the user agent
    pub synthetic: bool,
}

impl DomEvent {
    /// Scroll event raised by the user agent
    pub fn scroll(timestamp: Duration) -> Self {
        Self {
            event_type: EventType::Scroll,
            timestamp,
            synthetic: false,
        }
    }

    /// Script-dispatched scroll event (`new Event('scroll')`)
    pub fn synthetic_scroll(timestamp: Duration) -> Self {
        Self {
            synthetic: true,
            ..Self::scroll(timestamp)
        }
    }
}

/// Browser window state
#[derive(Debug, Clone)]
pub struct Window {
    pub inner_width: f64,
    pub inner_height: f64,
    /// Vertical document scroll offset
    pub scroll_y: f64,
    now: Duration,
    listeners: Vec<(ListenerId, EventType)>,
    next_listener: u64,
}

impl Window {
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            inner_width,
            inner_height,
            scroll_y: 0.0,
            now: Duration::ZERO,
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    /// Current clock value
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward; it never runs backwards
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Set the clock to an absolute time, ignoring values in the past
    pub fn set_time(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Set the vertical scroll offset (clamped at 0)
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Register a listener for `event_type`
    pub fn add_event_listener(&mut self, event_type: EventType) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, event_type));
        tracing::trace!(?id, ?event_type, "listener added");
        id
    }

    /// Remove a listener. Returns false when it was not registered.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        before != self.listeners.len()
    }

    /// Number of listeners registered for `event_type`
    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.listeners.iter().filter(|(_, t)| *t == event_type).count()
    }

    /// Listeners to notify for `event`, in registration order
    pub fn dispatch_event(&self, event: &DomEvent) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, t)| *t == event.event_type)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

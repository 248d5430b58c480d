//! Scroll watcher decision rules
//!
//! Decisions depend only on the geometry sampled at the tick and on whether
//! the hooter is currently stuck, never on scroll deltas. Re-running a tick
//! against unchanged geometry therefore never toggles state twice.
//!
//! The comparisons mix strict and non-strict inequalities between the stick
//! and unstick rules. They are kept exactly as they are; hosts rely on the
//! resulting hysteresis at the boundaries.

use hooters_dom::DOMRect;

/// Geometry sampled for one hooter on one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Body row-group, viewport-relative
    pub body: DOMRect,
    /// The header or footer itself (only its height is used)
    pub hooter: DOMRect,
    /// `window.innerHeight`
    pub viewport_height: f64,
    /// Configured `top` (header) or `bottom` (footer) in pixels
    pub offset: f64,
    /// Whether the bound container intersects the viewport vertically
    pub container_visible: bool,
}

/// State change requested by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stick,
    Unstick,
}

/// Vertical viewport intersection test for the container
pub fn is_visible(rect: &DOMRect, viewport_height: f64) -> bool {
    rect.top() < viewport_height && rect.bottom() > 0.0
}

/// Footer rules.
///
/// Stuck footers are released once the body's bottom edge rises above the
/// sticky footer line, once the body's top edge drops below the viewport
/// bottom (the header met the footer), or once the container leaves the
/// viewport.
pub fn footer_transition(is_stuck: bool, g: &Geometry) -> Option<Transition> {
    let sticky_line = g.viewport_height - g.offset - g.hooter.height;
    let viewport_edge = g.viewport_height - g.offset;

    if is_stuck {
        let release = g.body.bottom() < sticky_line
            || g.body.top() > viewport_edge
            || !g.container_visible;
        release.then_some(Transition::Unstick)
    } else {
        let attach = g.body.bottom() > sticky_line
            && g.body.top() < viewport_edge
            && g.container_visible;
        attach.then_some(Transition::Stick)
    }
}

/// Header rules.
///
/// Unstuck headers attach once the body's top edge reaches the sticky header
/// line while the body still extends below it. Stuck headers are released
/// when the body drops back below the line, or when less than half a header
/// of body remains under it.
pub fn header_transition(is_stuck: bool, g: &Geometry) -> Option<Transition> {
    let sticky_line = g.offset + g.hooter.height;

    if is_stuck {
        let release = g.body.top() > sticky_line
            || g.body.bottom() < g.offset + g.hooter.height / 2.0;
        release.then_some(Transition::Unstick)
    } else {
        let attach = g.body.top() <= sticky_line && g.body.bottom() > sticky_line;
        attach.then_some(Transition::Stick)
    }
}

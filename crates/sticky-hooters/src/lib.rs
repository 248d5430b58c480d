//! Sticky Hooters
//!
//! Sticky headers and footers for scrollable tables and lists. While the
//! body of a bound container scrolls past the viewport edge, its header
//! and/or footer row-group is shown in a fixed-position overlay, and put
//! back in flow when sticking no longer makes sense.
//!
//! # Example
//! ```rust,ignore
//! use sticky_hooters::{Config, StickyHooters};
//!
//! let mut hooters = StickyHooters::new();
//! hooters.bind(&mut doc, table, Config::default().with_top("48px"))?;
//!
//! // host event loop
//! doc.window.scroll_to(1200.0);
//! hooters.on_scroll(&mut doc)?;
//! doc.window.advance(Duration::from_millis(16));
//! hooters.run_timers(&mut doc)?;
//! ```

mod config;
mod error;
pub mod overlay;
mod region;
mod registry;
pub mod throttle;
mod transition;
pub mod watcher;

use std::time::Duration;

pub use config::{parse_leading_int, Config};
pub use error::{HooterError, Result};
pub use region::{Hooter, HooterKind, Region};
pub use registry::{BindOutcome, StickyHooters};
pub use transition::{stick, unstick};

/// Scroll handler rate limit window
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(40);

/// CSS class markers placed on generated elements
pub mod classes {
    /// Positioning wrapper around the bound container
    pub const OUTER_WRAPPER: &str = "sticky-hooters_wrapper";
    /// Every overlay wrapper
    pub const INNER_WRAPPER: &str = "sticky-hooters_sticky-wrapper";
    /// Header overlay wrapper
    pub const INNER_WRAPPER_HEADER: &str = "sticky-hooters_sticky-header";
    /// Footer overlay wrapper
    pub const INNER_WRAPPER_FOOTER: &str = "sticky-hooters_sticky-footer";
}

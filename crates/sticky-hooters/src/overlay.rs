//! Overlay construction
//!
//! Each header or footer gets one hidden, fixed-position copy of itself,
//! built once when the region is set up:
//!
//! ```text
//! <div class="sticky-hooters_sticky-wrapper sticky-hooters_sticky-header"
//!      style="bottom: auto; position: fixed; top: 0; z-index: 9999; display: none;">
//!   <table class="...container classes...">   (table containers only)
//!     <thead>...copy...</thead>
//!   </table>
//! </div>
//! ```
//!
//! A bare row-group outside a table does not get table cell sizing, hence the
//! table wrapper carrying the container's classes.

use hooters_dom::{Document, NodeId};

use crate::classes;
use crate::region::HooterKind;
use crate::{Config, Result};

/// Stacking order of overlays
pub const OVERLAY_Z_INDEX: &str = "9999";

/// Nodes created for one hooter's overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    /// Fixed-position wrapper, toggled between shown and hidden
    pub wrapper: NodeId,
    /// Copy of the hooter; trades places with the live hooter while stuck
    pub placeholder: NodeId,
}

/// Build the overlay for `hooter` and insert it next to `container`: before
/// it for a header, after it for a footer, so the overlays keep the
/// header/body/footer reading order.
///
/// Must be called once per hooter per region.
pub fn build_overlay(
    doc: &mut Document,
    hooter: NodeId,
    kind: HooterKind,
    config: &Config,
    container: NodeId,
    is_table: bool,
) -> Result<Overlay> {
    let tree = &mut doc.tree;
    let placeholder = tree.clone_node(hooter, true)?;

    let wrapper = tree.create_element("div");
    let (top, bottom) = match kind {
        HooterKind::Header => (config.top.as_str(), "auto"),
        HooterKind::Footer => ("auto", config.bottom.as_str()),
    };
    {
        let style = tree.style_mut(wrapper)?;
        style.set("bottom", bottom);
        style.set("position", "fixed");
        style.set("top", top);
        style.set("z-index", OVERLAY_Z_INDEX);
    }
    tree.add_class(wrapper, &[classes::INNER_WRAPPER, kind.wrapper_class()])?;

    if is_table {
        let table = tree.create_element("table");
        if let Some(class) = tree.get_attribute(container, "class").map(str::to_string) {
            tree.set_attribute(table, "class", &class)?;
        }
        tree.append_child(table, placeholder)?;
        tree.append_child(wrapper, table)?;
    } else {
        tree.append_child(wrapper, placeholder)?;
    }

    tree.set_style(wrapper, "display", "none")?;

    match kind {
        HooterKind::Header => tree.insert_adjacent_before(container, wrapper)?,
        HooterKind::Footer => tree.insert_after(container, wrapper)?,
    };

    tracing::debug!(?kind, ?wrapper, ?placeholder, is_table, "overlay created");
    Ok(Overlay { wrapper, placeholder })
}

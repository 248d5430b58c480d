//! Stick / unstick transitions
//!
//! Sticking trades places between the live hooter and its placeholder copy
//! inside the overlay, so the fixed overlay shows the real, interactive
//! content while the placeholder holds the in-flow slot. Unsticking trades
//! them back. The exchange is its own inverse.

use hooters_dom::{swap_nodes, Document};

use crate::classes;
use crate::region::Hooter;
use crate::Result;

/// Move the live hooter into its overlay and show the overlay.
///
/// The overlay is given the current pixel width of the outer region wrapper;
/// a hidden wrapper has no width of its own.
pub fn stick(doc: &mut Document, hooter: &mut Hooter) -> Result<()> {
    if hooter.is_stuck {
        return Ok(());
    }

    let width = doc
        .tree
        .closest(hooter.element, &format!(".{}", classes::OUTER_WRAPPER))
        .map_or(0.0, |wrapper| doc.width(wrapper));

    swap_nodes(&mut doc.tree, hooter.element, hooter.placeholder)?;

    hooter.is_stuck = true;
    doc.tree.set_style(hooter.overlay, "display", "block")?;
    doc.tree.set_style(hooter.overlay, "width", &format!("{}px", width))?;

    tracing::trace!(kind = ?hooter.kind, width, "stuck");
    Ok(())
}

/// Put the live hooter back in flow and hide the overlay.
pub fn unstick(doc: &mut Document, hooter: &mut Hooter) -> Result<()> {
    if !hooter.is_stuck {
        return Ok(());
    }

    swap_nodes(&mut doc.tree, hooter.element, hooter.placeholder)?;

    hooter.is_stuck = false;
    doc.tree.set_style(hooter.overlay, "display", "none")?;

    tracing::trace!(kind = ?hooter.kind, "unstuck");
    Ok(())
}

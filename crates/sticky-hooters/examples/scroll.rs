//! Example: scroll a long table past the viewport and watch its header and
//! footer stick and release.
//!
//! Run with `RUST_LOG=sticky_hooters=trace` to see every tick.

use std::time::Duration;

use hooters_dom::{DOMRect, Document, NodeId};
use sticky_hooters::{Config, HooterKind, StickyHooters};
use tracing_subscriber::EnvFilter;

const SCROLL_SETTLE_MS: u64 = 50;

fn row_group(doc: &mut Document, table: NodeId, tag: &str, rect: DOMRect) -> anyhow::Result<NodeId> {
    let group = doc.tree.create_element(tag);
    let row = doc.tree.create_element("tr");
    doc.tree.append_child(table, group)?;
    doc.tree.append_child(group, row)?;
    doc.tree.set_layout(group, rect)?;
    Ok(group)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(1280.0, 720.0);
    let table = doc.tree.create_element("table");
    doc.tree.set_attribute(table, "class", "report")?;
    let page_body = doc.body();
    doc.tree.append_child(page_body, table)?;

    row_group(&mut doc, table, "thead", DOMRect::from_xywh(0.0, 400.0, 1200.0, 32.0))?;
    row_group(&mut doc, table, "tbody", DOMRect::from_xywh(0.0, 432.0, 1200.0, 3000.0))?;
    row_group(&mut doc, table, "tfoot", DOMRect::from_xywh(0.0, 3432.0, 1200.0, 32.0))?;

    let config = Config::from_json(r#"{ "top": "48px" }"#)?;
    let mut hooters = StickyHooters::new();
    let outcome = hooters.bind(&mut doc, table, config)?;
    println!("bind: {outcome:?}");

    for y in (0..=3600).step_by(300) {
        doc.window.advance(Duration::from_millis(16));
        doc.window.scroll_to(f64::from(y));
        hooters.on_scroll(&mut doc)?;
        doc.window.advance(Duration::from_millis(SCROLL_SETTLE_MS));
        hooters.run_timers(&mut doc)?;

        if let Some(region) = hooters.region(table) {
            println!(
                "scroll_y={y:>5}  header stuck: {:<5}  footer stuck: {}",
                region.is_stuck(HooterKind::Header),
                region.is_stuck(HooterKind::Footer)
            );
        }
    }

    hooters.unbind(&mut doc, table);
    println!("{}", doc.tree.outer_html(doc.body()));
    Ok(())
}

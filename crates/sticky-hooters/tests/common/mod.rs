//! Shared fixtures: a long table laid out one viewport below the top of the
//! page, and helpers that drive the host event loop.

#![allow(dead_code)]

use std::time::Duration;

use hooters_dom::{DOMRect, Document, NodeId};
use sticky_hooters::StickyHooters;

pub const VIEWPORT_WIDTH: f64 = 1000.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;
pub const TABLE_TOP: f64 = 800.0;
pub const TABLE_WIDTH: f64 = 900.0;
pub const HEADER_HEIGHT: f64 = 40.0;
pub const BODY_HEIGHT: f64 = 2000.0;
pub const FOOTER_HEIGHT: f64 = 40.0;

pub struct Fixture {
    pub doc: Document,
    pub table: NodeId,
    pub thead: Option<NodeId>,
    pub tbody: NodeId,
    pub tfoot: Option<NodeId>,
}

fn row_group(doc: &mut Document, tag: &str, label: &str, rect: DOMRect) -> NodeId {
    let tree = &mut doc.tree;
    let group = tree.create_element(tag);
    let tr = tree.create_element("tr");
    let cell = tree.create_element(if tag == "tbody" { "td" } else { "th" });
    let text = tree.create_text(label);
    tree.append_child(group, tr).unwrap();
    tree.append_child(tr, cell).unwrap();
    tree.append_child(cell, text).unwrap();
    tree.set_layout(group, rect).unwrap();
    group
}

/// `<table class="grid">` with optional `<thead>`/`<tfoot>` around a
/// 2000px `<tbody>`
pub fn table(with_header: bool, with_footer: bool) -> Fixture {
    let mut doc = Document::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let table = doc.tree.create_element("table");
    doc.tree.set_attribute(table, "class", "grid").unwrap();
    let page_body = doc.body();
    doc.tree.append_child(page_body, table).unwrap();

    let body_top = TABLE_TOP + HEADER_HEIGHT;
    let thead = with_header.then(|| {
        row_group(
            &mut doc,
            "thead",
            "Name",
            DOMRect::from_xywh(0.0, TABLE_TOP, TABLE_WIDTH, HEADER_HEIGHT),
        )
    });
    let tbody = row_group(
        &mut doc,
        "tbody",
        "Row",
        DOMRect::from_xywh(0.0, body_top, TABLE_WIDTH, BODY_HEIGHT),
    );
    let tfoot = with_footer.then(|| {
        row_group(
            &mut doc,
            "tfoot",
            "Total",
            DOMRect::from_xywh(0.0, body_top + BODY_HEIGHT, TABLE_WIDTH, FOOTER_HEIGHT),
        )
    });

    for group in [thead, Some(tbody), tfoot].into_iter().flatten() {
        doc.tree.append_child(table, group).unwrap();
    }

    Fixture {
        doc,
        table,
        thead,
        tbody,
        tfoot,
    }
}

/// Scroll so that the body's top edge sits at `body_top` in the viewport,
/// after letting the throttle window pass.
pub fn scroll_body_to(fx: &mut Fixture, hooters: &mut StickyHooters, body_top: f64) {
    fx.doc.window.advance(Duration::from_millis(50));
    fx.doc.window.scroll_to(TABLE_TOP + HEADER_HEIGHT - body_top);
    hooters.on_scroll(&mut fx.doc).unwrap();
}

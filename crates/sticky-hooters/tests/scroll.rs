//! Scroll scenarios: a 2000px table body scrolled through an 800px viewport.

mod common;

use std::time::Duration;

use common::{scroll_body_to, table};
use sticky_hooters::{BindOutcome, Config, HooterKind, StickyHooters};

#[test]
fn test_header_sticks_and_releases_at_exact_boundaries() {
    let mut fx = table(true, false);
    let mut hooters = StickyHooters::new();
    assert_eq!(
        hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap(),
        BindOutcome::Bound
    );
    let thead = fx.thead.unwrap();

    // initial synthetic tick: body top at 840, nothing to stick
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));

    scroll_body_to(&mut fx, &mut hooters, 41.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));

    // 0 <= 0 + 40 and 2000 > 40
    scroll_body_to(&mut fx, &mut hooters, 0.0);
    let region = hooters.region(fx.table).unwrap();
    assert!(region.is_stuck(HooterKind::Header));
    let overlay = region.header().unwrap().overlay();
    assert_eq!(fx.doc.tree.closest(thead, ".sticky-hooters_sticky-header"), Some(overlay));

    // bottom 30: neither 30 < 20 nor -1970 > 40, so the header stays
    scroll_body_to(&mut fx, &mut hooters, -1970.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));

    // bottom 19 < 20
    scroll_body_to(&mut fx, &mut hooters, -1981.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));
    assert_eq!(fx.doc.tree.parent(thead), Some(fx.table));

    // 19 is not > 40, so it does not re-stick either
    scroll_body_to(&mut fx, &mut hooters, -1981.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));
}

#[test]
fn test_header_releases_when_scrolled_back_up() {
    let mut fx = table(true, false);
    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap();

    scroll_body_to(&mut fx, &mut hooters, -300.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));

    scroll_body_to(&mut fx, &mut hooters, 40.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));

    scroll_body_to(&mut fx, &mut hooters, 41.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));
}

#[test]
fn test_header_top_offset() {
    let mut fx = table(true, false);
    let mut hooters = StickyHooters::new();
    hooters
        .bind(&mut fx.doc, fx.table, Config::default().with_top("60px"))
        .unwrap();

    scroll_body_to(&mut fx, &mut hooters, 101.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Header));

    scroll_body_to(&mut fx, &mut hooters, 100.0);
    let region = hooters.region(fx.table).unwrap();
    assert!(region.is_stuck(HooterKind::Header));
    let style = fx.doc.tree.style(region.header().unwrap().overlay()).unwrap();
    assert_eq!(style.get("top"), Some("60px"));
}

#[test]
fn test_footer_sticks_while_body_runs_past_viewport() {
    let mut fx = table(false, true);
    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap();
    let tfoot = fx.tfoot.unwrap();

    // table still below the fold
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    // body top 700 < 800, bottom 2700 > 760, container visible
    scroll_body_to(&mut fx, &mut hooters, 700.0);
    let region = hooters.region(fx.table).unwrap();
    assert!(region.is_stuck(HooterKind::Footer));
    let overlay = region.footer().unwrap().overlay();
    let style = fx.doc.tree.style(overlay).unwrap();
    assert_eq!(style.get("display"), Some("block"));
    assert_eq!(style.get("width"), Some("900px"));
    assert_eq!(style.get("bottom"), Some("0"));
    assert_eq!(fx.doc.tree.closest(tfoot, ".sticky-hooters_sticky-footer"), Some(overlay));

    // bottom 761 > 760
    scroll_body_to(&mut fx, &mut hooters, -1239.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    // bottom 759 < 760: the real footer is on screen
    scroll_body_to(&mut fx, &mut hooters, -1241.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));
    assert_eq!(fx.doc.tree.parent(tfoot), Some(fx.table));
    assert_eq!(fx.doc.tree.style(overlay).unwrap().get("display"), Some("none"));
}

#[test]
fn test_footer_releases_when_body_top_drops_below_viewport() {
    let mut fx = table(false, true);
    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap();

    scroll_body_to(&mut fx, &mut hooters, 700.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    scroll_body_to(&mut fx, &mut hooters, 800.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    scroll_body_to(&mut fx, &mut hooters, 801.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));
}

#[test]
fn test_footer_bottom_offset() {
    let mut fx = table(false, true);
    let mut hooters = StickyHooters::new();
    hooters
        .bind(&mut fx.doc, fx.table, Config::default().with_bottom("20px"))
        .unwrap();

    // sticky line = 800 - 20 - 40 = 740, viewport edge = 780
    scroll_body_to(&mut fx, &mut hooters, 780.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    scroll_body_to(&mut fx, &mut hooters, 779.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    scroll_body_to(&mut fx, &mut hooters, -1260.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    scroll_body_to(&mut fx, &mut hooters, -1261.0);
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));
}

#[test]
fn test_header_and_footer_together() {
    let mut fx = table(true, true);
    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap();

    scroll_body_to(&mut fx, &mut hooters, 500.0);
    let region = hooters.region(fx.table).unwrap();
    assert!(region.is_stuck(HooterKind::Footer));
    assert!(!region.is_stuck(HooterKind::Header));

    scroll_body_to(&mut fx, &mut hooters, -500.0);
    let region = hooters.region(fx.table).unwrap();
    assert!(region.is_stuck(HooterKind::Footer));
    assert!(region.is_stuck(HooterKind::Header));

    scroll_body_to(&mut fx, &mut hooters, -1900.0);
    let region = hooters.region(fx.table).unwrap();
    assert!(!region.is_stuck(HooterKind::Footer));
    assert!(region.is_stuck(HooterKind::Header));

    // the live element sits in the overlay exactly when the overlay is shown
    for kind in [HooterKind::Header, HooterKind::Footer] {
        let hooter = region.hooter(kind).unwrap();
        let tree = &fx.doc.tree;
        let in_overlay = tree.is_inclusive_ancestor(hooter.overlay(), hooter.element());
        let placeholder_in_table = tree.parent(hooter.placeholder()) == Some(fx.table);

        assert_eq!(in_overlay, hooter.is_stuck());
        assert_eq!(placeholder_in_table, hooter.is_stuck());
        assert_eq!(tree.is_hidden(hooter.overlay()), !hooter.is_stuck());
    }
}

#[test]
fn test_footer_releases_when_container_leaves_viewport() {
    let mut fx = table(false, true);
    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap();

    scroll_body_to(&mut fx, &mut hooters, 700.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    // shrink the viewport so the table falls below the fold
    fx.doc.window.inner_height = 500.0;
    fx.doc.window.advance(Duration::from_millis(50));
    hooters.on_scroll(&mut fx.doc).unwrap();
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));
}

#[test]
fn test_repeated_ticks_do_not_toggle() {
    let mut fx = table(true, true);
    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap();

    for body_top in [900.0, 700.0, 0.0, -500.0, -1970.0, -1990.0] {
        scroll_body_to(&mut fx, &mut hooters, body_top);
        let region = hooters.region(fx.table).unwrap();
        let state = (region.is_stuck(HooterKind::Header), region.is_stuck(HooterKind::Footer));
        let html = fx.doc.tree.outer_html(region.wrapper());

        for _ in 0..3 {
            fx.doc.window.advance(Duration::from_millis(50));
            hooters.on_scroll(&mut fx.doc).unwrap();
            let region = hooters.region(fx.table).unwrap();
            assert_eq!(
                (region.is_stuck(HooterKind::Header), region.is_stuck(HooterKind::Footer)),
                state
            );
            assert_eq!(fx.doc.tree.outer_html(region.wrapper()), html);
        }
    }
}

#[test]
fn test_burst_within_window_runs_trailing_tick_once() {
    let mut fx = table(false, true);
    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, fx.table, Config::default()).unwrap();

    // leading tick at t=50
    scroll_body_to(&mut fx, &mut hooters, 700.0);
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    // burst at t=55 and t=60 back to the top of the page
    fx.doc.window.advance(Duration::from_millis(5));
    fx.doc.window.scroll_to(0.0);
    hooters.on_scroll(&mut fx.doc).unwrap();
    fx.doc.window.advance(Duration::from_millis(5));
    hooters.on_scroll(&mut fx.doc).unwrap();
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    // trailing tick is due 40ms after the last call in the burst
    fx.doc.window.advance(Duration::from_millis(39));
    hooters.run_timers(&mut fx.doc).unwrap();
    assert!(hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));

    fx.doc.window.advance(Duration::from_millis(1));
    hooters.run_timers(&mut fx.doc).unwrap();
    assert!(!hooters.region(fx.table).unwrap().is_stuck(HooterKind::Footer));
}

#[test]
fn test_list_container_without_table_wrapper() {
    let mut fx = table(true, false);
    let list = fx.doc.tree.create_element("div");
    fx.doc.tree.set_attribute(list, "class", "list").unwrap();
    let page_body = fx.doc.body();
    fx.doc.tree.append_child(page_body, list).unwrap();
    // reuse the table's row-groups as list sections
    for group in [fx.thead.unwrap(), fx.tbody] {
        fx.doc.tree.append_child(list, group).unwrap();
    }

    let mut hooters = StickyHooters::new();
    hooters.bind(&mut fx.doc, list, Config::default()).unwrap();
    let region = hooters.region(list).unwrap();
    assert!(!region.is_table());
    let overlay = region.header().unwrap().overlay();
    assert!(fx.doc.tree.query_selector(overlay, "table").is_none());

    scroll_body_to(&mut fx, &mut hooters, -100.0);
    assert!(hooters.region(list).unwrap().is_stuck(HooterKind::Header));
    assert_eq!(fx.doc.tree.parent(fx.thead.unwrap()), Some(overlay));
}

use martone_core::scroll::*;

fn metrics(scroll_y: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    }
}

#[test]
fn progress_is_percent_of_scrollable_height() {
    assert_eq!(progress_percent(&metrics(500.0, 1000.0, 2000.0)), 50.0);
    assert_eq!(progress_percent(&metrics(0.0, 1000.0, 2000.0)), 0.0);
    assert_eq!(progress_percent(&metrics(1000.0, 1000.0, 2000.0)), 100.0);
    // overscroll bounce
    assert_eq!(progress_percent(&metrics(1200.0, 1000.0, 2000.0)), 100.0);
    assert_eq!(progress_percent(&metrics(-40.0, 1000.0, 2000.0)), 0.0);
}

#[test]
fn short_page_reports_zero_progress() {
    assert_eq!(progress_percent(&metrics(0.0, 1000.0, 1000.0)), 0.0);
    assert_eq!(progress_percent(&metrics(10.0, 1000.0, 600.0)), 0.0);
}

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert_eq!(parallax_offset(300.0), 150.0);
}

#[test]
fn fade_runs_from_one_to_zero() {
    let el = ElementBox {
        top: 1000.0,
        height: 200.0,
    };
    assert_eq!(fade_opacity(&metrics(0.0, 800.0, 3000.0), &el), 1.0);
    assert_eq!(fade_opacity(&metrics(200.0, 800.0, 3000.0), &el), 1.0);
    assert_eq!(fade_opacity(&metrics(700.0, 800.0, 3000.0), &el), 0.5);
    // element scrolled fully past
    assert_eq!(fade_opacity(&metrics(1300.0, 800.0, 3000.0), &el), 0.0);
    let o = fade_opacity(&metrics(500.0, 800.0, 3000.0), &el);
    assert!((0.0..=1.0).contains(&o));
}

#[test]
fn scale_grows_while_entering() {
    let el = ElementBox {
        top: 1000.0,
        height: 200.0,
    };
    assert_eq!(scale_factor(&metrics(0.0, 800.0, 3000.0), &el), 0.8);
    assert!((scale_factor(&metrics(600.0, 800.0, 3000.0), &el) - 0.9).abs() < 1e-9);
    assert_eq!(scale_factor(&metrics(2000.0, 800.0, 3000.0), &el), 1.0);
}

#[test]
fn degenerate_viewport_does_not_produce_nan() {
    let el = ElementBox::default();
    let m = metrics(0.0, 0.0, 0.0);
    assert_eq!(fade_opacity(&m, &el), 1.0);
    assert_eq!(scale_factor(&m, &el), 1.0);
    assert_eq!(progress_percent(&m), 0.0);
}

#[test]
fn navbar_and_back_to_top_thresholds() {
    assert!(!navbar_scrolled(50.0));
    assert!(navbar_scrolled(51.0));
    assert!(!back_to_top_visible(500.0));
    assert!(back_to_top_visible(501.0));
}

#[test]
fn anchor_target_accounts_for_navbar() {
    assert_eq!(anchor_scroll_target(1000.0), 920.0);
    assert_eq!(anchor_scroll_target(30.0), 0.0);
}

#[test]
fn scroll_bursts_coalesce_into_one_recompute() {
    let mut reactor = ScrollReactor::new();
    let scheduled: usize = (0..10).filter(|_| reactor.request()).count();
    assert_eq!(scheduled, 1);
    assert!(reactor.is_scheduled());

    let frame = reactor.recompute(&metrics(600.0, 800.0, 2400.0), &[ElementBox::default()], &[]);
    assert_eq!(reactor.recomputations(), 1);
    assert!(!reactor.is_scheduled());
    assert_eq!(frame.parallax_y, 300.0);
    assert_eq!(frame.progress_percent, 37.5);
    assert!(frame.navbar_scrolled);
    assert!(frame.back_to_top_visible);
    assert_eq!(frame.fade_opacities.len(), 1);
    assert!(frame.scale_factors.is_empty());

    // next burst schedules again
    assert!(reactor.request());
    assert!(!reactor.request());
}

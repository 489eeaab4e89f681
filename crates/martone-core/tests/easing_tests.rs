use martone_core::easing::*;

fn assert_monotonic(name: &str, f: impl Fn(f64) -> f64) {
    let mut prev = f(0.0);
    for i in 1..=1000 {
        let t = i as f64 / 1000.0;
        let v = f(t);
        assert!(v >= prev, "{name} decreased at t={t}: {prev} -> {v}");
        assert!((0.0..=1.0).contains(&v), "{name} left [0,1] at t={t}: {v}");
        prev = v;
    }
}

#[test]
fn endpoints_are_fixed() {
    for e in [Easing::Linear, Easing::EaseInOutCubic, Easing::EaseOutCubic] {
        assert_eq!(e.apply(0.0), 0.0, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
    }
}

#[test]
fn curves_are_monotonic() {
    assert_monotonic("ease_in_out_cubic", ease_in_out_cubic);
    assert_monotonic("ease_out_cubic", ease_out_cubic);
    assert_monotonic("linear", |t| Easing::Linear.apply(t));
}

#[test]
fn known_values() {
    // 4t³ on the first half
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
    // mirrored second half
    assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-12);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(ease_out_cubic(-0.5), 0.0);
    assert_eq!(ease_out_cubic(1.5), 1.0);
    assert_eq!(Easing::EaseInOutCubic.apply(2.0), 1.0);
}

#[test]
fn lerp_blends_between_endpoints() {
    assert_eq!(lerp(0.8, 1.0, 0.0), 0.8);
    assert_eq!(lerp(0.8, 1.0, 1.0), 1.0);
    assert!((lerp(-100.0, 0.0, 0.5) + 50.0).abs() < 1e-12);
}

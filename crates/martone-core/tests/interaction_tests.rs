use martone_core::interaction::*;

fn card() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 100.0)
}

#[test]
fn magnetic_pull_follows_pointer() {
    let t = magnetic_pull(&card(), 250.0, 150.0);
    assert!((t.translate_x - 5.0).abs() < 1e-9);
    assert_eq!(t.translate_y, 0.0);
    assert_eq!(t.scale, 1.05);
}

#[test]
fn tilt_at_center_is_flat_but_lifted() {
    let t = tilt(&card(), 200.0, 150.0);
    assert_eq!(t.rotate_x, 0.0);
    assert_eq!(t.rotate_y, 0.0);
    assert_eq!(t.lift_px, 10.0);
}

#[test]
fn tilt_is_bounded_by_max_angle() {
    let corner = tilt(&card(), 300.0, 200.0);
    assert_eq!(corner.rotate_y, 10.0);
    assert_eq!(corner.rotate_x, -10.0);
    // pointer far outside the card still stays within bounds
    let far = tilt(&card(), -5000.0, -5000.0);
    assert_eq!(far.rotate_y, -10.0);
    assert_eq!(far.rotate_x, 10.0);
}

#[test]
fn zero_sized_card_does_not_tilt() {
    assert_eq!(tilt(&Rect::new(0.0, 0.0, 0.0, 0.0), 10.0, 10.0), Tilt::FLAT);
}

#[test]
fn tilt_css() {
    let t = tilt(&card(), 300.0, 150.0);
    assert_eq!(
        t.to_css(),
        "perspective(1000px) rotateX(0.00deg) rotateY(10.00deg) translateZ(10px)"
    );
    assert_eq!(
        Tilt::FLAT.to_css(),
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateZ(0px)"
    );
}

#[test]
fn ripple_centres_on_click() {
    let r = Ripple::at(&card(), 150.0, 120.0);
    assert_eq!(r.size, 200.0);
    assert_eq!(r.left, -50.0);
    assert_eq!(r.top, -80.0);
}

#[test]
fn ripple_grows_and_fades() {
    assert_eq!(Ripple::frame(0.0), (0.0, 1.0));
    assert_eq!(Ripple::frame(0.5), (1.0, 0.5));
    assert_eq!(Ripple::frame(1.0), (2.0, 0.0));
}

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("Spacebar"));
}

use martone_core::animator::Transform;
use martone_core::easing::Easing;
use martone_core::reveal::*;

#[test]
fn tags_map_to_variants() {
    assert_eq!(RevealKind::from_attribute(Some("fadeInScale")), RevealKind::FadeScale);
    assert_eq!(
        RevealKind::from_attribute(Some("slideInRight")),
        RevealKind::SlideRotate(SlideFrom::Right)
    );
    assert_eq!(RevealKind::from_attribute(Some("typeWriter")), RevealKind::TypeWriter);
    assert_eq!(RevealKind::from_attribute(Some("bounceIn")), RevealKind::BounceIn);
    assert_eq!(RevealKind::from_attribute(Some("wobble")), RevealKind::Default);
    assert_eq!(RevealKind::from_attribute(None), RevealKind::Default);
    assert_eq!(RevealKind::Default.as_attribute(), "fadeInUp");
}

#[test]
fn slide_spec_uses_slide_defaults() {
    let spec = RevealSpec::from_attributes(Some("slideInLeft"), Some("200"), None).unwrap();
    assert_eq!(spec.delay_ms, 200.0);
    assert_eq!(spec.duration_ms, 800.0);
    match spec.plan() {
        RevealPlan::Tween { from, to, tween } => {
            assert_eq!(from, Transform::translated(-100.0, 0.0).rotated(10.0));
            assert_eq!(to, Transform::IDENTITY);
            assert_eq!(tween.delay_ms, 200.0);
            assert_eq!(tween.easing, Easing::EaseInOutCubic);
        }
        other => panic!("unexpected plan {other:?}"),
    }
}

#[test]
fn fade_scale_starts_small() {
    let spec = RevealSpec::from_attributes(Some("fadeInScale"), None, Some("1000")).unwrap();
    match spec.plan() {
        RevealPlan::Tween { from, tween, .. } => {
            assert_eq!(from, Transform::scaled(0.8));
            assert_eq!(tween.duration_ms, 1000.0);
        }
        other => panic!("unexpected plan {other:?}"),
    }
}

#[test]
fn class_driven_variants() {
    assert_eq!(
        RevealKind::BounceIn.plan(0.0, 600.0),
        RevealPlan::Classes {
            classes: &["animate__animated", "animate__bounceIn"],
            delay_ms: 0.0
        }
    );
    assert_eq!(
        RevealKind::Default.plan(150.0, 600.0),
        RevealPlan::Classes {
            classes: &["animate__animated", "animate__fadeInUp"],
            delay_ms: 150.0
        }
    );
}

#[test]
fn malformed_delay_is_an_error() {
    assert!(RevealSpec::from_attributes(Some("bounceIn"), Some("later"), None).is_err());
}

#[test]
fn reveal_frame_endpoints() {
    let from = Transform::translated(100.0, 0.0).rotated(-10.0);
    let start = RevealFrame::at(from, Transform::IDENTITY, 0.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.transform, from);
    let end = RevealFrame::at(from, Transform::IDENTITY, 1.0);
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.transform, Transform::IDENTITY);
}

#[test]
fn typewriter_timing() {
    assert_eq!(typewriter_duration_ms("Gallery", 50.0), 350.0);
    assert_eq!(typewriter_visible_chars(10, 0.0), 0);
    assert_eq!(typewriter_visible_chars(10, 0.55), 5);
    assert_eq!(typewriter_visible_chars(10, 1.0), 10);
    assert_eq!(char_prefix("Gallery", 3), "Gal");
}

#[test]
fn sections_rise_in_sequence() {
    let (from, first) = section_reveal_tween(0);
    let (_, third) = section_reveal_tween(2);
    assert_eq!(from, Transform::translated(0.0, 50.0));
    assert_eq!(first.delay_ms, 500.0);
    assert_eq!(third.delay_ms, 900.0);
    assert_eq!(third.duration_ms, 800.0);
}

#[test]
fn bad_duration_keeps_valid_delay() {
    let (spec, errors) =
        RevealSpec::from_attributes_lenient(Some("fadeInScale"), Some("400"), Some("fast"));
    assert_eq!(errors.len(), 1);
    assert_eq!(spec.delay_ms, 400.0);
    assert_eq!(spec.duration_ms, RevealKind::FadeScale.default_duration_ms());

    let (spec, errors) =
        RevealSpec::from_attributes_lenient(Some("slideInLeft"), Some("-3"), Some("900"));
    assert_eq!(errors.len(), 1);
    assert_eq!(spec.delay_ms, 0.0);
    assert_eq!(spec.duration_ms, 900.0);

    let (spec, errors) = RevealSpec::from_attributes_lenient(None, Some("150"), None);
    assert!(errors.is_empty());
    assert_eq!(
        Ok(spec),
        RevealSpec::from_attributes(None, Some("150"), None)
    );
}

#[test]
fn animate_tags_become_class_pairs() {
    assert_eq!(
        animate_classes(Some("zoomIn")),
        ["animate__animated".to_string(), "animate__zoomIn".to_string()]
    );
    for missing in [None, Some(""), Some("  "), Some("zoom In")] {
        assert_eq!(animate_classes(missing)[1], "animate__fadeInUp", "{missing:?}");
    }
}

#[test]
fn floating_elements_stagger_by_half_a_second() {
    assert_eq!(floating_delay_ms(0), 0.0);
    assert_eq!(floating_delay_ms(3), 1500.0);
}

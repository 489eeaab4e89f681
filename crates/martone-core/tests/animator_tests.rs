use martone_core::animator::*;
use martone_core::easing::Easing;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = frames.clone();
    (frames, move |p| sink.borrow_mut().push(p))
}

#[test]
fn frames_follow_eased_progress_and_complete_once() {
    let (frames, on_frame) = recorder();
    let completed = Rc::new(Cell::new(0));
    let c = completed.clone();
    let mut a = Animation::new(1000.0, Tween::new(400.0, Easing::Linear), on_frame)
        .on_complete(move || c.set(c.get() + 1));

    assert_eq!(a.sample(1100.0), AnimationPhase::Running);
    assert_eq!(a.sample(1300.0), AnimationPhase::Running);
    assert_eq!(a.sample(1400.0), AnimationPhase::Finished);
    assert_eq!(a.sample(1500.0), AnimationPhase::Finished);

    assert_eq!(*frames.borrow(), vec![0.25, 0.75, 1.0]);
    assert_eq!(completed.get(), 1);
}

#[test]
fn nothing_happens_before_the_delay() {
    let (frames, on_frame) = recorder();
    let mut a = Animation::new(
        0.0,
        Tween::new(600.0, Easing::EaseOutCubic).delayed(200.0),
        on_frame,
    );
    assert_eq!(a.sample(0.0), AnimationPhase::Delayed);
    assert_eq!(a.sample(199.0), AnimationPhase::Delayed);
    assert!(frames.borrow().is_empty());
    a.sample(200.0);
    assert_eq!(*frames.borrow(), vec![0.0]);
}

#[test]
fn zero_duration_completes_on_first_sample_after_delay() {
    let (frames, on_frame) = recorder();
    let mut a = Animation::new(0.0, Tween::new(0.0, Easing::EaseInOutCubic).delayed(50.0), on_frame);
    assert_eq!(a.sample(10.0), AnimationPhase::Delayed);
    assert_eq!(a.sample(50.0), AnimationPhase::Finished);
    assert_eq!(*frames.borrow(), vec![1.0]);
}

#[test]
fn cancel_skips_completion() {
    let completed = Rc::new(Cell::new(false));
    let c = completed.clone();
    let mut a = Animation::new(0.0, Tween::new(100.0, Easing::Linear), |_| {})
        .on_complete(move || c.set(true));
    a.sample(50.0);
    a.cancel();
    a.sample(200.0);
    assert!(a.is_finished());
    assert!(!completed.get());
}

#[test]
fn animator_drops_finished_animations() {
    let mut animator = Animator::new();
    animator.start(Animation::new(0.0, Tween::new(100.0, Easing::Linear), |_| {}));
    animator.start(Animation::new(0.0, Tween::new(300.0, Easing::Linear), |_| {}));
    assert_eq!(animator.tick(50.0), 2);
    assert_eq!(animator.tick(100.0), 1);
    assert_eq!(animator.tick(300.0), 0);
    assert!(animator.is_idle());
}

#[test]
fn transform_blend_composes_scale_translate_rotate() {
    let from = Transform::translated(-100.0, 0.0).rotated(10.0);
    let mid = from.lerp(Transform::IDENTITY, 0.5);
    assert!((mid.translate_x + 50.0).abs() < 1e-9);
    assert!((mid.rotate_deg - 5.0).abs() < 1e-9);
    assert!((mid.scale - 1.0).abs() < 1e-9);

    let grow = Transform::scaled(0.8).lerp(Transform::IDENTITY, 0.5);
    assert!((grow.scale - 0.9).abs() < 1e-9);
    assert_eq!(
        grow.to_css(),
        "translate(0.00px, 0.00px) scale(0.9000) rotate(0.00deg)"
    );
}

use martone_core::notify::*;

#[test]
fn notification_lifecycle_on_timeout() {
    let mut center = NotificationCenter::default();
    let id = center.notify("Saved", NotificationKind::Success, 0.0);
    assert_eq!(center.phase(id), Some(NotificationPhase::Entering));
    assert_eq!(center.next_deadline(), Some(100.0));

    assert!(center.tick(99.0).is_empty());
    assert_eq!(center.tick(100.0), vec![NotificationEvent::Show(id)]);
    assert_eq!(center.next_deadline(), Some(5000.0));

    assert_eq!(center.tick(5000.0), vec![NotificationEvent::Hide(id)]);
    assert_eq!(center.phase(id), Some(NotificationPhase::Hiding));

    assert!(center.tick(5299.0).is_empty());
    assert_eq!(center.len(), 1);
    assert_eq!(center.tick(5300.0), vec![NotificationEvent::Remove(id)]);
    assert!(center.is_empty());
    assert_eq!(center.next_deadline(), None);
}

#[test]
fn late_tick_emits_transitions_in_order() {
    let mut center = NotificationCenter::default();
    let id = center.notify("hello", NotificationKind::Info, 1000.0);
    assert_eq!(
        center.tick(60_000.0),
        vec![
            NotificationEvent::Show(id),
            NotificationEvent::Hide(id),
            NotificationEvent::Remove(id),
        ]
    );
    assert!(center.is_empty());
}

#[test]
fn dismiss_removes_after_exit_transition() {
    let mut center = NotificationCenter::default();
    let id = center.notify("oops", NotificationKind::Error, 0.0);
    center.tick(100.0);

    assert!(center.dismiss(id, 1000.0));
    assert!(!center.dismiss(id, 1010.0), "second dismiss must be a no-op");
    assert_eq!(center.next_deadline(), Some(1300.0));
    assert!(center.tick(1299.0).is_empty());
    assert_eq!(center.tick(1300.0), vec![NotificationEvent::Remove(id)]);
    assert!(!center.dismiss(id, 2000.0));
}

#[test]
fn dismissed_notification_does_not_hide_twice() {
    let mut center = NotificationCenter::default();
    let id = center.notify("x", NotificationKind::Info, 0.0);
    center.tick(100.0);
    center.dismiss(id, 4900.0);
    let events = center.tick(5000.0);
    assert!(!events.contains(&NotificationEvent::Hide(id)));
    assert_eq!(center.tick(5200.0), vec![NotificationEvent::Remove(id)]);
}

#[test]
fn independent_notifications() {
    let mut center = NotificationCenter::new(NotifyTimings {
        enter_delay_ms: 0.0,
        timeout_ms: 1000.0,
        exit_ms: 100.0,
    });
    let a = center.notify("a", NotificationKind::Info, 0.0);
    let b = center.notify("b", NotificationKind::Success, 500.0);
    assert_ne!(a, b);
    assert_eq!(center.message(b), Some(("b", NotificationKind::Success)));

    let events = center.tick(1100.0);
    assert!(events.contains(&NotificationEvent::Remove(a)));
    assert!(!events.contains(&NotificationEvent::Remove(b)));
    assert_eq!(center.len(), 1);
}

#[test]
fn kinds_map_to_icons() {
    assert_eq!(NotificationKind::Info.icon(), "info-circle");
    assert_eq!(NotificationKind::Success.icon(), "check-circle");
    assert_eq!(NotificationKind::Error.icon(), "exclamation-circle");
    assert_eq!(NotificationKind::Error.as_str(), "error");
}

use martone_core::error::{SubmitError, ValidationError};
use martone_core::newsletter::*;

#[test]
fn email_shape() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@@b.co"));
}

#[test]
fn validate_trims_and_reports() {
    assert_eq!(validate_email("  a@b.co "), Ok("a@b.co"));
    assert_eq!(validate_email("   "), Err(ValidationError::EmptyEmail));
    assert_eq!(
        validate_email("a@b"),
        Err(ValidationError::MalformedEmail("a@b".into()))
    );
}

#[test]
fn field_validity_classes() {
    assert_eq!(FieldValidity::of(""), FieldValidity::Empty);
    assert_eq!(FieldValidity::of("a@b.co"), FieldValidity::Valid);
    assert_eq!(FieldValidity::of("a@"), FieldValidity::Invalid);
    assert_eq!(FieldValidity::Empty.class(), None);
    assert_eq!(FieldValidity::Valid.class(), Some("is-valid"));
    assert_eq!(FieldValidity::Invalid.class(), Some("is-invalid"));
}

#[test]
fn submission_acknowledged_after_round_trip() {
    let mut signup = Newsletter::default();
    assert_eq!(signup.ack_ms(), 1500.0);
    signup.submit("a@b.co", 100.0).unwrap();
    assert!(signup.is_pending());

    assert_eq!(signup.poll(1599.0), None);
    assert_eq!(
        signup.poll(1600.0),
        Some(Subscribed {
            email: "a@b.co".into()
        })
    );
    assert!(!signup.is_pending());
    assert_eq!(signup.poll(5000.0), None);
}

#[test]
fn resubmit_while_pending_is_rejected() {
    let mut signup = Newsletter::new(1500.0);
    signup.submit("a@b.co", 0.0).unwrap();
    assert_eq!(signup.submit("c@d.io", 10.0), Err(SubmitError::Pending));
    // once acknowledged the form can be used again
    signup.poll(1500.0);
    assert!(signup.submit("c@d.io", 1600.0).is_ok());
}

#[test]
fn invalid_submission_stays_idle() {
    let mut signup = Newsletter::default();
    assert_eq!(
        signup.submit("", 0.0),
        Err(SubmitError::Invalid(ValidationError::EmptyEmail))
    );
    assert!(matches!(
        signup.submit("a b@c.com", 0.0),
        Err(SubmitError::Invalid(ValidationError::MalformedEmail(_)))
    ));
    assert!(!signup.is_pending());
}

//! Newsletter signup. There is no backend: a valid submission is
//! acknowledged after a fixed simulated round-trip.

use crate::constants::NEWSLETTER_ACK_MS;
use crate::error::{SubmitError, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing! You'll receive updates soon.";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trim and check an address of the shape `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<&str, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::MalformedEmail(email.to_string()));
    }
    Ok(email)
}

/// Live feedback state of the email field while typing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValidity {
    Empty,
    Valid,
    Invalid,
}

impl FieldValidity {
    pub fn of(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            FieldValidity::Empty
        } else if is_valid_email(input) {
            FieldValidity::Valid
        } else {
            FieldValidity::Invalid
        }
    }

    /// Class to add; the other validity class is always removed.
    pub fn class(self) -> Option<&'static str> {
        match self {
            FieldValidity::Empty => None,
            FieldValidity::Valid => Some("is-valid"),
            FieldValidity::Invalid => Some("is-invalid"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SignupState {
    Idle,
    Pending { email: String, since: f64 },
}

/// Acknowledged subscription.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscribed {
    pub email: String,
}

#[derive(Debug)]
pub struct Newsletter {
    ack_ms: f64,
    state: SignupState,
}

impl Default for Newsletter {
    fn default() -> Self {
        Self::new(NEWSLETTER_ACK_MS)
    }
}

impl Newsletter {
    pub fn new(ack_ms: f64) -> Self {
        Self {
            ack_ms,
            state: SignupState::Idle,
        }
    }

    pub fn ack_ms(&self) -> f64 {
        self.ack_ms
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SignupState::Pending { .. })
    }

    pub fn submit(&mut self, email: &str, now: f64) -> Result<(), SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::Pending);
        }
        let email = validate_email(email)?;
        log::info!("[newsletter] submitting");
        self.state = SignupState::Pending {
            email: email.to_string(),
            since: now,
        };
        Ok(())
    }

    /// Resolve the simulated request once its round-trip has elapsed.
    pub fn poll(&mut self, now: f64) -> Option<Subscribed> {
        match &self.state {
            SignupState::Pending { email, since } if now >= since + self.ack_ms => {
                let done = Subscribed {
                    email: email.clone(),
                };
                self.state = SignupState::Idle;
                Some(done)
            }
            _ => None,
        }
    }
}

use thiserror::Error;

/// A markup annotation (`data-*` attribute) could not be interpreted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    #[error("attribute `{name}` has invalid value `{value}`")]
    Invalid { name: String, value: String },
    #[error("unknown share platform `{0}`")]
    UnknownPlatform(String),
}

impl AttributeError {
    pub fn invalid(name: &str, value: &str) -> Self {
        AttributeError::Invalid {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// User input rejected by a form check.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email address is empty")]
    EmptyEmail,
    #[error("`{0}` is not a valid email address")]
    MalformedEmail(String),
}

/// Newsletter submission failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a subscription request is already pending")]
    Pending,
}

/// Parse a millisecond annotation such as `data-delay="200"`.
///
/// Missing or blank values fall back to `default`; negative and non-finite
/// values are rejected.
pub fn parse_ms(name: &str, value: Option<&str>, default: f64) -> Result<f64, AttributeError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    match raw.parse::<f64>() {
        Ok(ms) if ms.is_finite() && ms >= 0.0 => Ok(ms),
        _ => Err(AttributeError::invalid(name, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ms_defaults_and_rejects() {
        assert_eq!(parse_ms("data-delay", None, 0.0), Ok(0.0));
        assert_eq!(parse_ms("data-delay", Some("  "), 600.0), Ok(600.0));
        assert_eq!(parse_ms("data-delay", Some("150"), 0.0), Ok(150.0));
        assert!(parse_ms("data-delay", Some("-5"), 0.0).is_err());
        assert!(parse_ms("data-delay", Some("soon"), 0.0).is_err());
    }
}

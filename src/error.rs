use std::time::{Duration, SystemTime};
use std::{error::Error, fmt, io::Error as IoError};

use http::StatusCode;
use serde_json::error::Error as JsonError;

/// Errors raised while sending a message. Every failure is surfaced to the
/// caller as the result of the send; the client never retries or logs and
/// forgets on its own.
#[derive(Debug)]
pub enum FcmError {
    /// The outbound message could not be encoded as JSON
    Serialization(JsonError),
    /// Building the request or executing it on the network failed, including
    /// expiry of the connect timeout
    Transport(String),
    /// The gateway answered with a non-200 status. Carries the status line
    /// and the raw body text, which is not assumed to be JSON
    Gateway { status: StatusCode, body: String },
    /// A 200 response body was not a valid gateway response document
    Decode(JsonError),
    /// The response body exceeded any size a gateway response can have
    ResponseTooLarge,
}

impl Error for FcmError {}

impl From<http::Error> for FcmError {
    fn from(err: http::Error) -> FcmError {
        FcmError::Transport(err.to_string())
    }
}

impl From<IoError> for FcmError {
    fn from(err: IoError) -> FcmError {
        FcmError::Transport(err.to_string())
    }
}

#[cfg(any(feature = "hyper-client", feature = "hyper-rustls-client"))]
impl From<hyper::Error> for FcmError {
    fn from(err: hyper::Error) -> FcmError {
        FcmError::Transport(err.to_string())
    }
}

#[cfg(feature = "isahc-client")]
impl From<isahc::Error> for FcmError {
    fn from(err: isahc::Error) -> FcmError {
        FcmError::Transport(err.to_string())
    }
}

impl FcmError {
    pub fn short_description(&self) -> &'static str {
        match *self {
            FcmError::Serialization(_) => "serialization",
            FcmError::Transport(_) => "transport",
            FcmError::Gateway { .. } => "gateway",
            FcmError::Decode(_) => "decode",
            FcmError::ResponseTooLarge => "response_too_large",
        }
    }
}

impl fmt::Display for FcmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FcmError::Serialization(err) => write!(f, "could not encode the message: {}", err),
            FcmError::Transport(err) => write!(f, "transport error: {}", err),
            FcmError::Gateway { status, body } => write!(f, "{}: {}", status, body),
            FcmError::Decode(err) => write!(f, "could not parse response data: {}", err),
            FcmError::ResponseTooLarge => write!(f, "response body too large"),
        }
    }
}

/// Parser for the gateway's `Retry-After` header, which holds either an
/// integer number of seconds or an HTTP-date.
pub struct RetryAfter;

impl RetryAfter {
    /// Remaining wait time, `None` when the value parses as neither form.
    /// An HTTP-date is measured against the current wall clock, so the same
    /// value shrinks on repeated calls; dates in the past count as zero.
    pub fn from_str(header_value: &str) -> Option<Duration> {
        if let Ok(seconds) = header_value.parse::<u64>() {
            Some(Duration::from_secs(seconds))
        } else {
            chrono::DateTime::parse_from_rfc2822(header_value)
                .map(|date_time| {
                    let systime: SystemTime = date_time.into();

                    systime
                        .duration_since(SystemTime::now())
                        .unwrap_or_else(|_| Duration::new(0, 0))
                })
                .ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::error::RetryAfter;

    #[test]
    fn parses_seconds_from_an_integer_value() {
        assert_eq!(Some(Duration::from_secs(120)), RetryAfter::from_str("120"));
    }

    #[test]
    fn parses_a_future_http_date_as_the_remaining_wait() {
        let date = (chrono::Utc::now() + chrono::Duration::seconds(30)).to_rfc2822();
        let parsed = RetryAfter::from_str(&date).unwrap();

        assert!(parsed <= Duration::from_secs(30), "got {:?}", parsed);
        assert!(parsed > Duration::from_secs(25), "got {:?}", parsed);
    }

    #[test]
    fn clamps_a_past_http_date_to_zero() {
        let date = (chrono::Utc::now() - chrono::Duration::seconds(3600)).to_rfc2822();

        assert_eq!(Some(Duration::new(0, 0)), RetryAfter::from_str(&date));
    }

    #[test]
    fn rejects_a_value_in_neither_form() {
        assert_eq!(None, RetryAfter::from_str("after the weekend"));
        assert_eq!(None, RetryAfter::from_str("-3"));
    }
}

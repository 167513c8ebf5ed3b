//! Geocoding error type for retry classification.

use std::fmt;

/// Error returned by a single geocoding lookup.
/// Used so we can classify and decide retries before converting to anyhow.
#[derive(Debug)]
pub enum GeocodeError {
    /// The service signalled that the lookup timed out.
    TimedOut,
    /// Curl reported an error (timeout, connection, etc.).
    Transport(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Response body was not a search result we understand.
    Decode(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::TimedOut => write!(f, "geocoding service timed out"),
            GeocodeError::Transport(e) => write!(f, "{}", e),
            GeocodeError::Http(code) => write!(f, "HTTP {}", code),
            GeocodeError::Decode(msg) => write!(f, "invalid geocoding response: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeocodeError::Transport(e) => Some(e),
            GeocodeError::TimedOut | GeocodeError::Http(_) | GeocodeError::Decode(_) => None,
        }
    }
}

impl From<curl::Error> for GeocodeError {
    fn from(e: curl::Error) -> Self {
        GeocodeError::Transport(e)
    }
}

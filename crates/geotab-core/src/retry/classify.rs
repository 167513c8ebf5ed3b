//! Classify HTTP status and curl errors into retry policy error kinds.

use super::error::GeocodeError;
use super::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
///
/// 408 and 504 mean the request ran out of time somewhere on the way.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        408 | 504 => ErrorKind::Timeout,
        _ => ErrorKind::Other,
    }
}

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    ErrorKind::Other
}

/// Classify a geocoding error into an ErrorKind.
pub fn classify(e: &GeocodeError) -> ErrorKind {
    match e {
        GeocodeError::TimedOut => ErrorKind::Timeout,
        GeocodeError::Transport(ce) => classify_curl_error(ce),
        GeocodeError::Http(code) => classify_http_status(*code),
        GeocodeError::Decode(_) => ErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_408_and_504_are_timeouts() {
        assert_eq!(classify_http_status(408), ErrorKind::Timeout);
        assert_eq!(classify_http_status(504), ErrorKind::Timeout);
    }

    #[test]
    fn other_http_statuses_are_fatal() {
        assert_eq!(classify_http_status(400), ErrorKind::Other);
        assert_eq!(classify_http_status(403), ErrorKind::Other);
        assert_eq!(classify_http_status(429), ErrorKind::Other);
        assert_eq!(classify_http_status(500), ErrorKind::Other);
    }

    #[test]
    fn curl_operation_timeout_is_timeout() {
        // CURLE_OPERATION_TIMEDOUT
        let e = curl::Error::new(28);
        assert_eq!(classify_curl_error(&e), ErrorKind::Timeout);
        assert_eq!(classify(&GeocodeError::Transport(e)), ErrorKind::Timeout);
    }

    #[test]
    fn curl_connect_failure_is_fatal() {
        // CURLE_COULDNT_CONNECT
        let e = curl::Error::new(7);
        assert_eq!(classify(&GeocodeError::Transport(e)), ErrorKind::Other);
    }

    #[test]
    fn explicit_timeout_and_decode() {
        assert_eq!(classify(&GeocodeError::TimedOut), ErrorKind::Timeout);
        assert_eq!(
            classify(&GeocodeError::Decode("bad json".into())),
            ErrorKind::Other
        );
    }
}

use std::time::Duration;

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lookup timed out; worth another try.
    Timeout,
    /// Any other error (never retried).
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry; the error is fatal.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
    /// Attempts are used up: wait the given delay, then report the address as unresolved.
    GiveUpAfter(Duration),
}

/// Fixed-delay retry policy for timed-out lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Pause after each timed-out attempt.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Decide what to do after a failed attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). The pause follows every
    /// timed-out attempt, the last one included.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Timeout if attempt >= self.max_attempts => {
                RetryDecision::GiveUpAfter(self.retry_delay)
            }
            ErrorKind::Timeout => RetryDecision::RetryAfter(self.retry_delay),
        }
    }
}

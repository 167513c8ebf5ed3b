//! Single-address resolution with timeout retries.
//!
//! Each lookup is sorted into an [`AttemptOutcome`]. Only `TimedOut` loops;
//! `NotFound` is a normal answer and `Failed` goes straight back to the
//! caller.

use crate::clock::Sleeper;
use crate::geocoder::{Geocoder, Location};
use crate::retry::{classify, ErrorKind, GeocodeError, RetryDecision, RetryPolicy};

/// Result of one lookup against the service.
#[derive(Debug)]
pub enum AttemptOutcome {
    Found(Location),
    NotFound,
    /// Timed out; the policy decides whether to try again.
    TimedOut(GeocodeError),
    /// Any other failure; never retried.
    Failed(GeocodeError),
}

impl From<Result<Option<Location>, GeocodeError>> for AttemptOutcome {
    fn from(r: Result<Option<Location>, GeocodeError>) -> Self {
        match r {
            Ok(Some(loc)) => AttemptOutcome::Found(loc),
            Ok(None) => AttemptOutcome::NotFound,
            Err(e) => match classify(&e) {
                ErrorKind::Timeout => AttemptOutcome::TimedOut(e),
                ErrorKind::Other => AttemptOutcome::Failed(e),
            },
        }
    }
}

pub struct AddressResolver<G, S> {
    geocoder: G,
    sleeper: S,
    policy: RetryPolicy,
}

impl<G: Geocoder, S: Sleeper> AddressResolver<G, S> {
    pub fn new(geocoder: G, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            geocoder,
            sleeper,
            policy,
        }
    }

    pub(crate) fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Resolve one address.
    ///
    /// Returns `Ok(None)` when the service finds nothing or every attempt
    /// timed out, and `Err` for any failure that is not a timeout.
    pub fn resolve(&self, query: &str) -> Result<Option<Location>, GeocodeError> {
        let mut attempt = 1u32;
        while attempt <= self.policy.max_attempts {
            let outcome = AttemptOutcome::from(self.geocoder.geocode(query));
            let (e, kind) = match outcome {
                AttemptOutcome::Found(loc) => return Ok(Some(loc)),
                AttemptOutcome::NotFound => {
                    tracing::info!(query, "no location found");
                    return Ok(None);
                }
                AttemptOutcome::TimedOut(e) => (e, ErrorKind::Timeout),
                AttemptOutcome::Failed(e) => (e, ErrorKind::Other),
            };
            match self.policy.decide(attempt, kind) {
                RetryDecision::NoRetry => {
                    tracing::error!(query, error = %e, "geocoding failed");
                    return Err(e);
                }
                RetryDecision::RetryAfter(d) => {
                    tracing::warn!(
                        query,
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        "lookup timed out, retrying in {:?}",
                        d
                    );
                    self.sleeper.sleep(d);
                }
                RetryDecision::GiveUpAfter(d) => {
                    tracing::warn!(query, attempt, "lookup timed out, giving up");
                    self.sleeper.sleep(d);
                    return Ok(None);
                }
            }
            attempt += 1;
        }
        Ok(None)
    }
}

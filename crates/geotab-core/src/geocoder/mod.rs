//! Geocoding service access.
//!
//! [`Geocoder`] is the single operation the resolver needs: turn one query
//! string into a location, nothing, or an error the retry policy can
//! classify. [`NominatimClient`] talks to a Nominatim-compatible `/search`
//! endpoint over libcurl.

mod nominatim;
mod parse;
#[cfg(test)]
pub(crate) mod stub;

pub use nominatim::NominatimClient;
pub use parse::parse_search_response;

use crate::retry::GeocodeError;
use serde::{Deserialize, Serialize};

/// A resolved coordinate pair. No range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

pub trait Geocoder {
    /// Look up `query` once. `Ok(None)` means the service answered but found nothing.
    fn geocode(&self, query: &str) -> Result<Option<Location>, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> Result<Option<Location>, GeocodeError> {
        (**self).geocode(query)
    }
}

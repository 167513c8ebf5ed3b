//! Nominatim search client.
//!
//! Uses one curl `Easy` handle for the whole run so the connection is
//! reused between rows. The handle carries no per-address state: each call
//! sets the URL, performs a GET, and reads the body.

use super::{parse, Geocoder, Location};
use crate::config::GeocoderConfig;
use crate::retry::GeocodeError;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fmt;
use url::Url;

pub struct NominatimClient {
    endpoint: Url,
    easy: RefCell<curl::easy::Easy>,
}

impl fmt::Debug for NominatimClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NominatimClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl NominatimClient {
    pub fn from_config(cfg: &GeocoderConfig) -> Result<Self> {
        let endpoint = Url::parse(&cfg.endpoint)
            .with_context(|| format!("invalid geocoder endpoint {:?}", cfg.endpoint))?;
        let timeout = cfg.timeout()?;

        let mut easy = curl::easy::Easy::new();
        easy.useragent(&cfg.user_agent)?;
        easy.follow_location(true)?;
        easy.timeout(timeout)?;
        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        tracing::debug!(
            endpoint = %endpoint,
            user_agent = %cfg.user_agent,
            ?timeout,
            "nominatim client ready"
        );

        Ok(Self {
            endpoint,
            easy: RefCell::new(easy),
        })
    }

    /// Full search URL for one query (single best hit, JSON v2 format).
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        url
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, query: &str) -> Result<Option<Location>, GeocodeError> {
        let url = self.search_url(query);
        let mut body: Vec<u8> = Vec::new();

        let mut easy = self.easy.borrow_mut();
        easy.url(url.as_str())?;
        easy.get(true)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(GeocodeError::Http(code));
        }

        parse::parse_search_response(&body)
    }
}

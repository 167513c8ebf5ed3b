//! Address rows and the composite query string built from them.

/// One input row's address fields. `None` means the cell was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl AddressRecord {
    pub fn new(address: &str, city: &str, state: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
        }
    }

    /// `"{address}, {city}, {state}, {country}"`, with missing fields left as empty segments.
    ///
    /// Fields are used verbatim; no trimming or normalization.
    pub fn full_address(&self, country: &str) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address.as_deref().unwrap_or(""),
            self.city.as_deref().unwrap_or(""),
            self.state.as_deref().unwrap_or(""),
            country
        )
    }
}

//! Parse Nominatim search responses.

use super::Location;
use crate::retry::GeocodeError;
use serde_json::Value;

/// Parse a `format=jsonv2` search body: a JSON array of hits, best first.
///
/// Only the first hit is used. Nominatim sends `lat`/`lon` as strings;
/// plain numbers are accepted as well.
pub fn parse_search_response(body: &[u8]) -> Result<Option<Location>, GeocodeError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    let hits = value
        .as_array()
        .ok_or_else(|| GeocodeError::Decode("expected a JSON array".to_string()))?;
    let Some(first) = hits.first() else {
        return Ok(None);
    };
    let latitude = coordinate(first, "lat")?;
    let longitude = coordinate(first, "lon")?;
    Ok(Some(Location::new(latitude, longitude)))
}

fn coordinate(hit: &Value, field: &str) -> Result<f64, GeocodeError> {
    match hit.get(field) {
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| GeocodeError::Decode(format!("{field} is not a number: {s:?}"))),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| GeocodeError::Decode(format!("{field} is out of range"))),
        Some(other) => Err(GeocodeError::Decode(format!(
            "{field} has unexpected type: {other}"
        ))),
        None => Err(GeocodeError::Decode(format!("hit without {field}"))),
    }
}

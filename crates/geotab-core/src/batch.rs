//! Batch driver: geocode every row of a table, one request at a time.
//!
//! Rows are processed strictly in order. After every row the driver pauses
//! for the inter-request delay, on top of any retry pauses the resolver
//! took. An unresolved row is recorded as `None`; a fatal resolver error
//! stops the batch at that row.

use crate::address::AddressRecord;
use crate::clock::Sleeper;
use crate::config::ColumnsConfig;
use crate::geocoder::{Geocoder, Location};
use crate::resolver::AddressResolver;
use crate::retry::GeocodeError;
use crate::table;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

/// Pacing and query settings for one batch run.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    /// Pause after every row.
    pub inter_request_delay: Duration,
    /// Last segment of every composite address.
    pub country: String,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            inter_request_delay: Duration::from_secs(1),
            country: "USA".to_string(),
        }
    }
}

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub found: usize,
    pub missing: usize,
}

/// Per-row results, in input order, plus the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub locations: Vec<Option<Location>>,
    pub summary: BatchSummary,
}

pub struct BatchDriver<'r, G, S> {
    resolver: &'r AddressResolver<G, S>,
    settings: BatchSettings,
}

impl<'r, G: Geocoder, S: Sleeper> BatchDriver<'r, G, S> {
    /// The driver paces rows with the resolver's own sleeper.
    pub fn new(resolver: &'r AddressResolver<G, S>, settings: BatchSettings) -> Self {
        Self { resolver, settings }
    }

    pub fn process(&self, records: &[AddressRecord]) -> Result<BatchOutcome, GeocodeError> {
        let total = records.len();
        let mut locations = Vec::with_capacity(total);
        let mut summary = BatchSummary {
            rows: total,
            ..BatchSummary::default()
        };

        for (i, record) in records.iter().enumerate() {
            let query = record.full_address(&self.settings.country);
            tracing::debug!(row = i + 1, total, query = %query, "geocoding");

            let location = self.resolver.resolve(&query)?;
            match location {
                Some(loc) => {
                    summary.found += 1;
                    tracing::debug!(
                        row = i + 1,
                        latitude = loc.latitude,
                        longitude = loc.longitude,
                        "resolved"
                    );
                }
                None => summary.missing += 1,
            }
            locations.push(location);

            self.resolver.sleeper().sleep(self.settings.inter_request_delay);
        }

        tracing::info!(
            rows = summary.rows,
            found = summary.found,
            missing = summary.missing,
            "batch finished"
        );
        Ok(BatchOutcome { locations, summary })
    }

    /// Read `input`, geocode every row, and write `output`.
    ///
    /// The output file is only created once every row has been processed.
    pub fn run_file(
        &self,
        input: &Path,
        output: &Path,
        columns: &ColumnsConfig,
    ) -> Result<BatchSummary> {
        let table = table::read_path(input, columns)
            .with_context(|| format!("failed to read {}", input.display()))?;
        tracing::info!(input = %input.display(), rows = table.len(), "geocoding table");

        let outcome = self
            .process(&table.address_records())
            .context("geocoding aborted")?;

        table::write_path(output, &table, &outcome.locations, columns)
            .with_context(|| format!("failed to write {}", output.display()))?;
        tracing::info!(output = %output.display(), "wrote geocoded table");

        Ok(outcome.summary)
    }
}

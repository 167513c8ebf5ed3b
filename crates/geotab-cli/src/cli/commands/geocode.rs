//! `geotab geocode` – add coordinates to every row of a CSV file.

use anyhow::Result;
use geotab_core::batch::{BatchDriver, BatchSettings};
use geotab_core::clock::ThreadSleeper;
use geotab_core::config::GeotabConfig;
use geotab_core::geocoder::NominatimClient;
use geotab_core::resolver::AddressResolver;
use std::path::{Path, PathBuf};

pub fn run_geocode(cfg: &GeotabConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    let client = NominatimClient::from_config(&cfg.geocoder)?;
    let resolver = AddressResolver::new(client, ThreadSleeper, cfg.retry_policy()?);
    let settings = BatchSettings {
        inter_request_delay: cfg.inter_request_delay()?,
        country: cfg.geocoder.country.clone(),
    };

    let summary =
        BatchDriver::new(&resolver, settings).run_file(input, &output, &cfg.columns())?;

    println!(
        "Wrote geocoded CSV with latitude/longitude to {} ({}/{} resolved).",
        output.display(),
        summary.found,
        summary.rows
    );
    Ok(())
}

/// `<dir>/<stem>_geocoded.csv` for `<dir>/<stem>.<ext>`.
pub(crate) fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_geocoded.csv"))
}

//! `geotab lookup` – resolve one address with the configured retry policy.

use anyhow::{Context, Result};
use geotab_core::clock::ThreadSleeper;
use geotab_core::config::GeotabConfig;
use geotab_core::geocoder::NominatimClient;
use geotab_core::resolver::AddressResolver;

pub fn run_lookup(cfg: &GeotabConfig, address: &str) -> Result<()> {
    let client = NominatimClient::from_config(&cfg.geocoder)?;
    let resolver = AddressResolver::new(client, ThreadSleeper, cfg.retry_policy()?);
    let location = resolver
        .resolve(address)
        .with_context(|| format!("lookup of {address:?} failed"))?;
    match location {
        Some(loc) => println!("{},{}", loc.latitude, loc.longitude),
        None => println!("not found"),
    }
    Ok(())
}

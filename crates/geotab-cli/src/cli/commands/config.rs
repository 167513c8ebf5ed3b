//! `geotab config` – show where the config lives and what is in effect.

use anyhow::Result;
use geotab_core::config::{self, GeotabConfig};
use std::path::Path;

pub fn run_config(cfg: &GeotabConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());

    let mut effective = cfg.clone();
    effective.retry.get_or_insert_with(Default::default);
    effective.batch.get_or_insert_with(Default::default);
    effective.columns.get_or_insert_with(Default::default);
    print!("{}", toml::to_string_pretty(&effective)?);
    Ok(())
}

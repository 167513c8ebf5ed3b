//! CLI command handlers. Each command is in its own file.

mod config;
mod geocode;
mod lookup;

pub use config::run_config;
pub use geocode::run_geocode;
pub use lookup::run_lookup;

pub mod config;
pub mod logging;

pub mod address;
pub mod batch;
pub mod clock;
pub mod geocoder;
pub mod resolver;
pub mod retry;
pub mod table;

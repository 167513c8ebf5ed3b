//! Tests for the geocode subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_geocode() {
    match parse(&["geotab", "geocode", "oregonMachines.csv"]) {
        CliCommand::Geocode {
            input,
            output,
            overrides,
        } => {
            assert_eq!(input, Path::new("oregonMachines.csv"));
            assert!(output.is_none());
            assert!(overrides.delay.is_none());
            assert!(overrides.retries.is_none());
        }
        _ => panic!("expected Geocode"),
    }
}

#[test]
fn cli_parse_geocode_output_and_overrides() {
    match parse(&[
        "geotab",
        "geocode",
        "in.csv",
        "-o",
        "out.csv",
        "--delay",
        "2",
        "--retries",
        "5",
        "--retry-delay",
        "0.5",
        "--timeout",
        "10",
        "--user-agent",
        "oregon-geocoder",
        "--endpoint",
        "http://localhost:8080/search",
    ]) {
        CliCommand::Geocode {
            input,
            output,
            overrides,
        } => {
            assert_eq!(input, Path::new("in.csv"));
            assert_eq!(output.as_deref(), Some(Path::new("out.csv")));
            assert_eq!(overrides.delay, Some(2.0));
            assert_eq!(overrides.retries, Some(5));
            assert_eq!(overrides.retry_delay, Some(0.5));
            assert_eq!(overrides.timeout, Some(10.0));
            assert_eq!(overrides.user_agent.as_deref(), Some("oregon-geocoder"));
            assert_eq!(
                overrides.endpoint.as_deref(),
                Some("http://localhost:8080/search")
            );
        }
        _ => panic!("expected Geocode with overrides"),
    }
}

#[test]
fn cli_parse_geocode_requires_input() {
    assert!(Cli::try_parse_from(["geotab", "geocode"]).is_err());
}

#[test]
fn cli_parse_geocode_rejects_bad_retries() {
    assert!(Cli::try_parse_from(["geotab", "geocode", "in.csv", "--retries", "-1"]).is_err());
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["geotab", "geocode", "in.csv", "--config", "/tmp/g.toml"])
        .unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/g.toml")));
}

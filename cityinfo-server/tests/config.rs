//! Configuration parsing tests.

use std::iter;
use std::time::Duration;

use clap::Parser;

use cityinfo_server::Config;

fn parse(args: &[&str]) -> Config {
    Config::try_parse_from(iter::once("city-info").chain(args.iter().copied()))
        .expect("arguments parse")
}

#[test]
fn flags_override_everything() {
    let config = parse(&[
        "--ows-api-key",
        "abc123",
        "--bind",
        "0.0.0.0:9000",
        "--weather-url",
        "http://weather.test",
        "--wiki-url",
        "http://wiki.test/api.php",
        "--timeout-secs",
        "3",
    ]);

    assert_eq!(config.ows_api_key, "abc123");
    assert_eq!(config.bind, "0.0.0.0:9000");
    assert_eq!(config.weather_url, "http://weather.test");
    assert_eq!(config.wiki_url, "http://wiki.test/api.php");
    assert_eq!(config.timeout(), Duration::from_secs(3));
    assert!(config.validate().is_ok());
}

#[test]
fn blank_api_key_is_rejected() {
    let config = parse(&["--ows-api-key", "  ", "--timeout-secs", "5"]);

    let err = config.validate().expect_err("blank key");

    assert!(err.to_string().contains("OWS_API_KEY"));
}

#[test]
fn zero_timeout_is_rejected() {
    let config = parse(&["--ows-api-key", "abc123", "--timeout-secs", "0"]);

    assert!(config.validate().is_err());
}

#[test]
fn service_builds_from_valid_config() {
    let config = parse(&["--ows-api-key", "abc123", "--timeout-secs", "5"]);

    assert!(cityinfo_server::build_service(&config).is_ok());
}

// Tests for host configuration loading

use serial_bridge::application::config::{Config, ConfigLoader};
use serial_bridge::common::constants::{DEFAULT_PORT, DEFAULT_TICK_INTERVAL_MS};

#[test]
fn test_defaults_when_fields_omitted() {
    let config = ConfigLoader::load_from_str("").unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
}

#[test]
fn test_explicit_values_override_defaults() {
    let toml = r#"
        port = 8123
        tick_interval_ms = 33
    "#;

    let config = ConfigLoader::load_from_str(toml).unwrap();
    assert_eq!(config.port, 8123);
    assert_eq!(config.tick_interval_ms, 33);
}

#[test]
fn test_malformed_toml_is_rejected() {
    assert!(ConfigLoader::load_from_str("port = \"not a number\"").is_err());
}

#[test]
fn test_port_zero_is_rejected() {
    assert!(ConfigLoader::load_from_str("port = 0").is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(ConfigLoader::load("/nonexistent/serial-bridge.toml").is_err());
}

#[test]
fn test_default_struct_matches_loaded_defaults() {
    let loaded = ConfigLoader::load_from_str("").unwrap();
    let default = Config::default();
    assert_eq!(loaded.port, default.port);
    assert_eq!(loaded.tick_interval_ms, default.tick_interval_ms);
}

use crate::application::config::models::Config;
use crate::common::error::{BridgeError, Result};

/// Validate configuration for correctness
pub fn validate_config(config: &Config) -> Result<()> {
    if config.port == 0 {
        return Err(BridgeError::ConfigError(
            "port must be greater than 0".to_string(),
        ));
    }

    if config.tick_interval_ms == 0 {
        return Err(BridgeError::ConfigError(
            "tick_interval_ms must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_port_zero() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_tick_interval() {
        let config = Config {
            tick_interval_ms: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}

use crate::common::constants::{DEFAULT_PORT, DEFAULT_TICK_INTERVAL_MS};
use serde::{Deserialize, Serialize};

/// Host application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// TCP port the bridge listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Polling cadence of the emulation loop in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

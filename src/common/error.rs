use std::fmt;

#[derive(Debug)]
pub enum BridgeError {
    IoError(std::io::Error),
    ConfigError(String),
    NetworkError(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::IoError(e) => write!(f, "IO error: {}", e),
            BridgeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            BridgeError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

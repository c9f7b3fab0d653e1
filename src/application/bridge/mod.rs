pub mod serial_bridge;
pub mod status;

pub use serial_bridge::SerialBridge;
pub use status::ConnectionStatus;

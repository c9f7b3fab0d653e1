pub const SERIAL_BUFFER_LENGTH: usize = 1024; // 1KB, matches the emulated UART FIFO

/// A single pending connection is enough for a one-wire serial link.
pub const LISTEN_BACKLOG: i32 = 1;

pub const DEFAULT_PORT: u16 = 9999;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

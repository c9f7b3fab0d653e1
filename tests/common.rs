// Common test utilities to reduce code duplication

use std::net::TcpStream;
use std::thread;
use std::time::{Duration, Instant};

use serial_bridge::application::bridge::{ConnectionStatus, SerialBridge};

pub const POLL_TIMEOUT: Duration = Duration::from_secs(2);

/// Connect a test client to the bridge's port
pub fn connect_client(port: u16) -> TcpStream {
    TcpStream::connect(("127.0.0.1", port)).expect("Failed to connect to bridge")
}

/// Poll the bridge until it reports the given status or the timeout expires
#[allow(dead_code)] // Used across the integration test binaries
pub fn poll_until_status(bridge: &mut SerialBridge, status: ConnectionStatus) -> bool {
    let deadline = Instant::now() + POLL_TIMEOUT;
    while Instant::now() < deadline {
        bridge.poll();
        if bridge.status() == status {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    bridge.status() == status
}

/// Poll the bridge until it yields data, copying the bytes out.
/// Returns an empty Vec if nothing arrived before the timeout.
#[allow(dead_code)]
pub fn poll_for_data(bridge: &mut SerialBridge) -> Vec<u8> {
    let deadline = Instant::now() + POLL_TIMEOUT;
    while Instant::now() < deadline {
        let data = bridge.poll();
        if !data.is_empty() {
            return data.to_vec();
        }
        thread::sleep(Duration::from_millis(5));
    }
    Vec::new()
}

/// Poll the bridge until `expected` bytes have been collected in total
#[allow(dead_code)]
pub fn poll_for_exact(bridge: &mut SerialBridge, expected: usize) -> Vec<u8> {
    let deadline = Instant::now() + POLL_TIMEOUT;
    let mut collected = Vec::with_capacity(expected);
    while Instant::now() < deadline && collected.len() < expected {
        let data = bridge.poll();
        if data.is_empty() {
            thread::sleep(Duration::from_millis(5));
            continue;
        }
        assert!(data.len() <= 1024, "poll returned more than one buffer");
        collected.extend_from_slice(data);
    }
    collected
}

use crate::application::bridge::status::ConnectionStatus;
use crate::common::constants::SERIAL_BUFFER_LENGTH;
use crate::common::logger::Logger;
use crate::core::net::socket::{ListeningSocket, PeerSocket};
use std::io;

/// Emulates the receive side of a hardware serial link over TCP.
///
/// The host emulator polls the bridge once per frame; each poll either
/// accepts a pending client or drains up to one buffer of bytes from the
/// connected peer. No call ever blocks, so the bridge is safe to drive
/// from the emulation thread at frame cadence.
pub struct SerialBridge {
    status: ConnectionStatus,
    listener: Option<ListeningSocket>,
    peer: Option<PeerSocket>,
    buffer: [u8; SERIAL_BUFFER_LENGTH],
}

impl SerialBridge {
    pub fn new() -> Self {
        Self {
            status: ConnectionStatus::Stopped,
            listener: None,
            peer: None,
            buffer: [0; SERIAL_BUFFER_LENGTH],
        }
    }

    /// Bind and listen on `port`. A bridge that is already running is
    /// stopped first, so the previous sockets are never leaked. Failure
    /// is observable through `status`, not a return value.
    pub fn start(&mut self, port: u16) {
        self.stop();

        match ListeningSocket::bind(port) {
            Ok(listener) => {
                Logger::info(&format!("serial bridge: listening on port {}", port));
                self.listener = Some(listener);
                self.status = ConnectionStatus::WaitingForConnection;
            }
            Err(e) => {
                Logger::error(&format!(
                    "serial bridge: start on port {} failed: {}",
                    port, e
                ));
                self.status = ConnectionStatus::Error;
            }
        }
    }

    /// Release whatever sockets are open and return to `Stopped`.
    /// Stopping while connected tears down the listener as well; calling
    /// this repeatedly is harmless.
    pub fn stop(&mut self) {
        self.peer = None;
        self.listener = None;
        self.status = ConnectionStatus::Stopped;
    }

    pub fn is_started(&self) -> bool {
        matches!(
            self.status,
            ConnectionStatus::WaitingForConnection | ConnectionStatus::Connected
        )
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Per-tick entry point. Returns the bytes received on this tick,
    /// empty when nothing arrived. The returned slice points into the
    /// internal buffer and is overwritten by the next call.
    pub fn poll(&mut self) -> &[u8] {
        match self.status {
            ConnectionStatus::Stopped | ConnectionStatus::Error => &[],
            ConnectionStatus::WaitingForConnection => {
                self.accept_pending();
                // Data from a freshly accepted peer arrives on a later poll.
                &[]
            }
            ConnectionStatus::Connected => self.read_pending(),
        }
    }

    fn accept_pending(&mut self) {
        let accepted = match self.listener.as_ref() {
            Some(listener) => listener.accept(),
            None => return,
        };

        match accepted {
            Ok(Some(peer)) => {
                Logger::info("serial bridge: client connected");
                self.peer = Some(peer);
                self.status = ConnectionStatus::Connected;
            }
            Ok(None) => {} // nothing waiting this tick
            Err(e) => {
                // Not escalated to Error; the accept is retried next poll.
                Logger::error(&format!("serial bridge: {}", e));
            }
        }
    }

    fn read_pending(&mut self) -> &[u8] {
        let received = match self.peer.as_ref() {
            Some(peer) => peer.recv(&mut self.buffer),
            None => return &[],
        };

        match received {
            Ok(0) => {
                // Orderly close; go back to listening for the next client.
                Logger::info("serial bridge: client disconnected");
                self.peer = None;
                self.status = ConnectionStatus::WaitingForConnection;
                &[]
            }
            Ok(count) => &self.buffer[..count],
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => &[],
            Err(e) => {
                // Not escalated to Error; the read is retried next poll.
                Logger::error(&format!("serial bridge: error reading from socket: {}", e));
                &[]
            }
        }
    }
}

impl Default for SerialBridge {
    fn default() -> Self {
        Self::new()
    }
}

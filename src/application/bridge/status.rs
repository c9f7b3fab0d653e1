/// Lifecycle of the bridge's TCP side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No sockets held.
    Stopped,
    /// The last start attempt failed; `stop` resets to `Stopped`.
    Error,
    /// Listening, no peer attached yet.
    WaitingForConnection,
    /// A peer is attached and polls read from it.
    Connected,
}

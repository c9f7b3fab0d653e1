pub mod fd;
pub mod socket;

pub use socket::{ListeningSocket, PeerSocket};

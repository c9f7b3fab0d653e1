use crate::common::error::{BridgeError, Result};
use std::os::unix::io::{AsRawFd, RawFd};

/// Owned socket descriptor, closed on drop.
pub struct FileDescriptor {
    fd: RawFd,
}

impl FileDescriptor {
    pub fn from_raw(fd: RawFd) -> Self {
        Self { fd }
    }

    pub fn set_non_blocking(&self) -> Result<()> {
        unsafe {
            let flags = libc::fcntl(self.fd, libc::F_GETFL);
            if flags < 0 {
                return Err(BridgeError::NetworkError(
                    "Failed to get socket flags".to_string(),
                ));
            }

            if libc::fcntl(self.fd, libc::F_SETFL, flags | libc::O_NONBLOCK) < 0 {
                return Err(BridgeError::NetworkError(
                    "Failed to set non-blocking mode".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl AsRawFd for FileDescriptor {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for FileDescriptor {
    fn drop(&mut self) {
        if self.fd >= 0 {
            unsafe {
                libc::close(self.fd);
            }
        }
    }
}

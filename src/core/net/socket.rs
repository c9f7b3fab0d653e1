use crate::common::constants::LISTEN_BACKLOG;
use crate::common::error::{BridgeError, Result};
use crate::core::net::fd::FileDescriptor;
use std::io;
use std::mem;
use std::os::unix::io::{AsRawFd, RawFd};
use std::ptr;

/// Non-blocking listening socket bound to a port on all interfaces.
pub struct ListeningSocket {
    fd: FileDescriptor,
    port: u16,
}

impl ListeningSocket {
    /// Create, configure and bind the socket. Any step failing releases
    /// whatever was already created before the error is returned.
    pub fn bind(port: u16) -> Result<Self> {
        let raw = unsafe { libc::socket(libc::AF_INET, libc::SOCK_STREAM, libc::IPPROTO_TCP) };
        if raw < 0 {
            return Err(BridgeError::NetworkError(format!(
                "socket() failed: {}",
                io::Error::last_os_error()
            )));
        }
        let fd = FileDescriptor::from_raw(raw);

        let reuse: libc::c_int = 1;
        let result = unsafe {
            libc::setsockopt(
                fd.as_raw_fd(),
                libc::SOL_SOCKET,
                libc::SO_REUSEADDR,
                &reuse as *const libc::c_int as *const libc::c_void,
                mem::size_of::<libc::c_int>() as libc::socklen_t,
            )
        };
        if result < 0 {
            return Err(BridgeError::NetworkError(format!(
                "setsockopt(SO_REUSEADDR) failed: {}",
                io::Error::last_os_error()
            )));
        }

        fd.set_non_blocking()?;

        let mut addr: libc::sockaddr_in = unsafe { mem::zeroed() };
        addr.sin_family = libc::AF_INET as libc::sa_family_t;
        addr.sin_port = port.to_be();
        addr.sin_addr.s_addr = libc::INADDR_ANY.to_be();

        let result = unsafe {
            libc::bind(
                fd.as_raw_fd(),
                &addr as *const libc::sockaddr_in as *const libc::sockaddr,
                mem::size_of::<libc::sockaddr_in>() as libc::socklen_t,
            )
        };
        if result < 0 {
            return Err(BridgeError::NetworkError(format!(
                "bind() to port {} failed: {}",
                port,
                io::Error::last_os_error()
            )));
        }

        let result = unsafe { libc::listen(fd.as_raw_fd(), LISTEN_BACKLOG) };
        if result < 0 {
            return Err(BridgeError::NetworkError(format!(
                "listen() failed: {}",
                io::Error::last_os_error()
            )));
        }

        Ok(Self { fd, port })
    }

    /// Accept a pending peer connection (non-blocking). `Ok(None)` means
    /// nothing was waiting.
    pub fn accept(&self) -> Result<Option<PeerSocket>> {
        let raw = unsafe { libc::accept(self.fd.as_raw_fd(), ptr::null_mut(), ptr::null_mut()) };
        if raw < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::WouldBlock {
                return Ok(None);
            }
            return Err(BridgeError::NetworkError(format!(
                "accept() failed: {}",
                err
            )));
        }

        let peer = PeerSocket::from_raw(raw)?;
        Ok(Some(peer))
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn as_raw_fd(&self) -> i32 {
        self.fd.as_raw_fd()
    }
}

/// The single accepted peer connection.
pub struct PeerSocket {
    fd: FileDescriptor,
}

impl PeerSocket {
    pub fn from_raw(raw: RawFd) -> Result<Self> {
        let fd = FileDescriptor::from_raw(raw);
        // Accepted sockets do not inherit O_NONBLOCK on Linux.
        fd.set_non_blocking()?;
        Ok(Self { fd })
    }

    /// One non-blocking read. Returns 0 when the peer closed the
    /// connection; a WouldBlock error means no data was waiting.
    pub fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        let count = unsafe {
            libc::recv(
                self.fd.as_raw_fd(),
                buf.as_mut_ptr() as *mut libc::c_void,
                buf.len(),
                0,
            )
        };
        if count < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(count as usize)
    }

    pub fn as_raw_fd(&self) -> i32 {
        self.fd.as_raw_fd()
    }
}

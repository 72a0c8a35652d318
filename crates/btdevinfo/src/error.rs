//! Error types for the btdevinfo library
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Errors that can occur when querying a local adapter
#[derive(Error, Debug)]
pub enum HciError {
    #[error("Failed to open HCI socket: {0}")]
    SocketError(#[from] std::io::Error),

    #[error("Failed to bind to HCI device: {0}")]
    BindError(std::io::Error),

    #[error("Device ioctl failed: {0}")]
    IoctlError(std::io::Error),

    #[error("Failed to send HCI command: {0}")]
    SendError(std::io::Error),

    #[error("Failed to receive HCI event: {0}")]
    ReceiveError(std::io::Error),

    #[error("Controller returned error status 0x{0:02x}")]
    CommandFailed(u8),

    #[error("Invalid HCI packet format")]
    InvalidPacketFormat,
}

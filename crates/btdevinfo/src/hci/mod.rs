//! Bluetooth HCI (Host Controller Interface) binding
//!
//! This module provides the Linux-specific binding used to enumerate
//! local adapters and query their device and version information.

pub mod constants;
pub mod dev;
pub mod packet;
pub mod socket;

#[cfg(test)]
mod tests;

pub use dev::{AdapterSnapshot, BdAddr, DeviceStats, LocalVersion};
pub use packet::{HciCommand, HciEvent};
pub use socket::{enumerate_up_adapters, HciSocket};

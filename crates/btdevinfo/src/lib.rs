//! btdevinfo - driver-level information about local Bluetooth adapters
//!
//! This library queries the Bluetooth HCI (Host Controller Interface)
//! adapters registered with the Linux kernel and renders their identity,
//! capability and statistics fields in human-readable form. It is strictly
//! read-only: the only traffic it generates is the device-info ioctls and
//! a single Read Local Version Information command per adapter.
//!
//! The decoding core (capability tables, bit decoder, field formatter) is
//! pure and independent of the HCI binding, so it can be exercised with
//! synthetic snapshots on machines without Bluetooth hardware.

pub mod company;
pub mod decode;
pub mod error;
pub mod features;
pub mod format;
pub mod hci;
pub mod report;

// Re-export common types for convenience
pub use company::{company_name, lmp_version_string};
pub use decode::{decode_bytes, decode_word, DecodedField};
pub use error::HciError;
pub use format::DisplayMode;
pub use hci::{enumerate_up_adapters, AdapterSnapshot, BdAddr, DeviceStats, HciSocket, LocalVersion};
pub use report::{render_report, report, report_all};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_hci_socket() {
        // This test will only pass if run with sufficient privileges
        // and if a Bluetooth adapter is available
        let result = HciSocket::open(0);

        // We don't assert here because the test might fail in environments
        // without Bluetooth hardware or sufficient privileges
        if let Ok(socket) = result {
            use std::os::unix::io::AsRawFd;
            assert!(socket.as_raw_fd() > 0);
        }
    }
}

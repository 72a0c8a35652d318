//! Device-info structures shared with the kernel
//!
//! The `raw` structs mirror the kernel's `hci_dev_info` family byte for
//! byte so they can be handed to `HCIGETDEVINFO`/`HCIGETDEVLIST` directly.
//! Everything the rest of the library touches is copied out into the safe
//! owned types below.

use std::fmt;

/// A Bluetooth device address, stored least-significant byte first the way
/// the kernel hands it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BdAddr {
    pub bytes: [u8; 6],
}

impl BdAddr {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.bytes[5],
            self.bytes[4],
            self.bytes[3],
            self.bytes[2],
            self.bytes[1],
            self.bytes[0]
        )
    }
}

/// Traffic counters the kernel keeps per adapter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    pub err_rx: u32,
    pub err_tx: u32,
    pub cmd_tx: u32,
    pub evt_rx: u32,
    pub acl_tx: u32,
    pub acl_rx: u32,
    pub sco_tx: u32,
    pub sco_rx: u32,
    pub byte_rx: u32,
    pub byte_tx: u32,
}

/// Everything `HCIGETDEVINFO` reports about one adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterSnapshot {
    pub dev_id: u16,
    pub name: String,
    pub bdaddr: BdAddr,
    pub flags: u32,
    pub dev_type: u8,
    pub features: [u8; 8],
    pub pkt_type: u32,
    pub link_policy: u32,
    pub link_mode: u32,
    pub acl_mtu: u16,
    pub acl_pkts: u16,
    pub sco_mtu: u16,
    pub sco_pkts: u16,
    pub stats: DeviceStats,
}

/// Local version information from the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalVersion {
    pub hci_ver: u8,
    pub hci_rev: u16,
    pub lmp_ver: u8,
    pub manufacturer: u16,
    pub lmp_subver: u16,
}

pub(crate) mod raw {
    use super::{AdapterSnapshot, BdAddr, DeviceStats};
    use crate::hci::constants::HCI_MAX_DEV;

    /// struct hci_dev_stats
    #[repr(C)]
    #[derive(Debug, Clone, Copy)]
    pub struct HciDevStats {
        pub err_rx: u32,
        pub err_tx: u32,
        pub cmd_tx: u32,
        pub evt_rx: u32,
        pub acl_tx: u32,
        pub acl_rx: u32,
        pub sco_tx: u32,
        pub sco_rx: u32,
        pub byte_rx: u32,
        pub byte_tx: u32,
    }

    /// struct hci_dev_info
    #[repr(C)]
    #[derive(Debug, Clone, Copy)]
    pub struct HciDevInfo {
        pub dev_id: u16,
        pub name: [u8; 8],
        pub bdaddr: [u8; 6],
        pub flags: u32,
        pub dev_type: u8,
        pub features: [u8; 8],
        pub pkt_type: u32,
        pub link_policy: u32,
        pub link_mode: u32,
        pub acl_mtu: u16,
        pub acl_pkts: u16,
        pub sco_mtu: u16,
        pub sco_pkts: u16,
        pub stat: HciDevStats,
    }

    /// struct hci_dev_req
    #[repr(C)]
    #[derive(Debug, Clone, Copy)]
    pub struct HciDevReq {
        pub dev_id: u16,
        pub dev_opt: u32,
    }

    /// struct hci_dev_list_req with its flexible array member sized to the
    /// kernel's device limit
    #[repr(C)]
    pub struct HciDevListReq {
        pub dev_num: u16,
        pub dev_req: [HciDevReq; HCI_MAX_DEV],
    }

    impl From<&HciDevInfo> for AdapterSnapshot {
        fn from(di: &HciDevInfo) -> Self {
            let name_len = di.name.iter().position(|&b| b == 0).unwrap_or(di.name.len());
            AdapterSnapshot {
                dev_id: di.dev_id,
                name: String::from_utf8_lossy(&di.name[..name_len]).into_owned(),
                bdaddr: BdAddr::new(di.bdaddr),
                flags: di.flags,
                dev_type: di.dev_type,
                features: di.features,
                pkt_type: di.pkt_type,
                link_policy: di.link_policy,
                link_mode: di.link_mode,
                acl_mtu: di.acl_mtu,
                acl_pkts: di.acl_pkts,
                sco_mtu: di.sco_mtu,
                sco_pkts: di.sco_pkts,
                stats: DeviceStats {
                    err_rx: di.stat.err_rx,
                    err_tx: di.stat.err_tx,
                    cmd_tx: di.stat.cmd_tx,
                    evt_rx: di.stat.evt_rx,
                    acl_tx: di.stat.acl_tx,
                    acl_rx: di.stat.acl_rx,
                    sco_tx: di.stat.sco_tx,
                    sco_rx: di.stat.sco_rx,
                    byte_rx: di.stat.byte_rx,
                    byte_tx: di.stat.byte_tx,
                },
            }
        }
    }
}

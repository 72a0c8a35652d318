//! Unit tests for HCI packet handling and device-info conversion

use super::constants::*;
use super::dev::raw::{HciDevInfo, HciDevStats};
use super::dev::{AdapterSnapshot, BdAddr};
use super::packet::*;

#[test]
fn test_read_local_version_serialization() {
    let command = HciCommand::ReadLocalVersion;
    let packet = command.to_packet();

    assert_eq!(packet[0], HCI_COMMAND_PKT);

    // Opcode: Read Local Version Information (0x1001)
    let opcode = u16::from_le_bytes([packet[1], packet[2]]);
    assert_eq!(opcode, 0x1001); // OGF_INFO_PARAM << 10 | OCF_READ_LOCAL_VERSION

    // Param length: 0
    assert_eq!(packet[3], 0);
    assert_eq!(packet.len(), 4);
}

#[test]
fn test_command_complete_parsing() {
    // Command Complete for Read Local Version Information
    let data = [
        EVT_CMD_COMPLETE, // Event code
        12,               // Parameter length
        1,                // Num_HCI_Command_Packets
        0x01,             // Command_Opcode (low byte)
        0x10,             // Command_Opcode (high byte)
        0x00,             // Status
        0x0B,             // HCI_Version
        0x11, 0x22,       // HCI_Revision
        0x0B,             // LMP_Version
        0x02, 0x00,       // Manufacturer_Name (Intel)
        0x34, 0x12,       // LMP_Subversion
    ];

    let event = HciEvent::parse(&data).unwrap();
    assert_eq!(event.event_code, EVT_CMD_COMPLETE);
    assert_eq!(event.parameter_total_length, 12);

    let command = HciCommand::ReadLocalVersion;
    assert!(event.is_command_complete(&command));
    assert_eq!(event.status(), 0x00);

    let params = event.return_parameters();
    assert_eq!(params[0], 0x0B); // hci_ver
    assert_eq!(u16::from_le_bytes([params[1], params[2]]), 0x2211); // hci_rev
    assert_eq!(params[3], 0x0B); // lmp_ver
    assert_eq!(u16::from_le_bytes([params[4], params[5]]), 2); // manufacturer
    assert_eq!(u16::from_le_bytes([params[6], params[7]]), 0x1234); // lmp_subver
}

#[test]
fn test_command_complete_rejects_other_opcodes() {
    let data = [
        EVT_CMD_COMPLETE,
        4,
        1,
        0x03, // Command_Opcode: Reset (0x0C03)
        0x0C,
        0x00,
    ];

    let event = HciEvent::parse(&data).unwrap();
    assert!(!event.is_command_complete(&HciCommand::ReadLocalVersion));
}

#[test]
fn test_event_parse_rejects_truncated_packets() {
    assert!(HciEvent::parse(&[EVT_CMD_COMPLETE]).is_none());
    // Claims 10 parameter bytes but carries 2
    assert!(HciEvent::parse(&[EVT_CMD_COMPLETE, 10, 1, 2]).is_none());
}

#[test]
fn test_bdaddr_display_reverses_bytes() {
    let addr = BdAddr::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    assert_eq!(addr.to_string(), "06:05:04:03:02:01");
}

#[test]
fn test_snapshot_from_raw_dev_info() {
    let mut di: HciDevInfo = unsafe { std::mem::zeroed() };
    di.dev_id = 1;
    di.name[..4].copy_from_slice(b"hci1");
    di.bdaddr = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
    di.flags = 0x0007;
    di.dev_type = 0x00;
    di.features[4] = 0x40;
    di.pkt_type = 0xcc18;
    di.link_policy = 0x000f;
    di.acl_mtu = 1021;
    di.acl_pkts = 8;
    di.stat = HciDevStats {
        err_rx: 1,
        err_tx: 2,
        cmd_tx: 3,
        evt_rx: 4,
        acl_tx: 5,
        acl_rx: 6,
        sco_tx: 7,
        sco_rx: 8,
        byte_rx: 9,
        byte_tx: 10,
    };

    let snapshot = AdapterSnapshot::from(&di);
    assert_eq!(snapshot.dev_id, 1);
    assert_eq!(snapshot.name, "hci1");
    assert_eq!(snapshot.bdaddr.to_string(), "FF:EE:DD:CC:BB:AA");
    assert_eq!(snapshot.flags, 0x0007);
    assert_eq!(snapshot.features[4], 0x40);
    assert_eq!(snapshot.acl_mtu, 1021);
    assert_eq!(snapshot.stats.byte_tx, 10);
}

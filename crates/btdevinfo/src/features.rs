//! Capability tables for the local adapter
//!
//! Each table is an ordered list of (label, selector) pairs describing one
//! decodable field of the kernel's device-info record. Definition order
//! follows the Bluetooth specification bit order and is preserved by the
//! decoder, so it is part of the output contract.

/// One entry of a single-word table. The selector is a mask tested with
/// bitwise AND against the raw 32-bit value.
#[derive(Debug, Clone, Copy)]
pub struct WordEntry {
    pub label: &'static str,
    pub mask: u32,
}

/// One entry of the LMP feature table. The selector carries the index of
/// the feature byte it applies to alongside the mask within that byte.
#[derive(Debug, Clone, Copy)]
pub struct ByteEntry {
    pub label: &'static str,
    pub byte: usize,
    pub mask: u8,
}

const fn bit(n: u32) -> u32 {
    1 << n
}

const fn flag(label: &'static str, n: u32) -> WordEntry {
    WordEntry { label, mask: bit(n) }
}

const fn word(label: &'static str, mask: u32) -> WordEntry {
    WordEntry { label, mask }
}

const fn lmp(label: &'static str, byte: usize, mask: u8) -> ByteEntry {
    ByteEntry { label, byte, mask }
}

/// Kernel device flags (`hci_dev_info.flags`). The kernel defines these as
/// bit numbers; the table stores the expanded masks.
pub static DEVICE_FLAGS: &[WordEntry] = &[
    flag("UP", 0),
    flag("INIT", 1),
    flag("RUNNING", 2),
    flag("RAW", 8),
    flag("PSCAN", 3),
    flag("ISCAN", 4),
    flag("INQUIRY", 7),
    flag("AUTH", 5),
    flag("ENCRYPT", 6),
];

/// LMP feature bits for all eight feature bytes, including the reserved
/// positions ("no. N") so that unsupported-mode output covers every bit.
pub static LMP_FEATURES: &[ByteEntry] = &[
    // Byte 0
    lmp("3-slot packets", 0, 0x01),
    lmp("5-slot packets", 0, 0x02),
    lmp("encryption", 0, 0x04),
    lmp("slot offset", 0, 0x08),
    lmp("timing accuracy", 0, 0x10),
    lmp("role switch", 0, 0x20),
    lmp("hold mode", 0, 0x40),
    lmp("sniff mode", 0, 0x80),
    // Byte 1
    lmp("park state", 1, 0x01),
    lmp("RSSI", 1, 0x02),
    lmp("channel quality", 1, 0x04),
    lmp("SCO link", 1, 0x08),
    lmp("HV2 packets", 1, 0x10),
    lmp("HV3 packets", 1, 0x20),
    lmp("u-law log", 1, 0x40),
    lmp("A-law log", 1, 0x80),
    // Byte 2
    lmp("CVSD", 2, 0x01),
    lmp("paging scheme", 2, 0x02),
    lmp("power control", 2, 0x04),
    lmp("transparent SCO", 2, 0x08),
    lmp("broadcast encrypt", 2, 0x80),
    // Byte 3
    lmp("no. 24", 3, 0x01),
    lmp("EDR ACL 2 Mbps", 3, 0x02),
    lmp("EDR ACL 3 Mbps", 3, 0x04),
    lmp("enhanced iscan", 3, 0x08),
    lmp("interlaced iscan", 3, 0x10),
    lmp("interlaced pscan", 3, 0x20),
    lmp("inquiry with RSSI", 3, 0x40),
    lmp("extended SCO", 3, 0x80),
    // Byte 4
    lmp("EV4 packets", 4, 0x01),
    lmp("EV5 packets", 4, 0x02),
    lmp("no. 34", 4, 0x04),
    lmp("AFH cap. slave", 4, 0x08),
    lmp("AFH class. slave", 4, 0x10),
    lmp("BR/EDR not supp.", 4, 0x20),
    lmp("LE support", 4, 0x40),
    lmp("3-slot EDR ACL", 4, 0x80),
    // Byte 5
    lmp("5-slot EDR ACL", 5, 0x01),
    lmp("sniff subrating", 5, 0x02),
    lmp("pause encryption", 5, 0x04),
    lmp("AFH cap. master", 5, 0x08),
    lmp("AFH class. master", 5, 0x10),
    lmp("EDR eSCO 2 Mbps", 5, 0x20),
    lmp("EDR eSCO 3 Mbps", 5, 0x40),
    lmp("3-slot EDR eSCO", 5, 0x80),
    // Byte 6
    lmp("extended inquiry", 6, 0x01),
    lmp("LE and BR/EDR", 6, 0x02),
    lmp("no. 50", 6, 0x04),
    lmp("simple pairing", 6, 0x08),
    lmp("encapsulated PDU", 6, 0x10),
    lmp("err. data report", 6, 0x20),
    lmp("non-flush flag", 6, 0x40),
    lmp("no. 55", 6, 0x80),
    // Byte 7
    lmp("LSTO", 7, 0x01),
    lmp("inquiry TX power", 7, 0x02),
    lmp("EPC", 7, 0x04),
    lmp("no. 59", 7, 0x08),
    lmp("no. 60", 7, 0x10),
    lmp("no. 61", 7, 0x20),
    lmp("no. 62", 7, 0x40),
    lmp("extended features", 7, 0x80),
];

/// ACL packet types (`hci_dev_info.pkt_type`)
pub static ACL_PACKET_TYPES: &[WordEntry] = &[
    word("DM1", 0x0008),
    word("DM3", 0x0400),
    word("DM5", 0x4000),
    word("DH1", 0x0010),
    word("DH3", 0x0800),
    word("DH5", 0x8000),
    word("HV1", 0x0020),
    word("HV2", 0x0040),
    word("HV3", 0x0080),
    word("2-DH1", 0x0002),
    word("2-DH3", 0x0100),
    word("2-DH5", 0x1000),
    word("3-DH1", 0x0004),
    word("3-DH3", 0x0200),
    word("3-DH5", 0x2000),
];

/// SCO packet types, sharing the `pkt_type` word with the ACL types
pub static SCO_PACKET_TYPES: &[WordEntry] = &[
    word("HV1", 0x0001),
    word("HV2", 0x0002),
    word("HV3", 0x0004),
    word("EV3", 0x0008),
    word("EV4", 0x0010),
    word("EV5", 0x0020),
    word("2-EV3", 0x0040),
    word("2-EV5", 0x0100),
    word("3-EV3", 0x0080),
    word("3-EV5", 0x0200),
];

/// Link policy settings (`hci_dev_info.link_policy`)
pub static LINK_POLICY: &[WordEntry] = &[
    word("HCI_LP_RSWITCH", 0x0001),
    word("HCI_LP_HOLD", 0x0002),
    word("HCI_LP_SNIFF", 0x0004),
    word("HCI_LP_PARK", 0x0008),
];

/// Link mode bits (`hci_dev_info.link_mode`)
pub static LINK_MODES: &[WordEntry] = &[
    word("ACCEPT", 0x8000),
    word("MASTER", 0x0001),
    word("AUTH", 0x0002),
    word("ENCRYPT", 0x0004),
    word("TRUSTED", 0x0008),
    word("RELIABLE", 0x0010),
    word("SECURE", 0x0020),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_empty_labels_or_zero_masks() {
        for e in DEVICE_FLAGS
            .iter()
            .chain(ACL_PACKET_TYPES)
            .chain(SCO_PACKET_TYPES)
            .chain(LINK_POLICY)
            .chain(LINK_MODES)
        {
            assert!(!e.label.is_empty());
            assert_ne!(e.mask, 0, "zero mask for {}", e.label);
        }
        for e in LMP_FEATURES {
            assert!(!e.label.is_empty());
            assert_ne!(e.mask, 0, "zero mask for {}", e.label);
            assert!(e.byte < 8, "byte index out of range for {}", e.label);
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(DEVICE_FLAGS.len(), 9);
        assert_eq!(LMP_FEATURES.len(), 61);
        assert_eq!(ACL_PACKET_TYPES.len(), 15);
        assert_eq!(SCO_PACKET_TYPES.len(), 10);
        assert_eq!(LINK_POLICY.len(), 4);
    }

    #[test]
    fn test_device_flag_masks_are_distinct() {
        let mut seen = 0u32;
        for e in DEVICE_FLAGS {
            assert_eq!(seen & e.mask, 0, "duplicate mask for {}", e.label);
            seen |= e.mask;
        }
    }
}

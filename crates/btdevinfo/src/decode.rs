//! Bitmask decoding against the capability tables
//!
//! Decoding is pure and total: any input value yields one `DecodedField`
//! per table entry, in table order. A failed lookup is not possible.

use crate::features::{ByteEntry, WordEntry};

/// The decoding of one table entry against a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedField {
    pub label: &'static str,
    pub active: bool,
}

/// Decodes a single-word table against a raw 32-bit value.
///
/// An entry is active iff its mask ANDs to a nonzero value. Entries with a
/// zero mask are never active, so a malformed table cannot produce a label
/// that matches every input.
pub fn decode_word(table: &[WordEntry], value: u32) -> Vec<DecodedField> {
    table
        .iter()
        .map(|e| DecodedField {
            label: e.label,
            active: e.mask != 0 && value & e.mask != 0,
        })
        .collect()
}

/// Decodes the LMP feature table against the 8-byte feature array.
pub fn decode_bytes(table: &[ByteEntry], bytes: &[u8; 8]) -> Vec<DecodedField> {
    table
        .iter()
        .map(|e| DecodedField {
            label: e.label,
            active: e.mask != 0 && bytes[e.byte] & e.mask != 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{ACL_PACKET_TYPES, DEVICE_FLAGS, LINK_POLICY, LMP_FEATURES};

    #[test]
    fn test_decode_is_total_and_ordered() {
        for value in [0u32, 1, 0x0101, 0xffff_ffff] {
            let decoded = decode_word(ACL_PACKET_TYPES, value);
            assert_eq!(decoded.len(), ACL_PACKET_TYPES.len());
            for (field, entry) in decoded.iter().zip(ACL_PACKET_TYPES) {
                assert_eq!(field.label, entry.label);
            }
        }
    }

    #[test]
    fn test_decode_zero_value_is_all_inactive() {
        assert!(decode_word(DEVICE_FLAGS, 0).iter().all(|f| !f.active));
        assert!(decode_bytes(LMP_FEATURES, &[0u8; 8]).iter().all(|f| !f.active));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let a = decode_word(LINK_POLICY, 0x0005);
        let b = decode_word(LINK_POLICY, 0x0005);
        assert_eq!(a, b);
    }

    #[test]
    fn test_active_count_matches_set_selectors() {
        // OR together a subset of selectors, decode, expect exactly that
        // subset back in table order.
        let subset = [&ACL_PACKET_TYPES[0], &ACL_PACKET_TYPES[4], &ACL_PACKET_TYPES[9]];
        let value = subset.iter().fold(0u32, |v, e| v | e.mask);

        let active: Vec<_> = decode_word(ACL_PACKET_TYPES, value)
            .into_iter()
            .filter(|f| f.active)
            .map(|f| f.label)
            .collect();
        let expected: Vec<_> = subset.iter().map(|e| e.label).collect();
        assert_eq!(active, expected);
    }

    #[test]
    fn test_zero_mask_entry_never_active() {
        let table = [crate::features::WordEntry { label: "BOGUS", mask: 0 }];
        let decoded = decode_word(&table, 0xffff_ffff);
        assert!(!decoded[0].active);
    }

    #[test]
    fn test_lmp_byte_selector() {
        // "LE support" lives in byte 4, mask 0x40
        let mut bytes = [0u8; 8];
        bytes[4] = 0x40;
        let decoded = decode_bytes(LMP_FEATURES, &bytes);
        let active: Vec<_> = decoded.iter().filter(|f| f.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "LE support");
    }
}

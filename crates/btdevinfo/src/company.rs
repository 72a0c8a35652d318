//! Identity lookups: manufacturer names and LMP version strings
//!
//! Company identifiers come from the Bluetooth SIG assigned-numbers list.
//! Only vendors that actually ship HCI controllers are carried here; the
//! rest fall back to "not assigned" with the numeric id printed alongside
//! by the reporter.

/// Resolves a Bluetooth SIG company identifier to a display name.
pub fn company_name(id: u16) -> &'static str {
    match id {
        0 => "Ericsson Technology Licensing",
        1 => "Nokia Mobile Phones",
        2 => "Intel Corp.",
        3 => "IBM Corp.",
        4 => "Toshiba Corp.",
        5 => "3Com",
        6 => "Microsoft",
        7 => "Lucent",
        8 => "Motorola",
        9 => "Infineon Technologies AG",
        10 => "Cambridge Silicon Radio",
        11 => "Silicon Wave",
        12 => "Digianswer A/S",
        13 => "Texas Instruments Inc.",
        15 => "Broadcom Corporation",
        19 => "Atmel Corporation",
        29 => "Qualcomm",
        31 => "AVM Berlin",
        34 => "NEC Corporation",
        37 => "Philips Semiconductors",
        41 => "Hitachi Ltd",
        48 => "ST Microelectronics",
        70 => "MediaTek, Inc.",
        72 => "Marvell Technology Group Ltd.",
        76 => "Apple, Inc.",
        89 => "Nordic Semiconductor ASA",
        93 => "Realtek Semiconductor Corporation",
        117 => "Samsung Electronics Co. Ltd.",
        65535 => "internal use",
        _ => "not assigned",
    }
}

/// Resolves an LMP version number to the Bluetooth core version it
/// corresponds to. Returns `None` for values not yet assigned.
pub fn lmp_version_string(version: u8) -> Option<&'static str> {
    let s = match version {
        0 => "1.0b",
        1 => "1.1",
        2 => "1.2",
        3 => "2.0",
        4 => "2.1",
        5 => "3.0",
        6 => "4.0",
        7 => "4.1",
        8 => "4.2",
        9 => "5.0",
        10 => "5.1",
        11 => "5.2",
        12 => "5.3",
        13 => "5.4",
        _ => return None,
    };
    Some(s)
}

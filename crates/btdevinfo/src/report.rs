//! Per-adapter reporting
//!
//! `render_report` builds the full output for one adapter from a snapshot
//! and version record, so it can be exercised in tests with synthetic
//! values. `report` drives the HCI socket and prints the result.

use std::io::{self, Write};
use std::time::Duration;

use crate::company::{company_name, lmp_version_string};
use crate::decode::{decode_bytes, decode_word};
use crate::error::HciError;
use crate::features::{
    ACL_PACKET_TYPES, DEVICE_FLAGS, LINK_MODES, LINK_POLICY, LMP_FEATURES, SCO_PACKET_TYPES,
};
use crate::format::{
    format_section, headline_style, kv_line, label_style, paint, text_style, DisplayMode,
};
use crate::hci::constants::{
    HCI_LM_MASTER, HCI_TYPE_AMP, HCI_TYPE_PRIMARY, LMP_LE, LMP_LE_BREDR, LMP_LE_BREDR_BYTE,
    LMP_LE_BYTE,
};
use crate::hci::{enumerate_up_adapters, AdapterSnapshot, HciSocket, LocalVersion};

const VERSION_TIMEOUT: Duration = Duration::from_millis(1000);

/// Queries one adapter and prints its report to stdout.
///
/// Any failure (open, device info, version info) aborts this adapter's
/// report only; the caller decides whether to continue with the next
/// adapter. The socket is closed on every path.
pub fn report(dev_id: u16, mode: &DisplayMode) -> Result<(), HciError> {
    let socket = HciSocket::open(dev_id)?;
    let snapshot = socket.device_info(dev_id)?;
    let version = socket.read_local_version(VERSION_TIMEOUT)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in render_report(&snapshot, &version, mode) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Reports every adapter the kernel lists as UP, writing a diagnostic to
/// stderr for each adapter that fails and carrying on with the rest.
///
/// Returns an error only when enumeration itself fails.
pub fn report_all(mode: &DisplayMode) -> Result<(), HciError> {
    let dev_ids = enumerate_up_adapters()?;
    if dev_ids.is_empty() {
        log::warn!("no adapters are up");
    }
    for dev_id in dev_ids {
        if let Err(err) = report(dev_id, mode) {
            eprintln!("Can't get device info for hci{dev_id}: {err}");
        }
    }
    Ok(())
}

/// Renders the complete report for one adapter.
pub fn render_report(
    snapshot: &AdapterSnapshot,
    version: &LocalVersion,
    mode: &DisplayMode,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(paint(
        mode,
        headline_style(),
        &format!("{} ------------------------------------------- ", snapshot.name),
    ));

    lines.push(kv_line("device id", "\t\t", &snapshot.dev_id.to_string(), mode));
    lines.push(kv_line(
        "Manufacturer",
        "\t",
        &format!("{} ({})", company_name(version.manufacturer), version.manufacturer),
        mode,
    ));
    lines.push(kv_line(
        "LMP version",
        "\t",
        &format!(
            "{} (0x{:x}) [subver 0x{:x}]",
            lmp_version_string(version.lmp_ver).unwrap_or("n/a"),
            version.lmp_ver,
            version.lmp_subver
        ),
        mode,
    ));
    lines.push(kv_line("device type", "\t", device_type_string(snapshot.dev_type), mode));
    lines.push(kv_line(
        "BLE",
        "\t\t",
        ble_capability_string(version.lmp_ver, &snapshot.features),
        mode,
    ));
    lines.push(kv_line("device address", "\t", &snapshot.bdaddr.to_string(), mode));

    if mode.verbose {
        lines.extend(render_verbose(snapshot, mode));
    }

    lines.push(String::new());
    lines
}

fn render_verbose(snapshot: &AdapterSnapshot, mode: &DisplayMode) -> Vec<String> {
    let mut lines = Vec::new();

    lines.extend(format_section(
        "flags",
        &decode_word(DEVICE_FLAGS, snapshot.flags),
        mode,
    ));
    lines.extend(format_section(
        "LMP features",
        &decode_bytes(LMP_FEATURES, &snapshot.features),
        mode,
    ));
    lines.extend(format_section(
        "ACL packet types",
        &decode_word(ACL_PACKET_TYPES, snapshot.pkt_type),
        mode,
    ));
    lines.extend(format_section(
        "SCO packet types",
        &decode_word(SCO_PACKET_TYPES, snapshot.pkt_type),
        mode,
    ));
    lines.extend(format_section(
        "link_policy",
        &decode_word(LINK_POLICY, snapshot.link_policy),
        mode,
    ));

    lines.push(kv_line("link_mode", "\t\t", &link_mode_string(snapshot.link_mode), mode));
    lines.push(kv_line("acl_mtu", "\t\t", &snapshot.acl_mtu.to_string(), mode));
    lines.push(kv_line("acl_pkts", "\t\t", &snapshot.acl_pkts.to_string(), mode));
    lines.push(kv_line("sco_mtu", "\t\t", &snapshot.sco_mtu.to_string(), mode));
    lines.push(kv_line("sco_pkts", "\t\t", &snapshot.sco_pkts.to_string(), mode));

    lines.push(paint(mode, label_style(), "    device stats:"));
    let stats = &snapshot.stats;
    let counters: [(&str, u32); 10] = [
        ("err_rx", stats.err_rx),
        ("err_tx", stats.err_tx),
        ("cmd_tx", stats.cmd_tx),
        ("evt_rx", stats.evt_rx),
        ("acl_tx", stats.acl_tx),
        ("acl_rx", stats.acl_rx),
        ("sco_tx", stats.sco_tx),
        ("sco_rx", stats.sco_rx),
        ("byte_rx", stats.byte_rx),
        ("byte_tx", stats.byte_tx),
    ];
    for (name, value) in counters {
        let pad = if name.len() < 7 { "\t\t" } else { "\t" };
        let text = format!("        {name}:{pad}{value}");
        lines.push(paint(mode, text_style(), &text));
    }

    lines
}

/// Device type from the type nibble of `hci_dev_info.type`
fn device_type_string(dev_type: u8) -> &'static str {
    match (dev_type & 0x30) >> 4 {
        HCI_TYPE_PRIMARY => "BR/EDR",
        HCI_TYPE_AMP => "AMP",
        _ => "UNKNOWN",
    }
}

/// Low-energy capability inferred from the LMP version and feature bits.
///
/// Controllers before LMP 6 (core 4.0) cannot do LE at all. From there,
/// byte 6 bit 1 means dual mode and byte 4 bit 6 means LE-only.
fn ble_capability_string(lmp_ver: u8, features: &[u8; 8]) -> &'static str {
    if lmp_ver < 0x06 {
        "incapable"
    } else if features[LMP_LE_BREDR_BYTE] & LMP_LE_BREDR != 0 {
        "capable (dual mode)"
    } else if features[LMP_LE_BYTE] & LMP_LE != 0 {
        "capable (single mode)"
    } else {
        "UNKNOWN MODE"
    }
}

/// Renders the link-mode word the way bluez's `hci_lmtostr` does: a SLAVE
/// prefix when the MASTER bit is clear, then the active mode labels.
fn link_mode_string(link_mode: u32) -> String {
    let mut parts = Vec::new();
    if link_mode & HCI_LM_MASTER == 0 {
        parts.push("SLAVE");
    }
    for field in decode_word(LINK_MODES, link_mode) {
        if field.active {
            parts.push(field.label);
        }
    }
    if parts.is_empty() {
        "NONE".to_string()
    } else {
        parts.join(" ")
    }
}

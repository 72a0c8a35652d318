//! Text rendering for decoded fields
//!
//! All functions here are pure: they return the lines to print and keep no
//! state. Styling is additive only, so stripping the escape sequences from
//! colorized output yields exactly the plain output.

use owo_colors::{OwoColorize, Style};

use crate::decode::DecodedField;

/// Output options, built once from the CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayMode {
    /// Print the decoded capability sections and statistics
    pub verbose: bool,
    /// Print every table entry with a 1/0 supported marker instead of
    /// only the supported ones
    pub show_unsupported: bool,
    /// Wrap headers, labels and values in ANSI styles
    pub colorized: bool,
}

/// Bold magenta, used for the per-adapter banner
pub fn headline_style() -> Style {
    Style::new().bold().magenta()
}

/// Green, used for field labels and section headers
pub fn label_style() -> Style {
    Style::new().green()
}

/// White, used for values
pub fn text_style() -> Style {
    Style::new().white()
}

/// Applies `style` to `text` when the mode asks for color, otherwise
/// returns the text unchanged.
pub fn paint(mode: &DisplayMode, style: Style, text: &str) -> String {
    if mode.colorized {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Renders one decoded section under an indented header line.
///
/// With `show_unsupported` set every entry appears once, suffixed with `1`
/// or `0`; otherwise only active entries appear, label only. The tab
/// padding keeps the markers roughly column-aligned for the label lengths
/// that occur in the tables.
pub fn format_section(header: &str, fields: &[DecodedField], mode: &DisplayMode) -> Vec<String> {
    let mut lines = Vec::with_capacity(fields.len() + 1);
    lines.push(paint(mode, label_style(), &format!("    {header}:")));

    if mode.show_unsupported {
        for field in fields {
            let pad = if field.label.len() < 7 {
                "\t\t\t"
            } else if field.label.len() < 15 {
                "\t\t"
            } else {
                "\t"
            };
            let text = format!("        {}:{}{}", field.label, pad, u8::from(field.active));
            lines.push(paint(mode, text_style(), &text));
        }
    } else {
        for field in fields.iter().filter(|f| f.active) {
            lines.push(paint(mode, text_style(), &format!("        {}", field.label)));
        }
    }

    lines
}

/// Renders one `label: value` row with separately styled halves.
pub fn kv_line(label: &str, pad: &str, value: &str, mode: &DisplayMode) -> String {
    format!(
        "{}{}{}",
        paint(mode, label_style(), &format!("    {label}:")),
        pad,
        paint(mode, text_style(), value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_word;
    use crate::features::DEVICE_FLAGS;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // skip CSI sequence up to and including the final byte
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_supported_only_prints_active_labels() {
        // only the UP bit set
        let fields = decode_word(DEVICE_FLAGS, 1 << 0);
        let mode = DisplayMode::default();
        let lines = format_section("flags", &fields, &mode);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "    flags:");
        assert_eq!(lines[1], "        UP");
    }

    #[test]
    fn test_unsupported_mode_prints_every_entry_with_marker() {
        let fields = decode_word(DEVICE_FLAGS, 1 << 0);
        let mode = DisplayMode {
            show_unsupported: true,
            ..DisplayMode::default()
        };
        let lines = format_section("flags", &fields, &mode);
        assert_eq!(lines.len(), DEVICE_FLAGS.len() + 1);
        for (line, field) in lines[1..].iter().zip(&fields) {
            assert!(line.contains(field.label));
            let marker = if field.active { '1' } else { '0' };
            assert_eq!(line.chars().last(), Some(marker));
        }
    }

    #[test]
    fn test_colorization_preserves_content() {
        let fields = decode_word(DEVICE_FLAGS, 0x01af);
        let plain_mode = DisplayMode {
            show_unsupported: true,
            ..DisplayMode::default()
        };
        let color_mode = DisplayMode {
            colorized: true,
            ..plain_mode
        };

        let plain = format_section("flags", &fields, &plain_mode);
        let colorized = format_section("flags", &fields, &color_mode);
        assert_eq!(plain.len(), colorized.len());
        for (p, c) in plain.iter().zip(&colorized) {
            assert_ne!(p, c, "colorized output should carry escape codes");
            assert_eq!(*p, strip_ansi(c));
        }
    }

    #[test]
    fn test_kv_line_plain() {
        let mode = DisplayMode::default();
        assert_eq!(kv_line("device id", "\t\t", "0", &mode), "    device id:\t\t0");
    }
}

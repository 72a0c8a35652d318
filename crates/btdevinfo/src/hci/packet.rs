//! HCI packet structures and parsing

use crate::hci::constants::*;

/// HCI commands used by this library
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum HciCommand {
    /// Read Local Version Information (OGF 0x04, OCF 0x0001)
    ReadLocalVersion,
}

impl HciCommand {
    /// Get the OGF and OCF for this command
    pub fn opcode_parts(&self) -> (u8, u16) {
        match self {
            Self::ReadLocalVersion => (OGF_INFO_PARAM, OCF_READ_LOCAL_VERSION),
        }
    }

    /// Get the full 16-bit opcode for this command
    pub fn opcode(&self) -> u16 {
        let (ogf, ocf) = self.opcode_parts();
        ((ogf as u16) << 10) | (ocf & 0x3ff)
    }

    /// Convert the command to its raw parameter bytes
    fn parameters(&self) -> Vec<u8> {
        match self {
            Self::ReadLocalVersion => vec![],
        }
    }

    /// Convert the command to a raw HCI packet
    pub fn to_packet(&self) -> Vec<u8> {
        let params = self.parameters();

        let mut packet = vec![HCI_COMMAND_PKT];
        packet.extend_from_slice(&self.opcode().to_le_bytes());
        packet.push(params.len() as u8);
        packet.extend_from_slice(&params);
        packet
    }
}

/// HCI Event packet
#[derive(Debug, Clone)]
pub struct HciEvent {
    pub event_code: u8,
    pub parameter_total_length: u8,
    pub parameters: Vec<u8>,
}

impl HciEvent {
    /// Parse an HCI event from raw bytes
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < 2 {
            return None;
        }

        let event_code = data[0];
        let parameter_total_length = data[1];

        if data.len() < (parameter_total_length as usize + 2) {
            return None;
        }

        let parameters = data[2..(parameter_total_length as usize + 2)].to_vec();

        Some(HciEvent {
            event_code,
            parameter_total_length,
            parameters,
        })
    }

    /// Whether this is a Command Complete event for the given command.
    ///
    /// The Command Complete parameter layout is: number of allowed command
    /// packets (1 byte), completed opcode (2 bytes, LE), then the return
    /// parameters starting with the status byte.
    pub fn is_command_complete(&self, command: &HciCommand) -> bool {
        self.event_code == EVT_CMD_COMPLETE
            && self.parameters.len() >= 4
            && u16::from_le_bytes([self.parameters[1], self.parameters[2]]) == command.opcode()
    }

    /// Status byte of a Command Complete event
    pub fn status(&self) -> u8 {
        self.parameters.get(3).copied().unwrap_or(0xff)
    }

    /// Return parameters of a Command Complete event, after the status byte
    pub fn return_parameters(&self) -> &[u8] {
        self.parameters.get(4..).unwrap_or(&[])
    }
}

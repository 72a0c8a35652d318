//! HCI protocol and kernel interface constants

// HCI packet types
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_EVENT_PKT: u8 = 0x04;

// Informational parameter commands (OGF: 0x04)
pub const OGF_INFO_PARAM: u8 = 0x04;
pub const OCF_READ_LOCAL_VERSION: u16 = 0x0001;

// HCI events
pub const EVT_CMD_COMPLETE: u8 = 0x0E;
pub const EVT_CMD_STATUS: u8 = 0x0F;

// Bluetooth socket constants
pub const AF_BLUETOOTH: i32 = 31;
pub const BTPROTO_HCI: i32 = 1;
pub const HCI_CHANNEL_RAW: u16 = 0;

// Socket options for the raw HCI channel
pub const SOL_HCI: i32 = 0;
pub const HCI_FILTER: i32 = 2;

// Device ioctls (actual values, identical across architectures)
pub const HCIGETDEVLIST: libc::c_ulong = 0x800448d2; // _IOR('H', 210, int)
pub const HCIGETDEVINFO: libc::c_ulong = 0x800448d3; // _IOR('H', 211, int)

// Upper bound the kernel enforces on registered HCI devices
pub const HCI_MAX_DEV: usize = 16;

// Bit number of the UP flag in `hci_dev_req.dev_opt`
pub const HCI_UP: u32 = 0;

// Feature bits used by the BLE capability inference
pub const LMP_LE_BYTE: usize = 4;
pub const LMP_LE: u8 = 0x40;
pub const LMP_LE_BREDR_BYTE: usize = 6;
pub const LMP_LE_BREDR: u8 = 0x02;

// Device type nibble values from `(hci_dev_info.type & 0x30) >> 4`
pub const HCI_TYPE_PRIMARY: u8 = 0x00;
pub const HCI_TYPE_AMP: u8 = 0x01;

// Link mode bit checked for the SLAVE/MASTER prefix
pub const HCI_LM_MASTER: u32 = 0x0001;

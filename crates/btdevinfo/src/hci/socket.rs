//! HCI socket wrapper for querying local adapters
//!
//! This module provides a wrapper around the raw HCI socket interface.
//! The socket is only ever used for read-only queries: the device-info
//! ioctls and the single Read Local Version Information command.

use std::os::unix::io::{AsRawFd, RawFd};
use std::time::Duration;

use crate::error::HciError;
use crate::hci::constants::*;
use crate::hci::dev::raw::{HciDevInfo, HciDevListReq};
use crate::hci::dev::{AdapterSnapshot, LocalVersion};
use crate::hci::packet::{HciCommand, HciEvent};

// Define the sockaddr_hci structure
#[repr(C)]
struct SockaddrHci {
    hci_family: libc::sa_family_t,
    hci_dev: u16,
    hci_channel: u16,
}

// Kernel event filter for the raw HCI channel
#[repr(C)]
struct HciFilter {
    type_mask: u32,
    event_mask: [u32; 2],
    opcode: u16,
}

/// Represents an HCI socket bound to one adapter
#[derive(Debug)]
pub struct HciSocket {
    fd: RawFd,
}

impl HciSocket {
    /// Opens a new HCI socket bound to the given adapter
    pub fn open(dev_id: u16) -> Result<Self, HciError> {
        let fd = open_raw_socket()?;

        let addr = SockaddrHci {
            hci_family: AF_BLUETOOTH as libc::sa_family_t,
            hci_dev: dev_id,
            hci_channel: HCI_CHANNEL_RAW,
        };

        let result = unsafe {
            libc::bind(
                fd,
                &addr as *const _ as *const libc::sockaddr,
                std::mem::size_of::<SockaddrHci>() as libc::socklen_t,
            )
        };

        if result < 0 {
            let err = std::io::Error::last_os_error();
            unsafe { libc::close(fd) };
            return Err(HciError::BindError(err));
        }

        log::debug!("opened HCI socket for hci{dev_id}");
        Ok(HciSocket { fd })
    }

    /// Fetches the kernel's device-info record for the given adapter
    pub fn device_info(&self, dev_id: u16) -> Result<AdapterSnapshot, HciError> {
        let mut di: HciDevInfo = unsafe { std::mem::zeroed() };
        di.dev_id = dev_id;

        let result = unsafe {
            libc::ioctl(
                self.fd,
                HCIGETDEVINFO,
                &mut di as *mut HciDevInfo as *mut libc::c_void,
            )
        };

        if result < 0 {
            return Err(HciError::IoctlError(std::io::Error::last_os_error()));
        }

        Ok(AdapterSnapshot::from(&di))
    }

    /// Reads local version information from the controller, waiting at
    /// most `timeout` for the Command Complete event.
    pub fn read_local_version(&self, timeout: Duration) -> Result<LocalVersion, HciError> {
        let command = HciCommand::ReadLocalVersion;

        self.set_event_filter(command.opcode())?;
        self.send_command(&command)?;

        let event = self.read_event_timeout(Some(timeout))?;
        if !event.is_command_complete(&command) {
            return Err(HciError::InvalidPacketFormat);
        }
        if event.status() != 0 {
            return Err(HciError::CommandFailed(event.status()));
        }

        // status(1), hci_ver(1), hci_rev(2), lmp_ver(1), manufacturer(2),
        // lmp_subver(2)
        let params = event.return_parameters();
        if params.len() < 8 {
            return Err(HciError::InvalidPacketFormat);
        }

        Ok(LocalVersion {
            hci_ver: params[0],
            hci_rev: u16::from_le_bytes([params[1], params[2]]),
            lmp_ver: params[3],
            manufacturer: u16::from_le_bytes([params[4], params[5]]),
            lmp_subver: u16::from_le_bytes([params[6], params[7]]),
        })
    }

    /// Restricts the socket to Command Complete/Status events for one
    /// opcode. Without a filter the kernel drops all events on a raw
    /// channel socket.
    fn set_event_filter(&self, opcode: u16) -> Result<(), HciError> {
        let mut filter = HciFilter {
            type_mask: 1u32 << u32::from(HCI_EVENT_PKT),
            event_mask: [0; 2],
            opcode,
        };
        for evt in [EVT_CMD_COMPLETE, EVT_CMD_STATUS] {
            filter.event_mask[(evt >> 5) as usize] |= 1u32 << u32::from(evt & 0x1f);
        }

        let result = unsafe {
            libc::setsockopt(
                self.fd,
                SOL_HCI,
                HCI_FILTER,
                &filter as *const HciFilter as *const libc::c_void,
                std::mem::size_of::<HciFilter>() as libc::socklen_t,
            )
        };

        if result < 0 {
            return Err(HciError::IoctlError(std::io::Error::last_os_error()));
        }
        Ok(())
    }

    /// Sends an HCI command to the controller
    pub fn send_command(&self, command: &HciCommand) -> Result<(), HciError> {
        let packet = command.to_packet();
        match unsafe {
            libc::write(
                self.fd,
                packet.as_ptr() as *const libc::c_void,
                packet.len(),
            )
        } {
            -1 => Err(HciError::SendError(std::io::Error::last_os_error())),
            _ => Ok(()),
        }
    }

    /// Read an HCI event from the socket
    pub fn read_event(&self) -> Result<HciEvent, HciError> {
        let mut buffer = [0u8; 258]; // Max HCI event packet size

        let bytes_read = unsafe {
            libc::read(
                self.fd,
                buffer.as_mut_ptr() as *mut libc::c_void,
                buffer.len(),
            )
        };

        if bytes_read < 0 {
            return Err(HciError::ReceiveError(std::io::Error::last_os_error()));
        }

        if bytes_read < 3 || buffer[0] != HCI_EVENT_PKT {
            return Err(HciError::InvalidPacketFormat);
        }

        match HciEvent::parse(&buffer[1..bytes_read as usize]) {
            Some(event) => Ok(event),
            None => Err(HciError::InvalidPacketFormat),
        }
    }

    /// Read an HCI event from the socket with a timeout
    pub fn read_event_timeout(&self, timeout: Option<Duration>) -> Result<HciEvent, HciError> {
        if let Some(timeout) = timeout {
            // Set up the fd_set for select()
            let mut read_fds: libc::fd_set = unsafe { std::mem::zeroed() };
            unsafe {
                libc::FD_ZERO(&mut read_fds);
                libc::FD_SET(self.fd, &mut read_fds);
            }

            let mut timeout_val = libc::timeval {
                tv_sec: timeout.as_secs() as libc::time_t,
                tv_usec: timeout.subsec_micros() as libc::suseconds_t,
            };

            let result = unsafe {
                libc::select(
                    self.fd + 1,
                    &mut read_fds,
                    std::ptr::null_mut(),
                    std::ptr::null_mut(),
                    &mut timeout_val,
                )
            };

            if result < 0 {
                return Err(HciError::ReceiveError(std::io::Error::last_os_error()));
            }

            if result == 0 {
                return Err(HciError::ReceiveError(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "Timed out waiting for HCI event",
                )));
            }
        }

        self.read_event()
    }
}

impl AsRawFd for HciSocket {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for HciSocket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}

/// Lists the ids of all adapters the kernel reports as UP.
///
/// Uses an unbound control socket; the per-adapter sockets are opened by
/// the reporter afterwards.
pub fn enumerate_up_adapters() -> Result<Vec<u16>, HciError> {
    let fd = open_raw_socket()?;

    let mut req: HciDevListReq = unsafe { std::mem::zeroed() };
    req.dev_num = HCI_MAX_DEV as u16;

    let result = unsafe {
        libc::ioctl(
            fd,
            HCIGETDEVLIST,
            &mut req as *mut HciDevListReq as *mut libc::c_void,
        )
    };

    if result < 0 {
        let err = std::io::Error::last_os_error();
        unsafe { libc::close(fd) };
        return Err(HciError::IoctlError(err));
    }
    unsafe { libc::close(fd) };

    let count = (req.dev_num as usize).min(HCI_MAX_DEV);
    let ids = req.dev_req[..count]
        .iter()
        .filter(|dr| dr.dev_opt & (1u32 << HCI_UP) != 0)
        .map(|dr| dr.dev_id)
        .collect();

    log::debug!("kernel reports {count} adapter(s), up: {ids:?}");
    Ok(ids)
}

fn open_raw_socket() -> Result<RawFd, HciError> {
    let fd = unsafe { libc::socket(AF_BLUETOOTH, libc::SOCK_RAW, BTPROTO_HCI) };

    if fd < 0 {
        return Err(HciError::SocketError(std::io::Error::last_os_error()));
    }
    Ok(fd)
}

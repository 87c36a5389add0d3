//! KNX datapoint payloads (DPT)
//!
//! This module builds the payload bit patterns carried after the routing
//! byte. Each payload couples an application command with a DPT-encoded
//! value:
//!
//! - **Switch** - boolean state (on/off), 2 payload bytes
//! - **Dimming** - 8-bit level, 3 payload bytes
//!
//! ## Usage
//!
//! ```
//! use knx_tp1::dpt::{Command, DimmingPayload, SwitchPayload};
//!
//! // Turn a switch on
//! let field = SwitchPayload::new(Command::ValueWrite, true).to_field();
//! assert_eq!(field, 0x0081);
//!
//! // Set a dimming level
//! let bytes = DimmingPayload::new(Command::ValueWrite, 153).to_bytes();
//! assert_eq!(bytes, [0x00, 0x80, 0x99]);
//! ```

pub mod dimming;
pub mod switch;

#[doc(inline)]
pub use dimming::DimmingPayload;
#[doc(inline)]
pub use switch::SwitchPayload;

/// Application commands carried in the payload's 4-bit command field
///
/// Other 4-bit codes are protocol-reserved and refused on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Command {
    /// Request the current value of a datapoint
    ValueRead = 0b0000,
    /// Answer to a value read
    ValueResponse = 0b0001,
    /// Write a new value to a datapoint
    ValueWrite = 0b0010,
    /// Write to device memory
    MemoryWrite = 0b1010,
}

impl Command {
    /// Convert a 4-bit code to a Command
    ///
    /// Returns `None` for protocol-reserved codes.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0b0000 => Some(Self::ValueRead),
            0b0001 => Some(Self::ValueResponse),
            0b0010 => Some(Self::ValueWrite),
            0b1010 => Some(Self::MemoryWrite),
            _ => None,
        }
    }

    /// Convert a Command to its 4-bit code
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

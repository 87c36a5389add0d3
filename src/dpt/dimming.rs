//! Dimming datapoint payload (8-bit level)
//!
//! Couples a command with an absolute dimming level in a 3-byte logical
//! field (the top byte of the backing u32 is unused).
//!
//! ## Format
//!
//! ```text
//! ┌────────────┬───────────┬────────────┬───────────┐
//! │ Unused (6) │ Cmd (4)   │ Unused (6) │ Value (8) │
//! └────────────┴───────────┴────────────┴───────────┘
//!   Bits 23-18   Bits 17-14  Bits 13-8    Bits 7-0
//! ```

use crate::dpt::Command;
use crate::error::{Result, TelegramError};

/// Dimming payload (command + 8-bit level)
///
/// The level covers the full 0-255 range, 0 = off, 255 = full brightness.
///
/// # Examples
///
/// ```
/// use knx_tp1::{Command, DimmingPayload};
///
/// let payload = DimmingPayload::new(Command::ValueWrite, 153);
/// assert_eq!(payload.to_field(), 0x0000_8099);
/// assert_eq!(payload.to_bytes(), [0x00, 0x80, 0x99]);
///
/// let decoded = DimmingPayload::decode(&payload.to_bytes()).unwrap();
/// assert_eq!(decoded.value(), 153);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimmingPayload {
    command: Command,
    value: u8,
}

impl DimmingPayload {
    /// Number of payload bytes on the wire
    pub const SIZE: usize = 3;

    /// Create a new dimming payload.
    ///
    /// Total function: the command enum is closed and every u8 is a
    /// legal level.
    pub const fn new(command: Command, value: u8) -> Self {
        Self { command, value }
    }

    /// Get the command
    #[inline(always)]
    pub const fn command(self) -> Command {
        self.command
    }

    /// Get the dimming level (0-255)
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Pack into the 24-bit payload field.
    ///
    /// Command in bits 17-14, level in the low byte.
    pub const fn to_field(self) -> u32 {
        ((self.command.to_u8() as u32) << 14) | self.value as u32
    }

    /// Pack into the 3-byte wire form (big-endian).
    pub const fn to_bytes(self) -> [u8; 3] {
        let field = self.to_field();
        [(field >> 16) as u8, (field >> 8) as u8, field as u8]
    }

    /// Unpack from the 24-bit payload field.
    ///
    /// # Errors
    ///
    /// Returns a reserved-command payload error if bits 17-14 hold a
    /// code outside the modeled command set. Unused bits are ignored.
    pub fn from_field(field: u32) -> Result<Self> {
        let command = Command::from_u8(((field >> 14) & 0x0F) as u8)
            .ok_or_else(TelegramError::reserved_command)?;
        let value = (field & 0xFF) as u8;

        Ok(Self { command, value })
    }

    /// Decode from wire bytes.
    ///
    /// # Errors
    ///
    /// Returns an invalid-data payload error for fewer than 3 bytes, or a
    /// reserved-command error as in [`Self::from_field`].
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(TelegramError::invalid_payload_data());
        }
        let field = u32::from_be_bytes([0, data[0], data[1], data[2]]);
        Self::from_field(field)
    }
}

//! Switch datapoint payload (boolean, 1 bit)
//!
//! Couples a command with an on/off state in a 16-bit payload field,
//! transmitted as 2 bytes.
//!
//! ## Format
//!
//! ```text
//! ┌────────────┬───────────┬────────────┬────────┐
//! │ Unused (6) │ Cmd (4)   │ Unused (5) │ State  │
//! └────────────┴───────────┴────────────┴────────┘
//!   Bits 15-10   Bits 9-6    Bits 5-1     Bit 0
//! ```
//!
//! The six high bits have no evaluation; the state occupies only the
//! least significant bit.

use crate::dpt::Command;
use crate::error::{Result, TelegramError};

/// Switch payload (command + on/off state)
///
/// # Examples
///
/// ```
/// use knx_tp1::{Command, SwitchPayload};
///
/// let payload = SwitchPayload::new(Command::ValueWrite, true);
/// assert_eq!(payload.to_field(), 0b0000_0000_1000_0001);
///
/// let decoded = SwitchPayload::decode(&payload.to_bytes()).unwrap();
/// assert_eq!(decoded.command(), Command::ValueWrite);
/// assert!(decoded.state());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchPayload {
    command: Command,
    state: bool,
}

impl SwitchPayload {
    /// Number of payload bytes on the wire
    pub const SIZE: usize = 2;

    /// Create a new switch payload.
    ///
    /// Total function: a closed command enum and a bool leave no failure
    /// path.
    pub const fn new(command: Command, state: bool) -> Self {
        Self { command, state }
    }

    /// Get the command
    #[inline(always)]
    pub const fn command(self) -> Command {
        self.command
    }

    /// Get the switch state
    #[inline(always)]
    pub const fn state(self) -> bool {
        self.state
    }

    /// Pack into the 16-bit payload field.
    ///
    /// Command in bits 9-6, state in bit 0.
    pub const fn to_field(self) -> u16 {
        ((self.command.to_u8() as u16) << 6) | self.state as u16
    }

    /// Pack into the 2-byte wire form (big-endian).
    pub const fn to_bytes(self) -> [u8; 2] {
        self.to_field().to_be_bytes()
    }

    /// Unpack from the 16-bit payload field.
    ///
    /// # Errors
    ///
    /// Returns a reserved-command payload error if bits 9-6 hold a code
    /// outside the modeled command set. Unused bits are ignored.
    pub fn from_field(field: u16) -> Result<Self> {
        let command = Command::from_u8(((field >> 6) & 0x0F) as u8)
            .ok_or_else(TelegramError::reserved_command)?;
        let state = (field & 0x01) != 0;

        Ok(Self { command, state })
    }

    /// Decode from wire bytes.
    ///
    /// # Errors
    ///
    /// Returns an invalid-data payload error for fewer than 2 bytes, or a
    /// reserved-command error as in [`Self::from_field`].
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(TelegramError::invalid_payload_data());
        }
        Self::from_field(u16::from_be_bytes([data[0], data[1]]))
    }
}

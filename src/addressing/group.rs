//! KNX group address implementation.
//!
//! Group addresses identify a logical communication group rather than a
//! single device. Format: Main.Middle.Sub (e.g., 0.0.3)
//! - Main: 0-15 (4 bits, field bits 14-11; bit 15 unused)
//! - Middle: 0-7 (3 bits, field bits 10-8)
//! - Sub: 0-255 (8 bits, field bits 7-0)
//!
//! Occupies telegram bytes 3-4 when the routing byte selects group
//! addressing. Group addressing trades area granularity for a wider
//! sub-group field compared to the physical layout.

use crate::addressing::parse_triplet;
use crate::error::{Result, TelegramError};
use core::fmt;

/// KNX group address (Main.Middle.Sub)
///
/// Targets every device subscribed to a logical group.
///
/// # Examples
///
/// ```
/// use knx_tp1::GroupAddress;
///
/// // Create from components
/// let addr = GroupAddress::new(2, 3, 10).unwrap();
/// assert_eq!(addr.to_string(), "2.3.10");
///
/// // Create from raw u16
/// let addr = GroupAddress::from(0x0003u16);
/// assert_eq!(addr.main(), 0);
/// assert_eq!(addr.middle(), 0);
/// assert_eq!(addr.sub(), 3);
///
/// // Parse from string
/// let addr: GroupAddress = "0.0.3".parse().unwrap();
/// assert_eq!(u16::from(addr), 0x0003);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupAddress {
    raw: u16,
}

impl GroupAddress {
    /// Maximum main group value (4 bits)
    pub const MAX_MAIN: u8 = 15;
    /// Maximum middle group value (3 bits)
    pub const MAX_MIDDLE: u8 = 7;
    /// Maximum sub group value (8 bits)
    pub const MAX_SUB: u8 = 255;

    /// Create a new group address from components.
    ///
    /// # Arguments
    ///
    /// * `main` - Main group (0-15)
    /// * `middle` - Middle group (0-7)
    /// * `sub` - Sub group (0-255)
    ///
    /// # Errors
    ///
    /// Returns an out-of-range addressing error if main or middle exceeds
    /// its field width.
    pub fn new(main: u8, middle: u8, sub: u8) -> Result<Self> {
        if main > Self::MAX_MAIN {
            return Err(TelegramError::address_out_of_range());
        }
        if middle > Self::MAX_MIDDLE {
            return Err(TelegramError::address_out_of_range());
        }
        // sub is u8, so it's always in range

        let raw = (u16::from(main) << 11) | (u16::from(middle) << 8) | u16::from(sub);
        Ok(Self { raw })
    }

    /// Get the raw u16 representation of the address.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Get the main group component (0-15).
    #[inline(always)]
    pub const fn main(self) -> u8 {
        ((self.raw >> 11) & 0x0F) as u8
    }

    /// Get the middle group component (0-7).
    #[inline(always)]
    pub const fn middle(self) -> u8 {
        ((self.raw >> 8) & 0x07) as u8
    }

    /// Get the sub group component (0-255).
    #[inline(always)]
    pub const fn sub(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Encode the address into a byte buffer (big-endian).
    ///
    /// # Errors
    ///
    /// Returns a buffer-too-small frame error if `buf` holds fewer than 2 bytes.
    #[inline]
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < 2 {
            return Err(TelegramError::buffer_too_small());
        }
        buf[0..2].copy_from_slice(&self.raw.to_be_bytes());
        Ok(2)
    }

    /// Decode an address from a byte buffer (big-endian).
    #[inline]
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < 2 {
            return Err(TelegramError::buffer_too_small());
        }
        let raw = u16::from_be_bytes([buf[0], buf[1]]);
        Ok(Self { raw })
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.main(), self.middle(), self.sub())
    }
}

impl From<u16> for GroupAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<GroupAddress> for u16 {
    #[inline(always)]
    fn from(addr: GroupAddress) -> u16 {
        addr.raw
    }
}

impl core::str::FromStr for GroupAddress {
    type Err = TelegramError;

    fn from_str(s: &str) -> Result<Self> {
        let (main, middle, sub) = parse_triplet(s)?;
        Self::new(main, middle, sub)
    }
}

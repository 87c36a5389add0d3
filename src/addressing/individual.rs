//! KNX individual (physical) address implementation.
//!
//! Individual addresses identify a single physical target device.
//! Format: Area.Line.Device (e.g., 3.10.21)
//! - Area: 0-15 (4 bits)
//! - Line: 0-15 (4 bits)
//! - Device: 0-255 (8 bits)
//!
//! Occupies telegram bytes 3-4 when the routing byte selects individual
//! addressing. Same bit layout as the source address, but targets carry no
//! reserved-device rule; the two stay distinct types.

use crate::addressing::parse_triplet;
use crate::error::{Result, TelegramError};
use core::fmt;

/// KNX individual address (Area.Line.Device)
///
/// Identifies a single physical device as the target of a telegram.
///
/// # Examples
///
/// ```
/// use knx_tp1::IndividualAddress;
///
/// // Create from components
/// let addr = IndividualAddress::new(3, 10, 21).unwrap();
/// assert_eq!(addr.to_string(), "3.10.21");
///
/// // Create from raw u16
/// let addr = IndividualAddress::from(0x3A15u16);
/// assert_eq!(addr.area(), 3);
/// assert_eq!(addr.line(), 10);
/// assert_eq!(addr.device(), 21);
///
/// // Parse from string
/// let addr: IndividualAddress = "3.10.21".parse().unwrap();
/// assert_eq!(u16::from(addr), 0x3A15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualAddress {
    raw: u16,
}

impl IndividualAddress {
    /// Maximum area value (4 bits)
    pub const MAX_AREA: u8 = 15;
    /// Maximum line value (4 bits)
    pub const MAX_LINE: u8 = 15;
    /// Maximum device value (8 bits)
    pub const MAX_DEVICE: u8 = 255;

    /// Create a new individual address from components.
    ///
    /// # Arguments
    ///
    /// * `area` - Area (0-15)
    /// * `line` - Line (0-15)
    /// * `device` - Device (0-255)
    ///
    /// # Errors
    ///
    /// Returns an out-of-range addressing error if area or line exceeds
    /// its 4-bit field.
    pub fn new(area: u8, line: u8, device: u8) -> Result<Self> {
        if area > Self::MAX_AREA {
            return Err(TelegramError::address_out_of_range());
        }
        if line > Self::MAX_LINE {
            return Err(TelegramError::address_out_of_range());
        }
        // device is u8, so it's always in range

        let raw = (u16::from(area) << 12) | (u16::from(line) << 8) | u16::from(device);
        Ok(Self { raw })
    }

    /// Get the raw u16 representation of the address.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Get the area component (0-15).
    #[inline(always)]
    pub const fn area(self) -> u8 {
        ((self.raw >> 12) & 0x0F) as u8
    }

    /// Get the line component (0-15).
    #[inline(always)]
    pub const fn line(self) -> u8 {
        ((self.raw >> 8) & 0x0F) as u8
    }

    /// Get the device component (0-255).
    #[inline(always)]
    pub const fn device(self) -> u8 {
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

impl fmt::Display for IndividualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.area(), self.line(), self.device())
    }
}

impl From<u16> for IndividualAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<IndividualAddress> for u16 {
    #[inline(always)]
    fn from(addr: IndividualAddress) -> u16 {
        addr.raw
    }
}

impl core::str::FromStr for IndividualAddress {
    type Err = TelegramError;

    fn from_str(s: &str) -> Result<Self> {
        let (area, line, device) = parse_triplet(s)?;
        Self::new(area, line, device)
    }
}

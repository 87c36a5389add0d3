//! KNX TP1 addressing.
//!
//! Three address families appear in a telegram:
//! - Source address of the sending device (Area.Line.Device)
//! - Individual address of a single target device (Area.Line.Device)
//! - Group address of a logical communication group (Main.Middle.Sub)
//!
//! All three use dotted-triplet notation with decimal components and pack
//! into the 16-bit wire fields at bytes 1-2 (source) and 3-4 (target).

use crate::error::{Result, TelegramError};

pub mod group;
pub mod individual;
pub mod source;

pub use group::GroupAddress;
pub use individual::IndividualAddress;
pub use source::SourceAddress;

/// Parse a dot-separated triplet of decimal components, each fitting a u8.
///
/// Zero-allocation parsing using iterators. Wrong component count or a
/// non-numeric/oversized component is a malformed address; field-width
/// checks beyond u8 stay with the address constructors.
pub(crate) fn parse_triplet(s: &str) -> Result<(u8, u8, u8)> {
    let mut parts = s.split('.');

    let first = parts
        .next()
        .and_then(|p| p.parse::<u8>().ok())
        .ok_or_else(TelegramError::malformed_address)?;

    let second = parts
        .next()
        .and_then(|p| p.parse::<u8>().ok())
        .ok_or_else(TelegramError::malformed_address)?;

    let third = parts
        .next()
        .and_then(|p| p.parse::<u8>().ok())
        .ok_or_else(TelegramError::malformed_address)?;

    // Ensure no extra parts
    if parts.next().is_some() {
        return Err(TelegramError::malformed_address());
    }

    Ok((first, second, third))
}

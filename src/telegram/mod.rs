//! KNX TP1 telegram assembly and parsing.
//!
//! This module composes the field codecs into complete telegrams and
//! provides zero-copy parsing of received ones.
//!
//! ## Telegram Structure
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────┐
//! │ Control (1)  │  Source (2)  │  Target (2)  │ Routing (1)  │
//! ├──────────────┴──────────────┴──────────────┴──────────────┤
//! │ Payload (1-16)                                Checksum (1)│
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The routing byte's low nibble declares the payload length minus one;
//! the checksum is the one's complement of the XOR fold of everything
//! before it.
//!
//! ## Example
//!
//! ```
//! use knx_tp1::{Command, GroupAddress, SourceAddress, TargetAddress, TelegramBuilder, TelegramFrame};
//! use knx_tp1::telegram::MAX_TELEGRAM_SIZE;
//!
//! let source = SourceAddress::new(3, 10, 20)?;
//! let target = GroupAddress::new(2, 3, 10)?;
//!
//! let mut buf = [0u8; MAX_TELEGRAM_SIZE];
//! let len = TelegramBuilder::new(source, TargetAddress::Group(target))
//!     .switch(Command::ValueWrite, true)
//!     .build(&mut buf)?;
//!
//! // Parse an incoming frame (zero-copy)
//! let telegram = TelegramFrame::parse(&buf[..len])?;
//! assert_eq!(telegram.target_group(), Some(target));
//! # Ok::<(), knx_tp1::TelegramError>(())
//! ```

use crate::addressing::{GroupAddress, IndividualAddress, SourceAddress};
use crate::dpt::{Command, DimmingPayload, SwitchPayload};
use crate::error::{Result, TelegramError};
use core::fmt;
use heapless::Vec;

pub mod checksum;
pub mod control;
pub mod routing;

pub use control::{ControlField, Priority};
pub use routing::RoutingField;

/// Size of the fixed telegram header: control + source + target + routing
pub const HEADER_SIZE: usize = 6;

/// Maximum payload size of a telegram
pub const MAX_PAYLOAD_SIZE: usize = 16;

/// Minimum size of a complete telegram (header + 1 payload byte + checksum)
pub const MIN_TELEGRAM_SIZE: usize = HEADER_SIZE + 2;

/// Maximum size of a complete telegram
pub const MAX_TELEGRAM_SIZE: usize = HEADER_SIZE + MAX_PAYLOAD_SIZE + 1;

/// Target address of a telegram
///
/// Bytes 3-4 hold either a physical or a group address; bit 7 of the
/// routing byte tells which. This enum keeps the two readings apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetAddress {
    /// A single physical device (routing bit 7 clear)
    Individual(IndividualAddress),
    /// A logical group (routing bit 7 set)
    Group(GroupAddress),
}

impl TargetAddress {
    /// Get the raw 16-bit field value
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        match self {
            Self::Individual(addr) => addr.raw(),
            Self::Group(addr) => addr.raw(),
        }
    }

    /// Check if this is a group target
    #[inline(always)]
    pub const fn is_group(self) -> bool {
        matches!(self, Self::Group(_))
    }
}

impl From<IndividualAddress> for TargetAddress {
    #[inline(always)]
    fn from(addr: IndividualAddress) -> Self {
        Self::Individual(addr)
    }
}

impl From<GroupAddress> for TargetAddress {
    #[inline(always)]
    fn from(addr: GroupAddress) -> Self {
        Self::Group(addr)
    }
}

impl fmt::Display for TargetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual(addr) => write!(f, "{addr}"),
            Self::Group(addr) => write!(f, "{addr}"),
        }
    }
}

/// Zero-copy view of a received telegram
///
/// References the underlying buffer directly; parsing validates the
/// declared length and the trailing checksum, the sole integrity check
/// applied on receipt.
#[derive(Debug)]
pub struct TelegramFrame<'a> {
    /// Reference to the complete telegram, trimmed to the declared length
    data: &'a [u8],
}

impl<'a> TelegramFrame<'a> {
    /// Parse a telegram from a byte slice.
    ///
    /// The slice may be longer than the telegram (trailing transport
    /// bytes are ignored); it must contain at least the length the
    /// routing byte declares.
    ///
    /// # Errors
    ///
    /// Returns a truncated-frame error if the buffer is shorter than the
    /// declared frame, or a checksum error if the trailing byte does not
    /// match the XOR fold of the rest.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < MIN_TELEGRAM_SIZE {
            crate::knx_log!(warn, "telegram too short: {} bytes", data.len());
            return Err(TelegramError::truncated_frame());
        }

        let routing = RoutingField::from(data[5]);
        let payload_len = routing.data_length() as usize + 1;
        let total = HEADER_SIZE + payload_len + 1;

        if data.len() < total {
            crate::knx_log!(
                warn,
                "telegram declares {} bytes but buffer holds {}",
                total,
                data.len()
            );
            return Err(TelegramError::truncated_frame());
        }

        let data = &data[..total];
        if !checksum::verify(data) {
            crate::knx_log!(warn, "telegram checksum mismatch, {} byte frame", total);
            return Err(TelegramError::checksum_mismatch());
        }

        Ok(Self { data })
    }

    /// Get the control field (byte 0)
    #[inline(always)]
    pub fn control(&self) -> ControlField {
        ControlField::from(self.data[0])
    }

    /// Get the source address (bytes 1-2)
    #[inline(always)]
    pub fn source(&self) -> SourceAddress {
        SourceAddress::from(u16::from_be_bytes([self.data[1], self.data[2]]))
    }

    /// Get the raw target field (bytes 3-4)
    #[inline(always)]
    pub fn target_raw(&self) -> u16 {
        u16::from_be_bytes([self.data[3], self.data[4]])
    }

    /// Get the target address, typed by the routing byte's address-type bit
    #[inline]
    pub fn target(&self) -> TargetAddress {
        if self.routing().is_group_address() {
            TargetAddress::Group(GroupAddress::from(self.target_raw()))
        } else {
            TargetAddress::Individual(IndividualAddress::from(self.target_raw()))
        }
    }

    /// Get the target as a group address (if applicable)
    #[inline]
    pub fn target_group(&self) -> Option<GroupAddress> {
        self.routing()
            .is_group_address()
            .then(|| GroupAddress::from(self.target_raw()))
    }

    /// Get the target as an individual address (if applicable)
    #[inline]
    pub fn target_individual(&self) -> Option<IndividualAddress> {
        (!self.routing().is_group_address()).then(|| IndividualAddress::from(self.target_raw()))
    }

    /// Get the routing byte (byte 5)
    #[inline(always)]
    pub fn routing(&self) -> RoutingField {
        RoutingField::from(self.data[5])
    }

    /// Get the payload bytes
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[HEADER_SIZE..self.data.len() - 1]
    }

    /// Get the trailing checksum byte
    #[inline(always)]
    pub fn checksum(&self) -> u8 {
        self.data[self.data.len() - 1]
    }

    /// Get the complete telegram bytes
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    /// Get the telegram length in bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the view holds no bytes (never true for a parsed telegram)
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Builder for assembling telegrams
///
/// Accumulates typed fields and emits the finished byte sequence in one
/// step: header, payload, computed routing byte and checksum. No partial
/// state ever reaches the output buffer.
#[derive(Debug)]
pub struct TelegramBuilder {
    control: ControlField,
    source: SourceAddress,
    target: TargetAddress,
    hop_count: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl TelegramBuilder {
    /// Create a new builder for the given endpoints.
    ///
    /// Starts with the default control field (first transmission, normal
    /// priority), hop count 6 and an empty payload; a payload must be
    /// supplied before building.
    pub fn new(source: SourceAddress, target: impl Into<TargetAddress>) -> Self {
        Self {
            control: ControlField::default(),
            source,
            target: target.into(),
            hop_count: 6,
            payload: Vec::new(),
        }
    }

    /// Set the control field
    pub fn control(mut self, control: ControlField) -> Self {
        self.control = control;
        self
    }

    /// Set the routing hop counter (saturates at 7 when the byte is built)
    pub fn hop_count(mut self, hop_count: u8) -> Self {
        self.hop_count = hop_count;
        self
    }

    /// Set the payload to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a payload-too-large frame error for more than 16 bytes.
    pub fn payload(mut self, data: &[u8]) -> Result<Self> {
        self.payload.clear();
        self.payload
            .extend_from_slice(data)
            .map_err(|_| TelegramError::payload_too_large())?;
        Ok(self)
    }

    /// Set the payload to a switch datapoint (2 bytes)
    pub fn switch(mut self, command: Command, state: bool) -> Self {
        self.payload.clear();
        // 2 bytes always fit the 16-byte payload buffer
        let _ = self
            .payload
            .extend_from_slice(&SwitchPayload::new(command, state).to_bytes());
        self
    }

    /// Set the payload to a dimming datapoint (3 bytes)
    pub fn dimming(mut self, command: Command, value: u8) -> Self {
        self.payload.clear();
        let _ = self
            .payload
            .extend_from_slice(&DimmingPayload::new(command, value).to_bytes());
        self
    }

    /// Calculate the total telegram size
    pub fn size(&self) -> usize {
        HEADER_SIZE + self.payload.len() + 1
    }

    /// Build the telegram into a buffer.
    ///
    /// Writes header, payload and checksum, returning the number of
    /// bytes written.
    ///
    /// # Errors
    ///
    /// Returns an empty-payload frame error if no payload was set, or a
    /// buffer-too-small error if `buf` cannot hold the telegram.
    pub fn build(&self, buf: &mut [u8]) -> Result<usize> {
        if self.payload.is_empty() {
            return Err(TelegramError::empty_payload());
        }

        let total = self.size();
        if buf.len() < total {
            return Err(TelegramError::buffer_too_small());
        }

        let routing = RoutingField::new(
            self.target.is_group(),
            self.hop_count,
            (self.payload.len() - 1) as u8,
        );

        buf[0] = self.control.raw();
        buf[1..3].copy_from_slice(&self.source.raw().to_be_bytes());
        buf[3..5].copy_from_slice(&self.target.raw().to_be_bytes());
        buf[5] = routing.raw();
        buf[HEADER_SIZE..total - 1].copy_from_slice(&self.payload);
        buf[total - 1] = checksum::checksum(&buf[..total - 1]);

        crate::knx_log!(trace, "telegram built, {} bytes", total);

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_builder() -> TelegramBuilder {
        let source = SourceAddress::new(15, 15, 20).unwrap();
        let target = GroupAddress::new(0, 0, 3).unwrap();
        TelegramBuilder::new(source, target)
            .control(ControlField::new(false, Priority::Auto))
            .hop_count(6)
            .dimming(Command::ValueWrite, 153)
    }

    #[test]
    fn test_build_sample_telegram() {
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];
        let len = sample_builder().build(&mut buf).unwrap();

        assert_eq!(len, 10);
        assert_eq!(buf[0], 0xBC); // control: auto, first transmission
        assert_eq!(&buf[1..3], &[0xFF, 0x14]); // source 15.15.20
        assert_eq!(&buf[3..5], &[0x00, 0x03]); // group 0.0.3
        assert_eq!(buf[5], 0xE2); // group, hop 6, length nibble 2
        assert_eq!(&buf[6..9], &[0x00, 0x80, 0x99]); // value-write, 153

        // Checksum folds the whole frame to 0xFF
        let fold = buf[..len].iter().fold(0u8, |acc, b| acc ^ b);
        assert_eq!(fold, 0xFF);
    }

    #[test]
    fn test_parse_round_trip() {
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];
        let len = sample_builder().build(&mut buf).unwrap();

        let telegram = TelegramFrame::parse(&buf[..len]).unwrap();
        assert_eq!(telegram.len(), 10);
        assert!(!telegram.control().retransmission());
        assert_eq!(telegram.control().priority(), Priority::Auto);
        assert_eq!(telegram.source(), SourceAddress::new(15, 15, 20).unwrap());
        assert_eq!(
            telegram.target_group(),
            Some(GroupAddress::new(0, 0, 3).unwrap())
        );
        assert_eq!(telegram.target_individual(), None);
        assert_eq!(telegram.routing().hop_count(), 6);
        assert_eq!(telegram.payload(), &[0x00, 0x80, 0x99]);
        assert_eq!(telegram.checksum(), buf[len - 1]);
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let mut buf = [0u8; MAX_TELEGRAM_SIZE + 4];
        let len = sample_builder().build(&mut buf).unwrap();

        // Parse from the full buffer: declared length wins
        let telegram = TelegramFrame::parse(&buf).unwrap();
        assert_eq!(telegram.len(), len);
    }

    #[test]
    fn test_parse_truncated() {
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];
        let len = sample_builder().build(&mut buf).unwrap();

        let result = TelegramFrame::parse(&buf[..len - 1]);
        assert!(matches!(result, Err(TelegramError::Frame(e)) if e.is_truncated()));

        let result = TelegramFrame::parse(&buf[..3]);
        assert!(matches!(result, Err(TelegramError::Frame(e)) if e.is_truncated()));
    }

    #[test]
    fn test_parse_corrupted_checksum() {
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];
        let len = sample_builder().build(&mut buf).unwrap();
        buf[2] ^= 0x40;

        let result = TelegramFrame::parse(&buf[..len]);
        assert!(matches!(result, Err(TelegramError::Frame(e)) if e.is_checksum_mismatch()));
    }

    #[test]
    fn test_individual_target() {
        let source = SourceAddress::new(3, 10, 20).unwrap();
        let target = IndividualAddress::new(3, 10, 21).unwrap();
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];
        let len = TelegramBuilder::new(source, target)
            .switch(Command::ValueResponse, false)
            .build(&mut buf)
            .unwrap();

        let telegram = TelegramFrame::parse(&buf[..len]).unwrap();
        assert!(!telegram.routing().is_group_address());
        assert_eq!(telegram.target(), TargetAddress::Individual(target));
        assert_eq!(telegram.target_group(), None);
    }

    #[test]
    fn test_switch_payload_length_nibble() {
        let source = SourceAddress::new(1, 1, 1).unwrap();
        let target = GroupAddress::new(1, 2, 3).unwrap();
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];
        let len = TelegramBuilder::new(source, target)
            .switch(Command::ValueWrite, true)
            .build(&mut buf)
            .unwrap();

        assert_eq!(len, 9); // 6 header + 2 payload + checksum
        let telegram = TelegramFrame::parse(&buf[..len]).unwrap();
        assert_eq!(telegram.routing().data_length(), 1);
        assert_eq!(telegram.payload().len(), 2);
    }

    #[test]
    fn test_build_empty_payload() {
        let source = SourceAddress::new(1, 1, 1).unwrap();
        let target = GroupAddress::new(1, 2, 3).unwrap();
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];

        let result = TelegramBuilder::new(source, target).build(&mut buf);
        assert!(matches!(result, Err(TelegramError::Frame(_))));
    }

    #[test]
    fn test_payload_too_large() {
        let source = SourceAddress::new(1, 1, 1).unwrap();
        let target = GroupAddress::new(1, 2, 3).unwrap();

        let result = TelegramBuilder::new(source, target).payload(&[0u8; 17]);
        assert!(matches!(result, Err(TelegramError::Frame(e)) if e.is_payload_too_large()));
    }

    #[test]
    fn test_max_payload() {
        let source = SourceAddress::new(1, 1, 1).unwrap();
        let target = GroupAddress::new(1, 2, 3).unwrap();
        let mut buf = [0u8; MAX_TELEGRAM_SIZE];

        let len = TelegramBuilder::new(source, target)
            .payload(&[0xABu8; MAX_PAYLOAD_SIZE])
            .unwrap()
            .build(&mut buf)
            .unwrap();

        assert_eq!(len, MAX_TELEGRAM_SIZE);
        let telegram = TelegramFrame::parse(&buf).unwrap();
        assert_eq!(telegram.routing().data_length(), 15);
        assert_eq!(telegram.payload().len(), MAX_PAYLOAD_SIZE);
    }

    #[test]
    fn test_build_buffer_too_small() {
        let mut buf = [0u8; 4];
        let result = sample_builder().build(&mut buf);
        assert!(matches!(result, Err(TelegramError::Frame(e)) if e.is_buffer_too_small()));
    }

    #[test]
    fn test_builder_size() {
        assert_eq!(sample_builder().size(), 10);
    }
}

//! Error types for telegram codec operations.
//!
//! This module provides structured error types with backtraces (when std is
//! enabled) and helper methods for error classification.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for telegram operations.
pub type Result<T> = core::result::Result<T, TelegramError>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Addressing error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum AddressingErrorKind {
    MalformedAddress,
    OutOfRange,
}

/// Frame error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum FrameErrorKind {
    ChecksumMismatch,
    Truncated,
    BufferTooSmall,
    PayloadTooLarge,
    EmptyPayload,
}

/// Payload error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum PayloadErrorKind {
    ReservedCommand,
    InvalidData,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// Telegram codec error types.
///
/// This is the main error type returned by all codec operations. It contains
/// a backtrace (when the std feature is enabled) and detailed error
/// information through helper methods.
#[derive(Debug)]
#[cfg_attr(all(feature = "defmt", not(feature = "std")), derive(defmt::Format))]
pub enum TelegramError {
    /// Addressing errors (triplet parsing, component ranges)
    Addressing(AddressingError),
    /// Frame errors (checksum, lengths, buffer sizes)
    Frame(FrameError),
    /// Datapoint payload errors (command codes, payload shape)
    Payload(PayloadError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Addressing error with optional backtrace
#[derive(Debug)]
#[cfg_attr(all(feature = "defmt", not(feature = "std")), derive(defmt::Format))]
pub struct AddressingError {
    kind: AddressingErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl AddressingError {
    pub(crate) fn new(kind: AddressingErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if the textual address notation failed to parse
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::MalformedAddress)
    }

    /// Check if an address component exceeded its field width
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, AddressingErrorKind::OutOfRange)
    }
}

/// Frame error with optional backtrace
#[derive(Debug)]
#[cfg_attr(all(feature = "defmt", not(feature = "std")), derive(defmt::Format))]
pub struct FrameError {
    kind: FrameErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl FrameError {
    pub(crate) fn new(kind: FrameErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if the stored checksum did not match the computed one
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self.kind, FrameErrorKind::ChecksumMismatch)
    }

    /// Check if the input buffer was shorter than the declared frame
    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, FrameErrorKind::Truncated)
    }

    /// Check if the output buffer was too small
    pub fn is_buffer_too_small(&self) -> bool {
        matches!(self.kind, FrameErrorKind::BufferTooSmall)
    }

    /// Check if the payload exceeded the 16-byte telegram ceiling
    pub fn is_payload_too_large(&self) -> bool {
        matches!(self.kind, FrameErrorKind::PayloadTooLarge)
    }
}

/// Payload error with optional backtrace
#[derive(Debug)]
#[cfg_attr(all(feature = "defmt", not(feature = "std")), derive(defmt::Format))]
pub struct PayloadError {
    kind: PayloadErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl PayloadError {
    pub(crate) fn new(kind: PayloadErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if decode hit a protocol-reserved command code
    pub fn is_reserved_command(&self) -> bool {
        matches!(self.kind, PayloadErrorKind::ReservedCommand)
    }
}

// =============================================================================
// Convenience Constructors for TelegramError
// =============================================================================

impl TelegramError {
    // Addressing errors
    pub(crate) fn malformed_address() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::MalformedAddress))
    }

    pub(crate) fn address_out_of_range() -> Self {
        Self::Addressing(AddressingError::new(AddressingErrorKind::OutOfRange))
    }

    // Frame errors (hot path, no backtrace capture)
    #[inline]
    pub(crate) const fn checksum_mismatch() -> Self {
        Self::Frame(FrameError { kind: FrameErrorKind::ChecksumMismatch, #[cfg(feature = "std")] backtrace: Backtrace::disabled() })
    }

    #[inline]
    pub(crate) const fn truncated_frame() -> Self {
        Self::Frame(FrameError { kind: FrameErrorKind::Truncated, #[cfg(feature = "std")] backtrace: Backtrace::disabled() })
    }

    #[inline]
    pub(crate) const fn buffer_too_small() -> Self {
        Self::Frame(FrameError { kind: FrameErrorKind::BufferTooSmall, #[cfg(feature = "std")] backtrace: Backtrace::disabled() })
    }

    pub(crate) fn payload_too_large() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::PayloadTooLarge))
    }

    pub(crate) fn empty_payload() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::EmptyPayload))
    }

    // Payload errors
    pub(crate) fn reserved_command() -> Self {
        Self::Payload(PayloadError::new(PayloadErrorKind::ReservedCommand))
    }

    pub(crate) fn invalid_payload_data() -> Self {
        Self::Payload(PayloadError::new(PayloadErrorKind::InvalidData))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for TelegramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelegramError::Addressing(e) => write!(f, "Addressing error: {:?}", e.kind),
            TelegramError::Frame(e) => write!(f, "Frame error: {:?}", e.kind),
            TelegramError::Payload(e) => write!(f, "Payload error: {:?}", e.kind),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for TelegramError {}

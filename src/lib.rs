#![cfg_attr(all(not(test), not(feature = "std")), no_std)]

//! # knx-tp1
//!
//! KNX TP1 telegram codec for embedded systems.
//!
//! This crate provides a `no_std` implementation of the fixed-layout KNX
//! twisted-pair telegram: control field, source and target addressing,
//! the routing byte, common datapoint payloads and the frame checksum.
//! It only consumes and produces in-memory byte sequences; the physical
//! transport (TPUART framing, bus arbitration) is left to the caller.
//!
//! ## Features
//!
//! - Source, individual and group addressing with dotted-triplet notation
//! - Control field packing (repeat flag, priority class)
//! - Routing byte packing (address type, hop counter, payload length)
//! - Switch and dimming datapoint payloads
//! - Checksum generation and verification
//! - Zero-copy telegram parsing
//!
//! ## Example
//!
//! ```
//! use knx_tp1::{
//!     Command, ControlField, GroupAddress, Priority, SourceAddress,
//!     TargetAddress, TelegramBuilder, TelegramFrame,
//! };
//! use knx_tp1::telegram::MAX_TELEGRAM_SIZE;
//!
//! let source: SourceAddress = "15.15.20".parse()?;
//! let target: GroupAddress = "0.0.3".parse()?;
//!
//! let mut buf = [0u8; MAX_TELEGRAM_SIZE];
//! let len = TelegramBuilder::new(source, TargetAddress::Group(target))
//!     .control(ControlField::new(false, Priority::Auto))
//!     .hop_count(6)
//!     .dimming(Command::ValueWrite, 153)
//!     .build(&mut buf)?;
//!
//! let telegram = TelegramFrame::parse(&buf[..len])?;
//! assert_eq!(telegram.source(), source);
//! assert_eq!(telegram.control().priority(), Priority::Auto);
//! # Ok::<(), knx_tp1::TelegramError>(())
//! ```

pub mod addressing;
pub mod dpt;
pub mod error;
pub mod telegram;

// Macro modules (must be declared before use)
#[macro_use]
pub mod logging;

// Re-export commonly used types
#[doc(inline)]
pub use addressing::{GroupAddress, IndividualAddress, SourceAddress};
#[doc(inline)]
pub use dpt::{Command, DimmingPayload, SwitchPayload};
#[doc(inline)]
pub use error::{Result, TelegramError};
#[doc(inline)]
pub use telegram::{
    ControlField, Priority, RoutingField, TargetAddress, TelegramBuilder, TelegramFrame,
};

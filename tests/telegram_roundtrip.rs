//! Integration tests for the knx-tp1 telegram codec.
//!
//! These tests drive the full assembly and parse path through the public
//! API only: addresses from text notation, typed field codecs, payload
//! encoding, checksum stamping and receipt-side verification.

use knx_tp1::telegram::{checksum, MAX_TELEGRAM_SIZE};
use knx_tp1::{
    Command, ControlField, DimmingPayload, GroupAddress, IndividualAddress, Priority,
    SourceAddress, SwitchPayload, TargetAddress, TelegramBuilder, TelegramFrame,
};

#[test]
fn test_dimming_telegram_end_to_end() {
    println!("\n=== Test: Dimming Telegram End To End ===");

    let source: SourceAddress = "15.15.20".parse().expect("source address");
    assert_eq!(source.raw(), 0xFF14);
    assert!(source.is_valid());

    let target: GroupAddress = "0.0.3".parse().expect("group address");
    assert_eq!(target.raw(), 0x0003);

    let mut buf = [0u8; MAX_TELEGRAM_SIZE];
    let len = TelegramBuilder::new(source, TargetAddress::Group(target))
        .control(ControlField::new(false, Priority::Auto))
        .hop_count(6)
        .dimming(Command::ValueWrite, 153)
        .build(&mut buf)
        .expect("build telegram");
    println!("✓ Telegram built ({len} bytes)");

    assert_eq!(len, 10);
    assert_eq!(
        &buf[..9],
        &[0xBC, 0xFF, 0x14, 0x00, 0x03, 0xE2, 0x00, 0x80, 0x99]
    );

    // Stored checksum matches a fresh computation over the 9 prior bytes
    assert_eq!(buf[9], checksum::checksum(&buf[..9]));

    // XOR-folding the complete frame yields all ones
    let fold = buf[..len].iter().fold(0u8, |acc, b| acc ^ b);
    assert_eq!(fold, 0xFF);
    println!("✓ Checksum verified (fold = 0x{fold:02X})");

    // Mirror path: every field decodes back to what went in
    let telegram = TelegramFrame::parse(&buf[..len]).expect("parse telegram");
    assert!(!telegram.control().retransmission());
    assert_eq!(telegram.control().priority(), Priority::Auto);
    assert_eq!(telegram.source(), source);
    assert_eq!(telegram.target_group(), Some(target));
    assert!(telegram.routing().is_group_address());
    assert_eq!(telegram.routing().hop_count(), 6);
    assert_eq!(telegram.routing().data_length(), 2);

    let payload = DimmingPayload::decode(telegram.payload()).expect("decode payload");
    assert_eq!(payload.command(), Command::ValueWrite);
    assert_eq!(payload.value(), 153);
    println!("✓ Round trip complete");
}

#[test]
fn test_switch_telegram_to_individual_target() {
    let source: SourceAddress = "3.10.20".parse().expect("source address");
    let target: IndividualAddress = "3.10.21".parse().expect("individual address");

    let mut buf = [0u8; MAX_TELEGRAM_SIZE];
    let len = TelegramBuilder::new(source, target)
        .control(ControlField::new(true, Priority::Normal))
        .hop_count(7)
        .switch(Command::ValueResponse, false)
        .build(&mut buf)
        .expect("build telegram");

    assert_eq!(len, 9); // 6 header + 2 payload + checksum

    let telegram = TelegramFrame::parse(&buf[..len]).expect("parse telegram");
    assert!(telegram.control().retransmission());
    assert_eq!(telegram.control().priority(), Priority::Normal);
    assert_eq!(telegram.target_individual(), Some(target));
    assert_eq!(telegram.target_group(), None);
    assert_eq!(telegram.routing().hop_count(), 7);

    let payload = SwitchPayload::decode(telegram.payload()).expect("decode payload");
    assert_eq!(payload.command(), Command::ValueResponse);
    assert!(!payload.state());
}

#[test]
fn test_source_validity_gate() {
    // Device 0 parses and packs, but must be refused as a sender
    let reserved: SourceAddress = "3.10.0".parse().expect("parsable address");
    assert!(!reserved.is_valid());

    let source: SourceAddress = "3.10.20".parse().expect("source address");
    assert!(source.is_valid());
}

#[test]
fn test_corrupted_frame_rejected() {
    let source = SourceAddress::new(1, 1, 10).unwrap();
    let target = GroupAddress::new(1, 0, 40).unwrap();

    let mut buf = [0u8; MAX_TELEGRAM_SIZE];
    let len = TelegramBuilder::new(source, target)
        .switch(Command::ValueWrite, true)
        .build(&mut buf)
        .unwrap();

    // Flip one payload bit: the stored checksum no longer holds
    buf[7] ^= 0x10;
    assert!(TelegramFrame::parse(&buf[..len]).is_err());
}

#[test]
fn test_truncated_frame_rejected() {
    let source = SourceAddress::new(1, 1, 10).unwrap();
    let target = GroupAddress::new(1, 0, 40).unwrap();

    let mut buf = [0u8; MAX_TELEGRAM_SIZE];
    let len = TelegramBuilder::new(source, target)
        .payload(&[0x00, 0x80, 0x01, 0x02])
        .unwrap()
        .build(&mut buf)
        .unwrap();

    // Drop the checksum byte: the routing byte promises more than we hand over
    assert!(TelegramFrame::parse(&buf[..len - 1]).is_err());
}

#[test]
fn test_reserved_command_rejected_on_decode() {
    // Command nibble 0b0111 is protocol-reserved
    let result = SwitchPayload::decode(&[0x01, 0xC0]);
    assert!(result.is_err());
}

#[test]
fn test_malformed_address_notation() {
    assert!("15.15".parse::<SourceAddress>().is_err());
    assert!("1.2.3.4".parse::<GroupAddress>().is_err());
    assert!("a.b.c".parse::<IndividualAddress>().is_err());
    assert!("16.0.1".parse::<SourceAddress>().is_err());
    assert!("0.8.1".parse::<GroupAddress>().is_err());
}

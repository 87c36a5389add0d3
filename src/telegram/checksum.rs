//! Telegram checksum (trailing byte).
//!
//! The checksum is the one's complement of the XOR fold of every byte
//! preceding it. XOR-folding a complete valid frame therefore yields 0xFF
//! (`x ^ !x == 0xFF`), which is what [`verify`] checks on receipt.

/// Compute the checksum over the given bytes.
///
/// Callers pass the frame contents without the checksum slot, i.e.
/// `checksum(&frame[..frame.len() - 1])` when stamping a buffer whose
/// last byte is reserved for the checksum.
///
/// # Examples
///
/// ```
/// use knx_tp1::telegram::checksum::{checksum, verify};
///
/// let mut frame = [0xBC, 0xFF, 0x14, 0x00, 0x03, 0xE2, 0x00, 0x80, 0x99, 0x00];
/// let last = frame.len() - 1;
/// frame[last] = checksum(&frame[..last]);
/// assert!(verify(&frame));
/// ```
pub const fn checksum(data: &[u8]) -> u8 {
    let mut xor_sum = 0u8;
    let mut i = 0;
    while i < data.len() {
        xor_sum ^= data[i];
        i += 1;
    }

    // Checksum equals 1's complement of the data bytes' XOR sum
    !xor_sum
}

/// Verify the trailing checksum of a complete frame.
///
/// Returns false for frames shorter than 2 bytes; there is nothing to
/// protect below that.
pub const fn verify(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }
    frame[frame.len() - 1] == checksum(frame.split_at(frame.len() - 1).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_empty() {
        assert_eq!(checksum(&[]), 0xFF);
    }

    #[test]
    fn test_checksum_single_byte() {
        assert_eq!(checksum(&[0xFF]), 0x00);
        assert_eq!(checksum(&[0x00]), 0xFF);
        assert_eq!(checksum(&[0xA5]), 0x5A);
    }

    #[test]
    fn test_checksum_xor_fold() {
        // 0x01 ^ 0x02 ^ 0x04 = 0x07, complement 0xF8
        assert_eq!(checksum(&[0x01, 0x02, 0x04]), 0xF8);
    }

    #[test]
    fn test_verify_accepts_stamped_frames() {
        let mut frame = [0x12u8, 0x34, 0x56, 0x78, 0x00];
        let last = frame.len() - 1;
        frame[last] = checksum(&frame[..last]);
        assert!(verify(&frame));
    }

    #[test]
    fn test_verify_rejects_corruption() {
        let mut frame = [0x12u8, 0x34, 0x56, 0x78, 0x00];
        let last = frame.len() - 1;
        frame[last] = checksum(&frame[..last]);
        frame[1] ^= 0x01;
        assert!(!verify(&frame));
    }

    #[test]
    fn test_verify_too_short() {
        assert!(!verify(&[]));
        assert!(!verify(&[0xFF]));
    }

    #[test]
    fn test_stamped_frame_folds_to_all_ones() {
        // XOR over payload plus its complemented fold is always 0xFF
        let mut frame = [0xBCu8, 0xFF, 0x14, 0x00, 0x03, 0xE2, 0x00, 0x80, 0x99, 0x00];
        let last = frame.len() - 1;
        frame[last] = checksum(&frame[..last]);

        let fold = frame.iter().fold(0u8, |acc, b| acc ^ b);
        assert_eq!(fold, 0xFF);
    }
}

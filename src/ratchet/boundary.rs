//! Counter byte arithmetic shared by the single-step and seek advances.
//!
//! Byte `j` of the counter (most significant first) governs part `j`. When a
//! carry or a seek changes byte `j`, every finer part that no later byte
//! change will reseed has to be derived again from part `j`.

use crate::ratchet::RATCHET_PARTS;

const LAST_PART: usize = RATCHET_PARTS - 1;

/// Bit shift that isolates counter byte `byte`.
pub(super) fn byte_shift(byte: usize) -> u32 {
    ((LAST_PART - byte) * 8) as u32
}

/// The most significant part whose counter byte changed when the counter
/// was incremented to `counter`.
///
/// Each trailing zero byte means the carry travelled one part further up.
/// A counter that wrapped to zero reaches part 0.
pub(super) fn carry_part(counter: u32) -> usize {
    let zero_bytes = (counter.trailing_zeros() / 8) as usize;
    LAST_PART - zero_bytes.min(LAST_PART)
}

/// The finest part to reseed from part `byte` once a seek lands on
/// `target`'s value of that byte.
///
/// Part `byte + 1` always needs it. Each zero byte of `target` directly below
/// means no later iteration of the seek touches the next part, so the reseed
/// reaches one part further. The last part is the floor.
pub(super) fn reseed_limit(target: u32, byte: usize) -> usize {
    let bytes = target.to_be_bytes();
    let mut limit = byte + 1;
    while limit < LAST_PART && bytes[limit] == 0 {
        limit += 1;
    }

    limit.min(LAST_PART)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_shift() {
        assert_eq!(byte_shift(0), 24);
        assert_eq!(byte_shift(1), 16);
        assert_eq!(byte_shift(2), 8);
        assert_eq!(byte_shift(3), 0);
    }

    #[test]
    fn test_carry_part_without_carry() {
        assert_eq!(carry_part(1), 3);
        assert_eq!(carry_part(0x1234_5601), 3);
    }

    #[test]
    fn test_carry_part_cascades() {
        assert_eq!(carry_part(0x0000_0100), 2);
        assert_eq!(carry_part(0x0001_0000), 1);
        assert_eq!(carry_part(0x0100_0000), 0);
        assert_eq!(carry_part(0xff00_0000), 0);
    }

    #[test]
    fn test_carry_part_on_wrap() {
        assert_eq!(carry_part(0), 0);
    }

    #[test]
    fn test_reseed_limit_top_byte() {
        assert_eq!(reseed_limit(0x0100_0000, 0), 3);
        assert_eq!(reseed_limit(0x0100_00ff, 0), 3);
        assert_eq!(reseed_limit(0x0100_0100, 0), 2);
        assert_eq!(reseed_limit(0x0101_0000, 0), 1);
    }

    #[test]
    fn test_reseed_limit_middle_bytes() {
        assert_eq!(reseed_limit(0x0001_0000, 1), 3);
        assert_eq!(reseed_limit(0x0001_0100, 1), 2);
        assert_eq!(reseed_limit(0x0000_0100, 2), 3);
    }

    #[test]
    fn test_reseed_limit_last_byte() {
        assert_eq!(reseed_limit(0x0000_0001, 3), 3);
        assert_eq!(reseed_limit(0xffff_ffff, 3), 3);
    }
}

//! Packed-BCD codec for the BQ32000 time registers.
//!
//! Every time register stores two decimal digits: a tens nibble in the high
//! bits and a units nibble in the low bits. The tens nibble is narrower for
//! fields with a smaller range (hours max out at 23, so their tens nibble
//! is 2 bits; months at 12, so 1 bit), and some registers keep an unrelated
//! control bit in the remaining high bits.
//!
//! Both directions are deliberately permissive: decoding never validates
//! the nibbles (garbage register content yields an out-of-range but
//! well-defined integer), and encoding silently wraps out-of-range values
//! through the mask/modulo arithmetic. Range enforcement is the caller's
//! problem, matching the wire format.

/// Decode a packed-BCD register byte into its decimal value.
///
/// `tens_mask` selects the tens nibble in the register byte, `tens_shift`
/// moves it down, `units_mask` selects the units nibble.
pub(crate) fn decode(byte: u8, tens_mask: u8, tens_shift: u8, units_mask: u8) -> u8 {
    let tens = (byte & tens_mask) >> tens_shift;
    let units = byte & units_mask;
    tens * 10 + units
}

/// Encode a decimal value as packed BCD, preserving co-located control bits.
///
/// `tens_mask` here is the nibble-value mask (0x7 for seconds, 0x3 for
/// hours, ...), applied before the tens digit is shifted into the high
/// nibble. Bits of `current` selected by `keep_mask` are carried into the
/// result unchanged; pass `keep_mask = 0` for registers the time field owns
/// entirely.
pub(crate) fn encode(value: u8, tens_mask: u8, units_mask: u8, keep_mask: u8, current: u8) -> u8 {
    let tens = (value / 10) & tens_mask;
    let units = (value % 10) & units_mask;
    (current & keep_mask) | (tens << 4) | units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{
        DATE_TENS_MASK, HOURS_TENS_MASK, MINUTES_TENS_MASK, MONTH_TENS_MASK, SECONDS_TENS_MASK,
        STOP_BIT, UNITS_MASK, YEAR_TENS_MASK,
    };

    fn round_trip(value: u8, encode_tens: u8, decode_tens: u8) -> u8 {
        let byte = encode(value, encode_tens, UNITS_MASK, 0, 0);
        decode(byte, decode_tens, 4, UNITS_MASK)
    }

    #[test]
    fn seconds_and_minutes_round_trip() {
        for v in 0..60 {
            assert_eq!(round_trip(v, 0x7, SECONDS_TENS_MASK), v);
            assert_eq!(round_trip(v, 0x7, MINUTES_TENS_MASK), v);
        }
    }

    #[test]
    fn hours_round_trip() {
        for v in 0..24 {
            assert_eq!(round_trip(v, 0x3, HOURS_TENS_MASK), v);
        }
    }

    #[test]
    fn date_round_trip() {
        for v in 1..32 {
            assert_eq!(round_trip(v, 0x3, DATE_TENS_MASK), v);
        }
    }

    #[test]
    fn month_round_trip() {
        for v in 1..13 {
            assert_eq!(round_trip(v, 0x1, MONTH_TENS_MASK), v);
        }
    }

    #[test]
    fn year_round_trip() {
        for v in 0..100 {
            assert_eq!(round_trip(v, 0xF, YEAR_TENS_MASK), v);
        }
    }

    #[test]
    fn encode_keeps_set_control_bit() {
        let byte = encode(42, 0x7, UNITS_MASK, STOP_BIT, STOP_BIT | 0x15);
        assert_eq!(byte, STOP_BIT | 0x42);
    }

    #[test]
    fn encode_keeps_clear_control_bit() {
        let byte = encode(42, 0x7, UNITS_MASK, STOP_BIT, 0x15);
        assert_eq!(byte, 0x42);
    }

    #[test]
    fn decode_is_permissive_about_invalid_nibbles() {
        // 0x7F is not valid BCD; it still decodes to a defined integer.
        assert_eq!(decode(0x7F, SECONDS_TENS_MASK, 4, UNITS_MASK), 85);
    }

    #[test]
    fn encode_wraps_out_of_range_values() {
        // 61 seconds: tens digit 6 exceeds the 3-bit nibble and wraps.
        let byte = encode(61, 0x7, UNITS_MASK, 0, 0);
        assert_eq!(byte, 0x61);
        // 130 wraps through the tens mask instead of failing.
        let byte = encode(130, 0x7, UNITS_MASK, 0, 0);
        assert_eq!(byte, 0x50);
    }
}

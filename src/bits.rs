//! Bit twiddling for building shift register bytes.

/// Return `x` with bit `n` (counting from the least significant bit as 0) set to `bit`, like
/// Arduino's `bitWrite`. Positions past the top of the byte leave `x` unchanged.
///
/// ```
/// use simpleio::bit_write;
/// let leds = bit_write(0b0000_0000, 3, true);
/// assert_eq!(leds, 0b0000_1000);
/// assert_eq!(bit_write(leds, 3, false), 0);
/// ```
pub fn bit_write(x: u8, n: u8, bit: bool) -> u8 {
    let mask = 1u8.checked_shl(u32::from(n)).unwrap_or(0);
    if bit {
        x | mask
    } else {
        x & !mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn set_and_clear() {
        assert_eq!(bit_write(0, 0, true), 0b0000_0001);
        assert_eq!(bit_write(0, 7, true), 0b1000_0000);
        assert_eq!(bit_write(0xFF, 0, false), 0xFE);
        assert_eq!(bit_write(0xFF, 7, false), 0x7F);
    }

    #[test]
    fn idempotent() {
        assert_eq!(bit_write(0b0100, 2, true), 0b0100);
        assert_eq!(bit_write(0b1011, 2, false), 0b1011);
    }

    #[test]
    fn out_of_byte_position_ignored() {
        assert_eq!(bit_write(0xA5, 8, true), 0xA5);
        assert_eq!(bit_write(0xA5, 255, false), 0xA5);
    }

    proptest! {
        #[test]
        fn touches_only_one_bit(x in any::<u8>(), n in 0u8..8, bit in any::<bool>()) {
            let written = bit_write(x, n, bit);
            prop_assert_eq!(written & 1 << n != 0, bit);
            prop_assert_eq!(written & !(1 << n), x & !(1 << n));
        }
    }
}

//! Bit-banged shift register transfers.
//!
//! These move data one bit per clock pulse over a pair of GPIO lines, the way an Arduino
//! `shiftOut`/`shiftIn` does, so they can talk to parts like the 74HC595 (serial-in,
//! parallel-out) and 74HC165 (parallel-in, serial-out) without an SPI peripheral.
//!
//! No settling delays are inserted between line transitions; if the receiving part needs them,
//! slow the lines down in the HAL or wrap them in a delaying `OutputPin`.
//!
//! The data and clock arguments are ordered data-first to match Arduino.

use core::convert::Infallible;

use hal::digital::v2::{InputPin, OutputPin};

/// The widest transfer `shift_out_bits` can perform.
pub const MAX_BITCOUNT: u8 = 32;

/// The order in which bits of a value are put on, or taken off, the data line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// The most significant bit is transferred first.
    MsbFirst,
    /// The least significant bit is transferred first.
    LsbFirst,
}

impl Default for BitOrder {
    fn default() -> Self {
        BitOrder::MsbFirst
    }
}

impl BitOrder {
    /// The index of the bit transferred on step `step` of a `width`-bit transfer.
    fn bit_index(self, step: u8, width: u8) -> u8 {
        match self {
            BitOrder::MsbFirst => width - 1 - step,
            BitOrder::LsbFirst => step,
        }
    }
}

/// The union of all errors that may occur during a transfer. The errors reported by the lines
/// themselves are passed through untouched, tagged with the line that raised them.
///
/// Nothing is retried: a transfer that fails part way has left the receiving device out of step,
/// and the caller must drive a full transfer (or latch/reset sequence) again.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftError<DE, CE, LE = Infallible> {
    /// The data line threw an error.
    Data(DE),
    /// The clock line threw an error.
    Clock(CE),
    /// The latch line threw an error.
    Latch(LE),
    /// A transfer width above [`MAX_BITCOUNT`] was requested. No line was touched.
    BitCount(u8),
}

impl<DE, CE, LE> ShiftError<DE, CE, LE> {
    fn from_data(e: DE) -> Self {
        Self::Data(e)
    }
    fn from_clock(e: CE) -> Self {
        Self::Clock(e)
    }
    fn from_latch(e: LE) -> Self {
        Self::Latch(e)
    }
}

fn shift_bits<D, C, LE>(
    data: &mut D,
    clock: &mut C,
    value: u32,
    bitcount: u8,
    order: BitOrder,
) -> Result<(), ShiftError<D::Error, C::Error, LE>>
where
    D: OutputPin,
    C: OutputPin,
{
    if bitcount > MAX_BITCOUNT {
        return Err(ShiftError::BitCount(bitcount));
    }
    for step in 0..bitcount {
        // Data is set up before the rising edge, which the receiver latches on.
        let level = if value & 1 << order.bit_index(step, bitcount) != 0 {
            data.set_high()
        } else {
            data.set_low()
        };
        level.map_err(ShiftError::<_, C::Error, LE>::from_data)?;
        clock
            .set_high()
            .map_err(ShiftError::<D::Error, _, LE>::from_clock)?;
        clock
            .set_low()
            .map_err(ShiftError::<D::Error, _, LE>::from_clock)?;
    }
    Ok(())
}

/// Shift out one byte of `value` on `data`, pulsing `clock` high then low once per bit.
///
/// Only the low 8 bits of `value` are sent, so `0x1FF` and `0xFF` produce identical traffic. Each
/// call makes exactly 8 writes to `data` and 16 to `clock`.
///
/// ```
/// # use simpleio::line::noop::NoopLine;
/// use simpleio::{shift_out, BitOrder};
/// # let (mut data, mut clock) = (NoopLine, NoopLine);
/// shift_out(&mut data, &mut clock, 0b1011_0010, BitOrder::MsbFirst).unwrap();
/// ```
pub fn shift_out<D, C>(
    data: &mut D,
    clock: &mut C,
    value: u32,
    order: BitOrder,
) -> Result<(), ShiftError<D::Error, C::Error>>
where
    D: OutputPin,
    C: OutputPin,
{
    shift_bits(data, clock, value & 0xFF, 8, order)
}

/// Shift out the low `bitcount` bits of `value`, using the same per-bit protocol as
/// [`shift_out`]. `bitcount` must be in `0..=32`; a zero-width transfer touches no line.
pub fn shift_out_bits<D, C>(
    data: &mut D,
    clock: &mut C,
    value: u32,
    bitcount: u8,
    order: BitOrder,
) -> Result<(), ShiftError<D::Error, C::Error>>
where
    D: OutputPin,
    C: OutputPin,
{
    shift_bits(data, clock, value, bitcount, order)
}

/// Shift in one byte from `data`, pulsing `clock` once per bit.
///
/// The data line is sampled while the clock is high, between the rising and falling edge. This
/// differs from [`shift_out`], which changes data before raising the clock; parts that present
/// their next bit on the falling edge (74HC165 and friends) read correctly with this ordering.
///
/// ```
/// # use simpleio::line::noop::NoopLine;
/// use simpleio::{shift_in, BitOrder};
/// # let (data, mut clock) = (NoopLine, NoopLine);
/// let value: u8 = shift_in(&data, &mut clock, BitOrder::LsbFirst).unwrap();
/// # assert_eq!(value, 0);
/// ```
pub fn shift_in<D, C>(
    data: &D,
    clock: &mut C,
    order: BitOrder,
) -> Result<u8, ShiftError<D::Error, C::Error>>
where
    D: InputPin,
    C: OutputPin,
{
    let mut value = 0u8;
    for step in 0..8 {
        clock
            .set_high()
            .map_err(ShiftError::<D::Error, _, Infallible>::from_clock)?;
        if data
            .is_high()
            .map_err(ShiftError::<_, C::Error, Infallible>::from_data)?
        {
            value |= 1 << order.bit_index(step, 8);
        }
        clock
            .set_low()
            .map_err(ShiftError::<D::Error, _, Infallible>::from_clock)?;
    }
    Ok(value)
}

/// A serial-in, parallel-out shift register (74HC595 style) wired to three output lines.
///
/// Every write is bracketed by the latch: it is driven low, the bits are shifted out, and it is
/// driven high again so the register copies them to its outputs in one step.
///
/// ```
/// # use simpleio::line::noop::NoopLine;
/// use simpleio::{BitOrder, ShiftRegister};
/// # let (data, clock, latch) = (NoopLine, NoopLine, NoopLine);
/// let mut leds = ShiftRegister::new(data, clock, latch).with_order(BitOrder::LsbFirst);
/// leds.write(0b0000_0101).unwrap();
/// let (_data, _clock, _latch) = leds.release();
/// ```
pub struct ShiftRegister<D, C, L> {
    data: D,
    clock: C,
    latch: L,
    order: BitOrder,
}

impl<D, C, L> ShiftRegister<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Create a new shift register driver, sending most significant bit first. Takes ownership
    /// of the lines connected to the register's serial data, shift clock and storage (latch)
    /// clock pins.
    pub fn new(data: D, clock: C, latch: L) -> Self {
        Self {
            data,
            clock,
            latch,
            order: BitOrder::default(),
        }
    }

    /// Change the bit order used by subsequent writes.
    pub fn with_order(mut self, order: BitOrder) -> Self {
        self.order = order;
        self
    }

    /// Shift `value` into the register and latch it onto the outputs.
    pub fn write(&mut self, value: u8) -> Result<(), ShiftError<D::Error, C::Error, L::Error>> {
        self.latched(&[value])
    }

    /// Shift a 16-bit `value` through two daisy-chained registers inside one latch window. The
    /// high byte always goes out first and ends up in the far register; the bit order only
    /// applies within each byte.
    pub fn write_word(
        &mut self,
        value: u16,
    ) -> Result<(), ShiftError<D::Error, C::Error, L::Error>> {
        self.latched(&value.to_be_bytes())
    }

    /// Release the lines, consuming the driver.
    pub fn release(self) -> (D, C, L) {
        (self.data, self.clock, self.latch)
    }

    fn latched(&mut self, bytes: &[u8]) -> Result<(), ShiftError<D::Error, C::Error, L::Error>> {
        self.latch
            .set_low()
            .map_err(ShiftError::<D::Error, C::Error, _>::from_latch)?;
        let order = self.order;
        for &byte in bytes {
            let value = u32::from(byte);
            shift_bits::<_, _, L::Error>(&mut self.data, &mut self.clock, value, 8, order)?;
        }
        self.latch.set_high().map_err(ShiftError::from_latch)
    }
}

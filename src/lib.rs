//! Simple, beginner friendly I/O helpers for microcontrollers.
//!
//! This library collects the small utilities that come up again and again when first wiring
//! sensors and chips to a board: scaling a sensor reading into a useful range, and talking to
//! shift registers by bit-banging a pair of GPIO pins.
//!
//! It is intended to work on embedded platforms using any implementation of the `embedded-hal`
//! trait library. The bit-banged transfers drive any GPIO implementing the
//! `embedded_hal::digital::v2::{InputPin,OutputPin}` traits, and never take ownership of the pins
//! except in [`ShiftRegister`], which can [`release`](ShiftRegister::release) them again.
//!
//! # Range mapping
//!
//! *See [`map_range`].*
//!
//! ```
//! // An 8-bit sensor reading scaled to a 10-bit PWM duty value.
//! let duty = simpleio::map_range(150.0, 0.0, 255.0, 0.0, 1023.0);
//! # assert!((duty - 601.7647).abs() < 1e-3);
//! ```
//!
//! The result is always clamped to the output range, in whichever direction the output range is
//! given, so readings outside the input range cannot drive an actuator past its limits.
//!
//! # Shift registers
//!
//! *See [`shift_out`], [`shift_in`] and [`ShiftRegister`].*
//!
//! - Use your platform's `embedded-hal` implementation to obtain the GPIOs connected to the
//!   register's data and clock pins (and latch pin, for an output register).
//! - Call [`shift_out`] to send a byte, or [`shift_in`] to read one, choosing the [`BitOrder`].
//!
//! ```
//! # fn main() -> Result<(), simpleio::ShiftError<core::convert::Infallible, core::convert::Infallible>> {
//! # use simpleio::line::noop::NoopLine;
//! # let (mut data_out, data_in, mut clock) = (NoopLine, NoopLine, NoopLine);
//! use simpleio::{shift_in, shift_out, BitOrder};
//!
//! shift_out(&mut data_out, &mut clock, 0xA5, BitOrder::MsbFirst)?;
//! let switches = shift_in(&data_in, &mut clock, BitOrder::MsbFirst)?;
//! # assert_eq!(switches, 0);
//! # Ok(())
//! # }
//! ```
//!
//! A 74HC595-style output register also needs its latch pulsed around every transfer;
//! [`ShiftRegister`] owns all three lines and does that for you:
//!
//! ```
//! # use simpleio::line::noop::NoopLine;
//! # let (data, clock, latch) = (NoopLine, NoopLine, NoopLine);
//! let mut leds = simpleio::ShiftRegister::new(data, clock, latch);
//! let pattern = simpleio::bit_write(0, 2, true);
//! leds.write(pattern).unwrap();
//! ```
//!
//! Errors from the pins are returned unchanged inside [`ShiftError`], tagged with the line that
//! failed. A failed transfer is never retried, since the register will already have consumed
//! part of it.
//!
//! # Bit timing
//!
//! No delays are inserted between pin transitions, so the clock runs as fast as the HAL can toggle
//! the pin. [`shift_out`] sets data before each rising clock edge; [`shift_in`] samples data while
//! the clock is high. These match the data-valid windows of the common 74HC595 and 74HC165 parts.
//!
//! # Cargo features
//!
//! - `std` (default): link against `std`. Without it the crate is `no_std`.
//! - `unproven` (default): enable `embedded-hal`'s `unproven` traits.
//! - `defmt`: derive `defmt::Format` for the public value and error types.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;

pub mod bits;
pub mod line;
pub mod range;
pub mod shift;
pub mod temperature;

pub use bits::bit_write;
pub use range::map_range;
pub use shift::{shift_in, shift_out, shift_out_bits, BitOrder, ShiftError, ShiftRegister};
pub use temperature::{celsius_to_fahrenheit, fahrenheit_to_celsius, Temperature};

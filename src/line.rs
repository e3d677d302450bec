//! The digital lines the shifters drive. Any `embedded-hal` GPIO implementing the `digital::v2`
//! traits can serve as a data, clock or latch line: `OutputPin` is the read-write capability and
//! `InputPin` the read-only one, chosen by the pin type handed in at construction.
//!
//! This module only carries line fixtures; the shifters in [`crate::shift`] are generic over the
//! HAL traits.

// This is here (and has to be pub) for doctests only. It's useless otherwise.
#[doc(hidden)]
pub mod noop {
    use core::convert::Infallible;
    use hal::digital::v2::{InputPin, OutputPin};

    /// A line that ignores writes and always reads low.
    pub struct NoopLine;

    impl OutputPin for NoopLine {
        type Error = Infallible;
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl InputPin for NoopLine {
        type Error = Infallible;
        fn is_high(&self) -> Result<bool, Self::Error> {
            Ok(false)
        }
        fn is_low(&self) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }
}

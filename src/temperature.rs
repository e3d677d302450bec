//! Temperature unit conversion.

/// Convert degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Convert degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) / 1.8
}

/// A temperature reading tagged with the unit it was taken in.
///
/// ```
/// use simpleio::Temperature;
/// let boiling = Temperature::Fahrenheit(212.0);
/// assert!((boiling.to_celsius() - 100.0).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Temperature {
    /// Degrees Celsius.
    Celsius(f32),
    /// Degrees Fahrenheit.
    Fahrenheit(f32),
}

impl Temperature {
    /// The reading in degrees Celsius.
    pub fn to_celsius(self) -> f32 {
        match self {
            Temperature::Celsius(c) => c,
            Temperature::Fahrenheit(f) => fahrenheit_to_celsius(f),
        }
    }

    /// The reading in degrees Fahrenheit.
    pub fn to_fahrenheit(self) -> f32 {
        match self {
            Temperature::Celsius(c) => celsius_to_fahrenheit(c),
            Temperature::Fahrenheit(f) => f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn boiling_point() {
        assert!(close(fahrenheit_to_celsius(212.0), 100.0));
        assert!(close(celsius_to_fahrenheit(100.0), 212.0));
    }

    #[test]
    fn freezing_and_crossover() {
        assert!(close(celsius_to_fahrenheit(0.0), 32.0));
        assert!(close(celsius_to_fahrenheit(-40.0), -40.0));
        assert!(close(fahrenheit_to_celsius(-40.0), -40.0));
    }

    #[test]
    fn tagged_reading() {
        let body = Temperature::Celsius(37.0);
        assert!(close(body.to_fahrenheit(), 98.6));
        assert_eq!(body.to_celsius(), 37.0);
        assert_eq!(Temperature::Fahrenheit(50.0).to_fahrenheit(), 50.0);
        assert!(close(Temperature::Fahrenheit(50.0).to_celsius(), 10.0));
    }
}

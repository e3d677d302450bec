//! Mapping numbers from one range onto another.

/// Map `x` from the range `in_min..in_max` onto the range `out_min..out_max`.
///
/// Values of `x` outside the input range are extrapolated, but the result is always clamped to
/// the output range. Either range may be inverted (`min > max`); the clamp follows whichever
/// order the output range is given in.
///
/// Unlike Arduino's `map`, this works in floating point and never divides by zero. When the input
/// range is empty (`in_min == in_max`), an `x` equal to it maps to the middle of the output range,
/// and any other `x` uses its raw offset `x - in_min` as the fraction, which the clamp usually
/// pins to one end of the output range.
///
/// A NaN anywhere in the arithmetic is passed through as the result rather than clamped.
///
/// ```
/// use simpleio::map_range;
/// let scaled = map_range(150.0, 0.0, 255.0, 0.0, 1023.0);
/// assert!((scaled - 601.7647).abs() < 1e-3);
/// assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 0.0), 50.0);
/// ```
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let in_range = in_max - in_min;
    let in_delta = x - in_min;
    let fraction = if in_range != 0.0 {
        in_delta / in_range
    } else if in_delta != 0.0 {
        in_delta
    } else {
        0.5
    };
    let mapped = fraction * (out_max - out_min) + out_min;
    if mapped.is_nan() {
        mapped
    } else if out_min <= out_max {
        mapped.min(out_max).max(out_min)
    } else {
        mapped.max(out_max).min(out_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-3 * b.abs().max(1.0)
    }

    #[test]
    fn scales_sensor_reading() {
        let mapped = map_range(150.0, 0.0, 255.0, 0.0, 1023.0);
        assert!(close(mapped, 150.0 * 1023.0 / 255.0), "{}", mapped);
        assert!(close(map_range(mapped, 0.0, 1023.0, 0.0, 255.0), 150.0));
    }

    #[test]
    fn inverted_output_range() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 100.0, 0.0), 50.0);
        assert_eq!(map_range(0.0, 0.0, 10.0, 100.0, 0.0), 100.0);
        assert_eq!(map_range(10.0, 0.0, 10.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn inverted_input_range() {
        assert_eq!(map_range(2.5, 10.0, 0.0, 0.0, 100.0), 75.0);
    }

    #[test]
    fn clamps_extrapolation() {
        assert_eq!(map_range(-5.0, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(map_range(15.0, 0.0, 10.0, 0.0, 100.0), 100.0);
        assert_eq!(map_range(15.0, 0.0, 10.0, 100.0, 0.0), 0.0);
        assert_eq!(map_range(-5.0, 0.0, 10.0, 100.0, 0.0), 100.0);
    }

    #[test]
    fn empty_input_range_at_point_is_midpoint() {
        assert_eq!(map_range(3.0, 3.0, 3.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(3.0, 3.0, 3.0, 100.0, 0.0), 50.0);
        assert_eq!(map_range(-1.0, -1.0, -1.0, 10.0, 20.0), 15.0);
    }

    #[test]
    fn empty_input_range_off_point_uses_raw_offset() {
        // Offset 0.25 is used as the fraction directly.
        assert_eq!(map_range(3.25, 3.0, 3.0, 0.0, 100.0), 25.0);
        // Offset 2 overshoots and is clamped.
        assert_eq!(map_range(5.0, 3.0, 3.0, 0.0, 100.0), 100.0);
        assert_eq!(map_range(1.0, 3.0, 3.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn nan_passes_through() {
        assert!(map_range(f32::NAN, 0.0, 10.0, 0.0, 100.0).is_nan());
        assert!(map_range(5.0, 0.0, 10.0, f32::NAN, 100.0).is_nan());
    }

    #[test]
    fn empty_output_range() {
        assert_eq!(map_range(7.0, 0.0, 10.0, 4.0, 4.0), 4.0);
    }

    proptest! {
        #[test]
        fn result_within_output_range(
            x in -1.0e6f32..1.0e6,
            in_min in -1.0e6f32..1.0e6,
            in_max in -1.0e6f32..1.0e6,
            out_min in -1.0e6f32..1.0e6,
            out_max in -1.0e6f32..1.0e6,
        ) {
            // Keeps the fraction finite, so it cannot become NaN against an empty output range.
            prop_assume!((in_max - in_min).abs() >= 1.0e-3);
            let mapped = map_range(x, in_min, in_max, out_min, out_max);
            prop_assert!(mapped >= out_min.min(out_max));
            prop_assert!(mapped <= out_min.max(out_max));
        }

        #[test]
        fn empty_input_range_midpoint(
            a in -1.0e6f32..1.0e6,
            out_min in -1.0e3f32..1.0e3,
            out_max in -1.0e3f32..1.0e3,
        ) {
            let mapped = map_range(a, a, a, out_min, out_max);
            prop_assert!(close(mapped, (out_min + out_max) / 2.0));
        }
    }
}

//! Utility functions for the ooler-ctrl crate.
//!
//! The device works in whole degrees Fahrenheit, so conversions round to
//! the nearest integer.

/// Convert whole degrees Fahrenheit to whole degrees Celsius.
///
/// # Example
///
/// ```
/// use ooler_ctrl::fahrenheit_to_celsius;
///
/// assert_eq!(fahrenheit_to_celsius(68), 20);
/// assert_eq!(fahrenheit_to_celsius(55), 13);
/// ```
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: i32) -> i32 {
    ((f64::from(fahrenheit) - 32.0) / 1.8).round() as i32
}

/// Convert whole degrees Celsius to whole degrees Fahrenheit.
///
/// # Example
///
/// ```
/// use ooler_ctrl::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(20), 68);
/// ```
#[inline]
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    (f64::from(celsius) * 1.8 + 32.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32), 0);
        assert_eq!(fahrenheit_to_celsius(212), 100);
        assert_eq!(fahrenheit_to_celsius(-40), -40);
        assert_eq!(fahrenheit_to_celsius(116), 47);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0), 32);
        assert_eq!(celsius_to_fahrenheit(100), 212);
        assert_eq!(celsius_to_fahrenheit(-40), -40);
        assert_eq!(celsius_to_fahrenheit(13), 55);
    }

    proptest! {
        // A Celsius degree is wider than a Fahrenheit degree, so C -> F -> C is exact.
        #[test]
        fn celsius_survives_fahrenheit_trip(c in -50i32..=120) {
            prop_assert_eq!(fahrenheit_to_celsius(celsius_to_fahrenheit(c)), c);
        }

        #[test]
        fn fahrenheit_trip_is_within_one_degree(f in -60i32..=250) {
            let back = celsius_to_fahrenheit(fahrenheit_to_celsius(f));
            prop_assert!((back - f).abs() <= 1);
        }
    }
}

//! Shared numeric helpers.

/// Round a value to two decimal places, the storage precision for all
/// measurement fields.
///
/// # Example
///
/// ```
/// use crema_core::util::round2;
///
/// assert_eq!(round2(27.4567), 27.46);
/// assert_eq!(round2(-3.456), -3.46);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_rounds_to_two_decimals() {
        assert_eq!(round2(2.345678), 2.35);
        assert_eq!(round2(27.454), 27.45);
        assert_eq!(round2(8.0), 8.0);
    }

    #[test]
    fn test_round2_negative_values() {
        assert_eq!(round2(-3.456), -3.46);
        assert_eq!(round2(-0.004), -0.0);
    }

    #[test]
    fn test_round2_is_idempotent() {
        let once = round2(8.675309);
        assert_eq!(round2(once), once);
    }
}

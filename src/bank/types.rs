//! Types used throughout the banking system.

/// Decimal precision for monetary values.
/// This is used to convert floating-point values to fixed-point representation.
pub const DECIMAL_PRECISION: f64 = 10000.0;

/// Money type, representing a fixed-point monetary value.
pub type Money = i64;

/// Converts a fixed-point monetary value back to a floating-point amount,
/// mainly for two-decimal display.
pub fn money_to_f64(money: Money) -> f64 {
    money as f64 / DECIMAL_PRECISION
}

/// Converts a floating-point amount to its fixed-point representation.
pub fn money_from_f64(amount: f64) -> Money {
    (amount * DECIMAL_PRECISION).round() as Money
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_conversion() {
        assert_eq!(money_from_f64(1.5), 15_000);
        assert_eq!(money_from_f64(100.0), 1_000_000);
        assert_eq!(money_to_f64(-415_000), -41.5);
    }
}

use std::fmt;

/// A validated, non-negative part price.
///
/// Prices are plain floating-point currency amounts; the constructor rejects
/// negative and non-finite values so that downstream totals stay meaningful.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from a raw amount.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPriceError`] if the amount is negative, NaN, or
    /// infinite.
    pub fn new(amount: f64) -> Result<Self, InvalidPriceError> {
        if !amount.is_finite() {
            return Err(InvalidPriceError::NonFinite(amount));
        }
        if amount < 0.0 {
            return Err(InvalidPriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidPriceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.get()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Whole amounts print without a fractional part ("$3500" style).
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

/// Error returned when an amount cannot be used as a price.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InvalidPriceError {
    /// The amount was negative.
    #[error("price cannot be negative, got {0}")]
    Negative(f64),

    /// The amount was NaN or infinite.
    #[error("price must be a finite number, got {0}")]
    NonFinite(f64),
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn accepts_zero() {
        assert_eq!(Price::new(0.0).unwrap(), Price::ZERO);
    }

    #[test]
    fn accepts_positive_amounts() {
        let price = Price::new(3500.0).unwrap();
        assert!((price.get() - 3500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_negative_amounts() {
        assert_eq!(Price::new(-1.0), Err(InvalidPriceError::Negative(-1.0)));
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            Price::new(f64::NAN),
            Err(InvalidPriceError::NonFinite(_))
        ));
    }

    #[test]
    fn rejects_infinity() {
        assert!(matches!(
            Price::new(f64::INFINITY),
            Err(InvalidPriceError::NonFinite(_))
        ));
    }

    #[test_case(3500.0, "3500"; "whole amount")]
    #[test_case(0.0, "0"; "zero")]
    #[test_case(59.99, "59.99"; "fractional amount")]
    #[test_case(2199.5, "2199.50"; "half unit pads to two places")]
    fn display(amount: f64, expected: &str) {
        assert_eq!(Price::new(amount).unwrap().to_string(), expected);
    }

    #[test]
    fn try_from_roundtrip() {
        let price = Price::try_from(42.5).unwrap();
        assert!((f64::from(price) - 42.5).abs() < f64::EPSILON);
    }
}

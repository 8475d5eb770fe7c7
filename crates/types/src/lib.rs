//! Validated value types shared by the clinic crates.
//!
//! These wrappers guarantee their invariant once constructed, so the core can
//! accept them without re-checking.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NonEmptyText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Errors that can occur when creating an [`Amount`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AmountError {
    /// The value was below zero.
    #[error("Amount cannot be negative: {0}")]
    Negative(f64),
    /// The value was NaN or infinite.
    #[error("Amount must be a finite number")]
    NotFinite,
    /// The text could not be read as a number.
    #[error("Not a number: {0}")]
    Unparseable(String),
}

/// A non-negative, finite monetary value.
///
/// Stored as an IEEE-754 double and never rounded. Sums are exact to the extent
/// double addition is; display follows the convention of always showing at least
/// one fractional digit (`10.0`, `12.5`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Amount(f64);

impl Amount {
    /// Creates a new `Amount`, rejecting negative and non-finite values.
    ///
    /// Negative zero is normalised to zero.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value + 0.0))
    }

    /// Creates an amount from a whole number of currency units.
    pub fn whole(units: u32) -> Self {
        Self(f64::from(units))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 && self.0 < 1e16 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl std::str::FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| AmountError::Unparseable(s.trim().to_owned()))?;
        Amount::new(value)
    }
}

impl serde::Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  PID1 ").expect("should accept padded text");
        assert_eq!(text.as_str(), "PID1");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace() {
        let err = NonEmptyText::new("   ").expect_err("whitespace should be rejected");
        assert_eq!(err, TextError::Empty);
    }

    #[test]
    fn test_values_serialize_as_plain_json() {
        let id = NonEmptyText::new(" PAY1 ").unwrap();
        let total = Amount::new(110.0).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"PAY1\"");
        assert_eq!(serde_json::to_string(&total).unwrap(), "110.0");
    }

    #[test]
    fn test_amount_rejects_negative_and_non_finite() {
        assert!(matches!(Amount::new(-0.5), Err(AmountError::Negative(_))));
        assert_eq!(Amount::new(f64::NAN), Err(AmountError::NotFinite));
        assert_eq!(Amount::new(f64::INFINITY), Err(AmountError::NotFinite));
    }

    #[test]
    fn test_amount_normalises_negative_zero() {
        let zero = Amount::new(-0.0).expect("negative zero is allowed");
        assert!(zero.value().is_sign_positive());
        assert_eq!(zero.to_string(), "0.0");
    }

    #[test]
    fn test_amount_display_keeps_one_fractional_digit() {
        assert_eq!(Amount::new(160.0).unwrap().to_string(), "160.0");
        assert_eq!(Amount::new(12.5).unwrap().to_string(), "12.5");
        assert_eq!(Amount::new(0.1 + 0.2).unwrap().to_string(), "0.30000000000000004");
    }

    #[test]
    fn test_amount_parses_from_text() {
        let amount: Amount = " 99.95 ".parse().expect("should parse");
        assert_eq!(amount.value(), 99.95);
        assert!(matches!(
            "abc".parse::<Amount>(),
            Err(AmountError::Unparseable(_))
        ));
        assert!("-1".parse::<Amount>().is_err());
    }
}

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Number as JsonNumber;

use crate::LoadError;

// 2^63 and 2^64 are exact as f64; the upper bounds below are exclusive.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

/// A decoded numeric scalar.
///
/// Integers are kept exact; only values written with a fraction or exponent
/// become [`Number::Float`]. An integer and a float are equal only when they
/// denote the same mathematical value.
///
/// ```
/// # use gendiff_core::Number;
/// assert_eq!(Number::from(17i64).to_string(), "17");
/// assert_eq!(Number::from_f64(1.0)?.to_string(), "1.0");
/// assert_eq!(Number::from(1i64), Number::from_f64(1.0)?);
/// # Ok::<(), gendiff_core::LoadError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    /// Finite floating-point value.
    Float(f64),
}

impl Number {
    /// Creates a floating-point [`Number`] after validating finiteness.
    ///
    /// ```
    /// # use gendiff_core::Number;
    /// assert_eq!(Number::from_f64(0.5)?.as_f64(), 0.5);
    /// assert!(Number::from_f64(f64::NAN).is_err());
    /// # Ok::<(), gendiff_core::LoadError>(())
    /// ```
    pub fn from_f64(value: f64) -> Result<Self, LoadError> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            Err(LoadError::NotFinite { value })
        }
    }

    /// Returns the value as `f64`, rounding large integers.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::UInt(u) => u as f64,
            Self::Float(f) => f,
        }
    }

    /// Converts the number into a `serde_json::Number` of the same kind.
    #[must_use]
    pub fn to_json_number(self) -> JsonNumber {
        match self {
            Self::Int(i) => JsonNumber::from(i),
            Self::UInt(u) => JsonNumber::from(u),
            // Finite by construction, so `from_f64` cannot fail here.
            Self::Float(f) => JsonNumber::from_f64(f).unwrap_or_else(|| JsonNumber::from(0)),
        }
    }

    fn as_i128(self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(i128::from(i)),
            Self::UInt(u) => Some(i128::from(u)),
            Self::Float(f) if f.fract() == 0.0 && (I64_LOWER..U64_UPPER).contains(&f) => {
                Some(f as i128)
            }
            Self::Float(_) => None,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a == b,
            _ => match (self.as_i128(), other.as_i128()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(signed) => Self::Int(signed),
            Err(_) => Self::UInt(value),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_number())
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_number().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_display_exactly() {
        assert_eq!(Number::from(17i64).to_string(), "17");
        assert_eq!(Number::from(-3i64).to_string(), "-3");
        assert_eq!(Number::from(9_223_372_036_854_775_808u64).to_string(), "9223372036854775808");
    }

    #[test]
    fn floats_keep_their_fraction() {
        assert_eq!(Number::from_f64(1.25).unwrap().to_string(), "1.25");
        assert_eq!(Number::from_f64(1.0).unwrap().to_string(), "1.0");
    }

    #[test]
    fn integers_beyond_f64_precision_stay_distinct() {
        let a = Number::from(9_007_199_254_740_993i64);
        let b = Number::from(9_007_199_254_740_992i64);
        assert_ne!(a, b);
        assert_ne!(Number::from(u64::MAX), Number::from(u64::MAX - 1));
    }

    #[test]
    fn int_and_float_equal_only_when_value_matches() {
        assert_eq!(Number::from(2i64), Number::from_f64(2.0).unwrap());
        assert_ne!(Number::from(2i64), Number::from_f64(2.5).unwrap());
        // 2^53 + 1 rounds to 2^53 as f64 but is a different integer.
        let float = Number::from_f64(9_007_199_254_740_992.0).unwrap();
        assert_eq!(Number::from(9_007_199_254_740_992i64), float);
        assert_ne!(Number::from(9_007_199_254_740_993i64), float);
    }

    #[test]
    fn huge_floats_never_equal_integers() {
        let float = Number::from_f64(U64_UPPER).unwrap();
        assert_ne!(Number::from(u64::MAX), float);
    }

    #[test]
    fn unsigned_values_that_fit_become_signed() {
        assert!(matches!(Number::from(5u64), Number::Int(5)));
        assert!(matches!(Number::from(u64::MAX), Number::UInt(u64::MAX)));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = Number::from_f64(f64::INFINITY).unwrap_err();
        assert!(matches!(err, LoadError::NotFinite { .. }));
    }
}

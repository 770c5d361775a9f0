//! Arbitrary precision decimal arithmetic for token amounts.
//!
//! Every amount that ends up in a message passes through [`Dec`]. The type is
//! backed by [`BigDecimal`] so results are identical on every platform and no
//! value ever touches a float.

pub mod pow;
mod serialization;
pub mod units;

use {
    bigdecimal::{BigDecimal, RoundingMode},
    derive_more::{From, Into},
    num::{BigInt, Signed, Zero, bigint::Sign},
    std::{fmt, ops, str::FromStr},
};

/// Number of fractional digits kept by quotients and by the wire format.
pub const PRECISION: i64 = 18;

/// Most integer digits a parsed number may have. Anything above does not fit
/// a 256 bit on-chain amount.
pub const MAX_INTEGER_DIGITS: i64 = 78;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0:?} is not a decimal number")]
    Parse(String),
    #[error("{0:?} has more than 18 fractional digits")]
    TooPrecise(String),
    #[error("{0:?} has more than 78 integer digits")]
    TooLarge(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("negative value {0} can not be represented as an integer amount")]
    Negative(Dec),
    #[error("power base {0} is outside of the supported range (0, 2)")]
    PowBase(Dec),
    #[error("exponent {0} is not supported")]
    PowExponent(Dec),
    #[error("power approximation did not converge")]
    PowApprox,
}

/// A decimal number with exact addition, subtraction and multiplication.
///
/// Division truncates toward zero after [`PRECISION`] fractional digits.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, From, Into)]
pub struct Dec(BigDecimal);

impl Dec {
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn one() -> Self {
        Self(BigDecimal::from(1))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Interprets `self` as a percentage, i.e. `"10"` becomes `0.1`. Exact, so
    /// the result may carry two more fractional digits than `self`.
    pub fn percent_to_fraction(&self) -> Self {
        let (digits, scale) = self.0.as_bigint_and_exponent();
        Self(BigDecimal::new(digits, scale + 2))
    }

    /// Integer part of the number, dropping the fraction toward zero.
    pub fn truncate(&self) -> BigInt {
        self.0
            .with_scale_round(0, RoundingMode::Down)
            .as_bigint_and_exponent()
            .0
    }

    /// Drops every digit after `digits` fractional places, toward zero.
    pub fn truncate_to(&self, digits: i64) -> Self {
        if self.0.fractional_digit_count() <= digits {
            return self.clone();
        }
        Self(self.0.with_scale_round(digits, RoundingMode::Down))
    }

    /// `self / rhs` truncated after [`PRECISION`] fractional digits.
    pub fn checked_quo(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (numer, numer_scale) = self.0.as_bigint_and_exponent();
        let (denom, denom_scale) = rhs.0.as_bigint_and_exponent();
        // numer / 10^ns / (denom / 10^ds) * 10^P == numer * 10^(ds + P - ns) / denom
        let shift = denom_scale + PRECISION - numer_scale;
        let (numer, denom) = if shift >= 0 {
            (numer * ten_pow(shift), denom)
        } else {
            (numer, denom * ten_pow(-shift))
        };
        // BigInt division truncates toward zero.
        Ok(Self(BigDecimal::new(numer / denom, PRECISION)))
    }
}

fn ten_pow(exp: i64) -> BigInt {
    BigInt::from(10).pow(exp as u32)
}

impl FromStr for Dec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = BigDecimal::from_str(trimmed).map_err(|_| Error::Parse(s.to_owned()))?;
        // `0e50000000` is still zero; the exponent must not survive into scaling.
        if value.is_zero() {
            return Ok(Self::zero());
        }
        if value.fractional_digit_count() > PRECISION {
            return Err(Error::TooPrecise(s.to_owned()));
        }
        let (_, scale) = value.as_bigint_and_exponent();
        let integer_digits = i64::try_from(value.digits())
            .unwrap_or(i64::MAX)
            .saturating_sub(scale);
        if integer_digits > MAX_INTEGER_DIGITS {
            return Err(Error::TooLarge(s.to_owned()));
        }
        Ok(Self(value))
    }
}

impl From<u64> for Dec {
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<BigInt> for Dec {
    fn from(value: BigInt) -> Self {
        Self(BigDecimal::from(value))
    }
}

/// Renders exactly [`PRECISION`] fractional digits, e.g. `0.100000000000000000`.
/// Digits beyond that precision (only produced by exact multiplication) are
/// truncated.
impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (digits, _) = self
            .0
            .with_scale_round(PRECISION, RoundingMode::Down)
            .as_bigint_and_exponent();
        let sign = if digits.sign() == Sign::Minus { "-" } else { "" };
        let digits = format!("{:0>19}", digits.magnitude().to_string());
        let (whole, fraction) = digits.split_at(digits.len() - 18);
        write!(f, "{sign}{whole}.{fraction}")
    }
}

macro_rules! impl_exact_op {
    ($op:ident, $method:ident) => {
        impl ops::$op for Dec {
            type Output = Dec;

            fn $method(self, rhs: Dec) -> Dec {
                Dec(ops::$op::$method(self.0, rhs.0))
            }
        }

        impl ops::$op<&Dec> for &Dec {
            type Output = Dec;

            fn $method(self, rhs: &Dec) -> Dec {
                Dec(ops::$op::$method(&self.0, &rhs.0))
            }
        }
    };
}

impl_exact_op!(Add, add);
impl_exact_op!(Sub, sub);
impl_exact_op!(Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn percent_to_fraction_divides_by_hundred() {
        assert_eq!(dec("10").percent_to_fraction(), dec("0.1"));
        assert_eq!(dec("0.5").percent_to_fraction(), dec("0.005"));
        assert_eq!(dec("0").percent_to_fraction(), Dec::zero());
        assert_eq!(dec("100").percent_to_fraction(), Dec::one());
        assert_eq!(
            dec("0.00000000000000001")
                .percent_to_fraction()
                .as_big_decimal(),
            &BigDecimal::from_str("1e-19").unwrap()
        );
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(dec("1.9999995").truncate(), BigInt::from(1));
        assert_eq!(dec("-1.9").truncate(), BigInt::from(-1));
        assert_eq!(dec("1e3").truncate(), BigInt::from(1000));
        assert_eq!(dec("0.129").truncate_to(2), dec("0.12"));
    }

    #[test]
    fn quotient_truncates_at_precision() {
        assert_eq!(
            Dec::one().checked_quo(&dec("3")).unwrap(),
            dec("0.333333333333333333")
        );
        assert_eq!(
            dec("2").checked_quo(&dec("3")).unwrap(),
            dec("0.666666666666666666")
        );
        assert_eq!(
            dec("-2").checked_quo(&dec("3")).unwrap(),
            dec("-0.666666666666666666")
        );
        assert_eq!(dec("10").checked_quo(&dec("0.5")).unwrap(), dec("20"));
        assert_eq!(
            Dec::one().checked_quo(&Dec::zero()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn multiplication_is_exact() {
        assert_eq!(&dec("100") * &dec("1.05"), dec("105"));
        assert_eq!(
            (&dec("0.000000000000000001") * &dec("0.1")).as_big_decimal(),
            &BigDecimal::from_str("1e-19").unwrap()
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Dec::from_str("abc"), Err(Error::Parse("abc".to_owned())));
        assert_eq!(Dec::from_str(""), Err(Error::Parse(String::new())));
        assert!(matches!(
            Dec::from_str("0.1234567890123456789"),
            Err(Error::TooPrecise(_))
        ));
    }

    #[test]
    fn parse_bounds_the_exponent() {
        assert!(matches!(
            Dec::from_str("1e50000000"),
            Err(Error::TooLarge(_))
        ));
        assert!(matches!(Dec::from_str("1e78"), Err(Error::TooLarge(_))));
        assert_eq!(
            Dec::from_str("1e77").unwrap().truncate(),
            BigInt::from(10).pow(77u32)
        );
        assert_eq!(Dec::from_str("0e50000000").unwrap(), Dec::zero());
        assert!(matches!(
            Dec::from_str("1e-50000000"),
            Err(Error::TooPrecise(_))
        ));
    }

    #[test]
    fn displays_fixed_precision() {
        assert_eq!(dec("0.1").to_string(), "0.100000000000000000");
        assert_eq!(dec("12").to_string(), "12.000000000000000000");
        assert_eq!(dec("-0.5").to_string(), "-0.500000000000000000");
        assert_eq!(Dec::zero().to_string(), "0.000000000000000000");
    }
}

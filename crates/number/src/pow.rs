//! Fractional exponentiation as needed by weighted pool math.
//!
//! `base^exp` is split into `base^floor(exp) * base^frac(exp)`. The integer
//! part is computed by repeated multiplication, the fractional part with the
//! binomial series
//!
//! ```text
//! (1 + x)^a = 1 + a*x + a(a-1)/2! * x^2 + a(a-1)(a-2)/3! * x^3 + ...
//! ```
//!
//! which converges for `|x| < 1`, hence the `(0, 2)` restriction on the base.

use {
    crate::{Dec, Error, PRECISION},
    bigdecimal::BigDecimal,
    num::ToPrimitive,
    std::sync::LazyLock,
};

/// Terms of the series smaller than this (1e-8) are dropped.
static POW_PRECISION: LazyLock<Dec> = LazyLock::new(|| Dec::from(BigDecimal::new(1.into(), 8)));

const MAX_SERIES_TERMS: u64 = 1_000;

impl Dec {
    /// `self^exp` for a base in `(0, 2)` and a non-negative exponent. The
    /// result is truncated after [`PRECISION`] fractional digits.
    pub fn pow(&self, exp: &Dec) -> Result<Dec, Error> {
        let two = Dec::from(2u64);
        if !self.is_positive() || *self >= two {
            return Err(Error::PowBase(self.clone()));
        }
        if exp.is_negative() {
            return Err(Error::PowExponent(exp.clone()));
        }

        let whole = exp.truncate();
        let fraction = exp - &Dec::from(whole.clone());
        let whole = whole
            .to_u32()
            .ok_or_else(|| Error::PowExponent(exp.clone()))?;

        let mut result = Dec::one();
        for _ in 0..whole {
            result = (&result * self).truncate_to(PRECISION);
        }
        if fraction.is_zero() {
            return Ok(result);
        }

        let partial = pow_approx(self, &fraction, &POW_PRECISION)?;
        Ok((&result * &partial).truncate_to(PRECISION))
    }
}

/// Sums the binomial series for `base^exp` with `0 < exp < 1` until a term
/// drops below `precision`.
fn pow_approx(base: &Dec, exp: &Dec, precision: &Dec) -> Result<Dec, Error> {
    let one = Dec::one();
    let (x, x_negative) = abs_difference_with_sign(base, &one);

    let mut term = Dec::one();
    let mut sum = Dec::one();
    let mut negative = false;

    for k in 1..=MAX_SERIES_TERMS {
        if term < *precision {
            return Ok(sum);
        }
        let big_k = Dec::from(k);
        let (c, c_negative) = abs_difference_with_sign(exp, &(&big_k - &one));
        term = (&term * &(&c * &x)).truncate_to(PRECISION);
        term = term.checked_quo(&big_k)?;
        if term.is_zero() {
            return Ok(sum);
        }
        if x_negative {
            negative = !negative;
        }
        if c_negative {
            negative = !negative;
        }
        sum = if negative { &sum - &term } else { &sum + &term };
    }

    Err(Error::PowApprox)
}

/// `(|a - b|, a < b)`
fn abs_difference_with_sign(a: &Dec, b: &Dec) -> (Dec, bool) {
    if a >= b { (a - b, false) } else { (b - a, true) }
}

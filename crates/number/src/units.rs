//! Conversions between human readable amounts and on-chain integer units.

use {
    crate::{Dec, Error},
    bigdecimal::BigDecimal,
    num::{BigInt, BigUint},
};

/// `10^decimals` as a decimal.
pub fn precision_dec(decimals: u32) -> Dec {
    Dec::from(BigInt::from(10).pow(decimals))
}

impl Dec {
    /// Scales `self` by `10^decimals` and truncates the result, e.g. `1.9999995`
    /// at 6 decimals becomes `1999999`. Amounts are always rounded down so a
    /// message never commits more funds than the user entered.
    pub fn to_integer(&self, decimals: u32) -> Result<BigUint, Error> {
        if self.is_negative() {
            return Err(Error::Negative(self.clone()));
        }
        let (_, magnitude) = (self * &precision_dec(decimals)).truncate().into_parts();
        Ok(magnitude)
    }

    /// Inverse of [`Dec::to_integer`]: interprets `amount` as the smallest unit
    /// of a currency with `decimals` decimals.
    pub fn from_integer(amount: &BigUint, decimals: u32) -> Self {
        Self::from(BigDecimal::new(BigInt::from(amount.clone()), i64::from(decimals)))
    }
}

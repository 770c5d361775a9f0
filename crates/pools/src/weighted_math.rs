//! Swap rate math of weighted pools.
//!
//! All inputs are raw token units expressed as [`Dec`]; weights only matter
//! relative to each other.

use {crate::Error, number::Dec};

/// Amount of the out token received for `amount_in` of the in token.
///
/// `balance_out * (1 - (balance_in / (balance_in + amount_in * (1 - fee)))^(weight_in / weight_out))`
pub fn calc_out_given_in(
    balance_in: &Dec,
    weight_in: &Dec,
    balance_out: &Dec,
    weight_out: &Dec,
    amount_in: &Dec,
    swap_fee: &Dec,
) -> Result<Dec, Error> {
    let weight_ratio = weight_in.checked_quo(weight_out)?;
    let adjusted_in = amount_in * &(&Dec::one() - swap_fee);
    let base = balance_in.checked_quo(&(balance_in + &adjusted_in))?;
    let power = base.pow(&weight_ratio)?;
    Ok(balance_out * &(&Dec::one() - &power))
}

/// Amount of the in token needed to receive `amount_out` of the out token.
///
/// `balance_in * ((balance_out / (balance_out - amount_out))^(weight_out / weight_in) - 1) / (1 - fee)`
pub fn calc_in_given_out(
    balance_in: &Dec,
    weight_in: &Dec,
    balance_out: &Dec,
    weight_out: &Dec,
    amount_out: &Dec,
    swap_fee: &Dec,
) -> Result<Dec, Error> {
    let remaining = balance_out - amount_out;
    if !remaining.is_positive() {
        return Err(Error::InsufficientLiquidity {
            requested: amount_out.to_string(),
        });
    }
    let weight_ratio = weight_out.checked_quo(weight_in)?;
    let base = balance_out.checked_quo(&remaining)?;
    let power = base.pow(&weight_ratio)?;
    let amount_in = balance_in * &(&power - &Dec::one());
    Ok(amount_in.checked_quo(&(&Dec::one() - swap_fee))?)
}

#[cfg(test)]
mod tests {
    use {super::*, num::BigInt};

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn out_given_in_equal_weights() {
        let out = calc_out_given_in(
            &dec("1000000000"),
            &dec("1"),
            &dec("1000000000"),
            &dec("1"),
            &dec("100000000"),
            &Dec::zero(),
        )
        .unwrap();
        assert_eq!(out.truncate(), BigInt::from(90_909_090));
    }

    #[test]
    fn fee_reduces_output() {
        let out_with_fee = |fee: &str| {
            calc_out_given_in(
                &dec("1000000000"),
                &dec("1"),
                &dec("1000000000"),
                &dec("1"),
                &dec("100000000"),
                &dec(fee),
            )
            .unwrap()
        };
        assert!(out_with_fee("0.01") < out_with_fee("0"));
    }

    #[test]
    fn out_given_in_uneven_weights() {
        // 80/20 pool, 1% of the in balance: 1000 * (1 - (1/1.01)^4) ~= 39.01
        let out = calc_out_given_in(
            &dec("1000"),
            &dec("4"),
            &dec("1000"),
            &dec("1"),
            &dec("10"),
            &Dec::zero(),
        )
        .unwrap();
        assert_eq!(out.truncate_to(2), dec("39.01"));
    }

    #[test]
    fn in_given_out_equal_weights() {
        let amount_in = calc_in_given_out(
            &dec("1000000000"),
            &dec("1"),
            &dec("1000000000"),
            &dec("1"),
            &dec("100000000"),
            &Dec::zero(),
        )
        .unwrap();
        assert_eq!(amount_in.truncate(), BigInt::from(111_111_111));
    }

    #[test]
    fn in_given_out_cannot_drain_pool() {
        let result = calc_in_given_out(
            &dec("1000"),
            &dec("1"),
            &dec("1000"),
            &dec("1"),
            &dec("1000"),
            &Dec::zero(),
        );
        assert!(matches!(result, Err(Error::InsufficientLiquidity { .. })));
    }
}

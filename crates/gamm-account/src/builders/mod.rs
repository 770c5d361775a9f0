//! One builder per pool operation.
//!
//! Every builder is split in two steps. `parse` validates the user input and
//! never touches the network, `build` turns the parsed input into a message,
//! for everything but pool creation against a fresh pool snapshot.

mod create_pool;
mod exit_pool;
mod join_pool;
mod swap;

pub use {
    create_pool::{CreatePool, PoolAssetInput},
    exit_pool::ExitPool,
    join_pool::JoinPool,
    swap::{SwapExactAmountIn, SwapExactAmountOut},
};

use {
    crate::Error,
    model::{Coin, Slippage, TokenAmount},
    number::Dec,
};

/// Parses a non-negative decimal amount.
fn parse_amount(value: &str) -> Result<Dec, Error> {
    let amount: Dec = value.parse()?;
    if amount.is_negative() {
        return Err(Error::InvalidAmount(format!("{value:?} is negative")));
    }
    Ok(amount)
}

/// Parses a percentage such as `"5"` for 5%. An empty string means no bound.
fn parse_slippage(percent: &str) -> Result<Slippage, Error> {
    if percent.trim().is_empty() {
        return Ok(Slippage::Unbounded);
    }
    Ok(Slippage::from_percent(&percent.parse()?)?)
}

/// Scales every estimate by `factor`, `None` without a factor.
fn bounds(estimates: &[TokenAmount], factor: Option<Dec>) -> Result<Option<Vec<Coin>>, Error> {
    let Some(factor) = factor else {
        return Ok(None);
    };
    let coins = estimates
        .iter()
        .map(|estimate| estimate.scaled_coin(&factor))
        .collect::<Result<_, _>>()?;
    Ok(Some(coins))
}

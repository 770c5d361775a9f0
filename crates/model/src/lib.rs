//! Contains the wire types shared between the message builders, the pool model
//! and the submission layer.

pub mod coin;
pub mod message;
pub mod slippage;
pub mod tx;

use {
    serde_with::{DeserializeFromStr, SerializeDisplay},
    std::{fmt, num::ParseIntError, str::FromStr},
};

pub use {
    coin::{Coin, Currency, TokenAmount},
    message::{Message, Msg},
    slippage::Slippage,
    tx::{Fee, SubmissionFailure, TxResponse},
};

/// On-chain pool identifier. Encoded as a decimal string on the wire.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct PoolId(pub u64);

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PoolId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// The pool operations a message can be built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Operation {
    #[display("createPool")]
    CreatePool,
    #[display("joinPool")]
    JoinPool,
    #[display("exitPool")]
    ExitPool,
    #[display("swapExactAmountIn")]
    SwapExactAmountIn,
    #[display("swapExactAmountOut")]
    SwapExactAmountOut,
}

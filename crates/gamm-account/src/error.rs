use model::{PoolId, slippage::InvalidSlippage};

/// Failure to build a pool message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unknown pool {0}")]
    UnknownPool(PoolId),
    #[error("denom {denom} is not an asset of pool {pool_id}")]
    UnknownDenom { pool_id: PoolId, denom: String },
    #[error("failed to estimate pool amounts: {0}")]
    Estimate(pools::Error),
    #[error("failed to fetch pool state: {0:#}")]
    Fetch(anyhow::Error),
}

impl From<pools::Error> for Error {
    fn from(err: pools::Error) -> Self {
        match err {
            pools::Error::UnknownPool(id) => Self::UnknownPool(id),
            pools::Error::UnknownDenom { pool_id, denom } => Self::UnknownDenom { pool_id, denom },
            pools::Error::SameDenom(denom) => {
                Self::InvalidAmount(format!("can not swap {denom} for itself"))
            }
            pools::Error::Fetch(err) => Self::Fetch(err),
            err => Self::Estimate(err),
        }
    }
}

impl From<number::Error> for Error {
    fn from(err: number::Error) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

impl From<InvalidSlippage> for Error {
    fn from(err: InvalidSlippage) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

/// Failure to get a transaction on chain. A transaction that made it on chain
/// but failed is not an error here, see [`model::TxResponse::into_result`].
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error(transparent)]
    Build(#[from] Error),
    #[error("failed to broadcast transaction: {0:#}")]
    Broadcast(anyhow::Error),
}

//! Weighted pool model and the stores that serve pool snapshots.
//!
//! The message builders never read pool state directly. They go through the
//! [`SnapshotGate`] which forces a fresh fetch from a [`PoolProvider`] and
//! hands out an immutable [`Pool`] to compute bounds against.

pub mod pool;
pub mod pool_fetching;
pub mod snapshot;
mod swap;
pub mod weighted_math;

pub use {
    pool::{Pool, PoolAsset, PoolData},
    pool_fetching::{CachedPools, PoolFetching, PoolProvider},
    snapshot::SnapshotGate,
};
#[cfg(any(test, feature = "test-util"))]
pub use pool_fetching::{MockPoolFetching, MockPoolProvider};

use model::PoolId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown pool {0}")]
    UnknownPool(PoolId),
    #[error("denom {denom} is not an asset of pool {pool_id}")]
    UnknownDenom { pool_id: PoolId, denom: String },
    #[error("currency {0} is not configured")]
    UnknownCurrency(String),
    #[error("pool {0} has no shares outstanding")]
    NoShares(PoolId),
    #[error("pool balance can not cover an output of {requested}")]
    InsufficientLiquidity { requested: String },
    #[error("swapping {0} for itself")]
    SameDenom(String),
    #[error(transparent)]
    Math(#[from] number::Error),
    #[error("failed to fetch pool state: {0:#}")]
    Fetch(anyhow::Error),
}

//! Token balances of the account that sends pool messages.

mod cached;

pub use cached::CachedBalances;
use {anyhow::Result, async_trait::async_trait, model::Coin, num::BigUint};

/// Source of authoritative balances, usually the chain's bank module.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait BalanceFetching: Send + Sync {
    /// Balance of `owner` in raw units of `denom`.
    async fn fetch_balance(&self, owner: &str, denom: &str) -> Result<BigUint>;

    /// Every non-zero balance of `owner`.
    async fn fetch_all_balances(&self, owner: &str) -> Result<Vec<Coin>>;
}

/// Invalidation interface of a balance store. Both methods only request a
/// refetch and return immediately.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
pub trait BalanceCache: Send + Sync {
    fn refresh(&self, denom: &str);

    fn refresh_all(&self);
}

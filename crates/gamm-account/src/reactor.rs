//! Cache invalidation after a transaction confirmed.

use {
    account_balances::BalanceCache,
    model::{Operation, PoolId, TxResponse},
    pools::SnapshotGate,
    std::sync::Arc,
};

/// Cached state an operation may have changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshPlan {
    pub balances: BalanceRefresh,
    pub pool: Option<PoolId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BalanceRefresh {
    Denoms(Vec<String>),
    /// Minting and burning shares touches denoms that are not known up front.
    All,
}

impl RefreshPlan {
    /// Pool creation moves the initial assets out of the account.
    pub fn create_pool(denoms: Vec<String>) -> Self {
        Self {
            balances: BalanceRefresh::Denoms(denoms),
            pool: None,
        }
    }

    pub fn join_or_exit(pool_id: PoolId) -> Self {
        Self {
            balances: BalanceRefresh::All,
            pool: Some(pool_id),
        }
    }

    /// Only the two swapped denoms change.
    pub fn swap(denom_in: &str, denom_out: &str) -> Self {
        Self {
            balances: BalanceRefresh::Denoms(vec![denom_in.to_owned(), denom_out.to_owned()]),
            pool: None,
        }
    }
}

#[derive(Clone)]
pub struct Reactor {
    balances: Arc<dyn BalanceCache>,
    pools: SnapshotGate,
}

impl Reactor {
    pub fn new(balances: Arc<dyn BalanceCache>, pools: SnapshotGate) -> Self {
        Self { balances, pools }
    }

    /// Requests the refreshes of `plan` if `response` reports success. Returns
    /// without waiting for the refreshes to finish.
    pub fn react(&self, operation: Operation, response: &TxResponse, plan: &RefreshPlan) {
        if !response.is_success() {
            tracing::warn!(
                %operation,
                tx_hash = %response.tx_hash,
                code = ?response.code,
                log = %response.raw_log,
                "transaction failed, keeping cached state"
            );
            return;
        }
        tracing::debug!(%operation, tx_hash = %response.tx_hash, ?plan, "refreshing cached state");

        match &plan.balances {
            BalanceRefresh::All => self.balances.refresh_all(),
            BalanceRefresh::Denoms(denoms) => {
                for denom in denoms {
                    self.balances.refresh(denom);
                }
            }
        }
        if let Some(pool_id) = plan.pool {
            self.pools.refresh(pool_id);
        }
    }
}

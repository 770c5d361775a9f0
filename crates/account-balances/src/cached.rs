use {
    crate::{BalanceCache, BalanceFetching},
    anyhow::Result,
    num::BigUint,
    std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    },
    tracing::Instrument,
};

/// Keeps the last fetched balances of a single account in memory.
#[derive(Clone)]
pub struct CachedBalances {
    owner: Arc<str>,
    inner: Arc<dyn BalanceFetching>,
    cache: Arc<Mutex<HashMap<String, BigUint>>>,
}

impl CachedBalances {
    pub fn new(owner: impl Into<Arc<str>>, inner: Arc<dyn BalanceFetching>) -> Self {
        Self {
            owner: owner.into(),
            inner,
            cache: Default::default(),
        }
    }

    /// Cached balance in raw units, `None` if it was never fetched.
    pub fn balance(&self, denom: &str) -> Option<BigUint> {
        self.cache.lock().unwrap().get(denom).cloned()
    }

    pub fn balances(&self) -> HashMap<String, BigUint> {
        self.cache.lock().unwrap().clone()
    }

    async fn update(&self, denom: &str) -> Result<()> {
        let balance = self.inner.fetch_balance(&self.owner, denom).await?;
        self.cache
            .lock()
            .unwrap()
            .insert(denom.to_owned(), balance);
        Ok(())
    }

    async fn update_all(&self) -> Result<()> {
        let coins = self.inner.fetch_all_balances(&self.owner).await?;
        // Denoms missing from the response have been spent entirely.
        let balances = coins
            .into_iter()
            .map(|coin| (coin.denom, coin.amount))
            .collect();
        *self.cache.lock().unwrap() = balances;
        Ok(())
    }
}

impl BalanceCache for CachedBalances {
    fn refresh(&self, denom: &str) {
        let this = self.clone();
        let denom = denom.to_owned();
        let span = tracing::info_span!("balance_refresh", owner = %self.owner, %denom);
        let task = async move {
            if let Err(err) = this.update(&denom).await {
                tracing::warn!(?err, "failed to refresh balance");
            }
        };
        tokio::spawn(task.instrument(span));
    }

    fn refresh_all(&self) {
        let this = self.clone();
        let span = tracing::info_span!("balances_refresh", owner = %self.owner);
        let task = async move {
            match this.update_all().await {
                Ok(()) => tracing::debug!("refreshed all balances"),
                Err(err) => tracing::warn!(?err, "failed to refresh balances"),
            }
        };
        tokio::spawn(task.instrument(span));
    }
}

use {
    crate::Pool,
    anyhow::Result,
    async_trait::async_trait,
    model::PoolId,
    std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    },
    tracing::Instrument,
};

/// Source of authoritative pool state, usually the chain's query endpoint.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait PoolFetching: Send + Sync {
    /// `None` if the chain does not know a pool with this id.
    async fn fetch_pool(&self, id: PoolId) -> Result<Option<Pool>>;
}

/// Store of pool snapshots that the message builders read from.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait PoolProvider: Send + Sync {
    /// Fetches the pool and resolves once the store reflects the result of
    /// that fetch.
    async fn wait_fresh(&self, id: PoolId) -> Result<()>;

    /// The most recently stored snapshot.
    fn pool(&self, id: PoolId) -> Option<Pool>;

    /// Requests a fetch without waiting for it.
    fn refresh(&self, id: PoolId);
}

/// [`PoolProvider`] keeping the last fetched snapshot of every pool in memory.
#[derive(Clone)]
pub struct CachedPools {
    inner: Arc<dyn PoolFetching>,
    cache: Arc<Mutex<HashMap<PoolId, Pool>>>,
}

impl CachedPools {
    pub fn new(inner: Arc<dyn PoolFetching>) -> Self {
        Self {
            inner,
            cache: Default::default(),
        }
    }

    async fn update(&self, id: PoolId) -> Result<()> {
        let pool = self.inner.fetch_pool(id).await?;
        let mut cache = self.cache.lock().unwrap();
        match pool {
            Some(pool) => {
                cache.insert(id, pool);
            }
            None => {
                if cache.remove(&id).is_some() {
                    tracing::debug!(%id, "pool disappeared from source");
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PoolProvider for CachedPools {
    async fn wait_fresh(&self, id: PoolId) -> Result<()> {
        self.update(id).await
    }

    fn pool(&self, id: PoolId) -> Option<Pool> {
        self.cache.lock().unwrap().get(&id).cloned()
    }

    fn refresh(&self, id: PoolId) {
        let this = self.clone();
        let task = async move {
            if let Err(err) = this.update(id).await {
                tracing::warn!(?err, "failed to refresh pool");
            }
        };
        tokio::spawn(task.instrument(tracing::info_span!("pool_refresh", %id)));
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::pool::osmo_atom_pool,
        mockall::predicate::eq,
        std::time::Duration,
    };

    #[tokio::test]
    async fn wait_fresh_stores_latest_snapshot() {
        let mut fetcher = MockPoolFetching::new();
        let mut seq = mockall::Sequence::new();
        fetcher
            .expect_fetch_pool()
            .with(eq(PoolId(1)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(osmo_atom_pool())));
        fetcher
            .expect_fetch_pool()
            .with(eq(PoolId(1)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(Some(Pool {
                    swap_fee: "0.01".parse().unwrap(),
                    ..osmo_atom_pool()
                }))
            });
        let pools = CachedPools::new(Arc::new(fetcher));

        assert_eq!(pools.pool(PoolId(1)), None);
        pools.wait_fresh(PoolId(1)).await.unwrap();
        assert_eq!(pools.pool(PoolId(1)), Some(osmo_atom_pool()));
        pools.wait_fresh(PoolId(1)).await.unwrap();
        assert_eq!(
            pools.pool(PoolId(1)).unwrap().swap_fee,
            "0.01".parse::<number::Dec>().unwrap()
        );
    }

    #[tokio::test]
    async fn missing_pool_evicts_stale_snapshot() {
        let mut fetcher = MockPoolFetching::new();
        let mut seq = mockall::Sequence::new();
        fetcher
            .expect_fetch_pool()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(osmo_atom_pool())));
        fetcher
            .expect_fetch_pool()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        let pools = CachedPools::new(Arc::new(fetcher));

        pools.wait_fresh(PoolId(1)).await.unwrap();
        assert!(pools.pool(PoolId(1)).is_some());
        pools.wait_fresh(PoolId(1)).await.unwrap();
        assert!(pools.pool(PoolId(1)).is_none());
    }

    #[tokio::test]
    async fn fetch_errors_keep_previous_snapshot() {
        let mut fetcher = MockPoolFetching::new();
        let mut seq = mockall::Sequence::new();
        fetcher
            .expect_fetch_pool()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(osmo_atom_pool())));
        fetcher
            .expect_fetch_pool()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(anyhow::anyhow!("node unreachable")));
        let pools = CachedPools::new(Arc::new(fetcher));

        pools.wait_fresh(PoolId(1)).await.unwrap();
        assert!(pools.wait_fresh(PoolId(1)).await.is_err());
        assert_eq!(pools.pool(PoolId(1)), Some(osmo_atom_pool()));
    }

    #[tokio::test]
    async fn refresh_happens_in_background() {
        let mut fetcher = MockPoolFetching::new();
        fetcher
            .expect_fetch_pool()
            .times(1)
            .returning(|_| Ok(Some(osmo_atom_pool())));
        let pools = CachedPools::new(Arc::new(fetcher));

        pools.refresh(PoolId(1));
        tokio::time::timeout(Duration::from_secs(1), async {
            while pools.pool(PoolId(1)).is_none() {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .unwrap();
    }
}

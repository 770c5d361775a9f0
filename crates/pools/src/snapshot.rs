use {
    crate::{Error, Pool, PoolProvider},
    model::PoolId,
    std::sync::Arc,
};

/// Hands out pool snapshots that are at least as recent as the call that
/// requested them.
#[derive(Clone)]
pub struct SnapshotGate {
    provider: Arc<dyn PoolProvider>,
}

impl SnapshotGate {
    pub fn new(provider: Arc<dyn PoolProvider>) -> Self {
        Self { provider }
    }

    /// Forces a fetch of `id` and returns the resulting snapshot. A pool that
    /// the source does not know is an error, never an empty pool.
    #[tracing::instrument(skip(self))]
    pub async fn get_pool(&self, id: PoolId) -> Result<Pool, Error> {
        self.provider.wait_fresh(id).await.map_err(Error::Fetch)?;
        self.provider.pool(id).ok_or(Error::UnknownPool(id))
    }

    /// Fire and forget refetch of `id`.
    pub fn refresh(&self, id: PoolId) {
        self.provider.refresh(id);
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{MockPoolProvider, pool::osmo_atom_pool},
        mockall::predicate::eq,
    };

    #[tokio::test]
    async fn waits_for_fresh_data_before_reading() {
        let mut provider = MockPoolProvider::new();
        let mut seq = mockall::Sequence::new();
        provider
            .expect_wait_fresh()
            .with(eq(PoolId(1)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        provider
            .expect_pool()
            .with(eq(PoolId(1)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Some(osmo_atom_pool()));
        let gate = SnapshotGate::new(Arc::new(provider));

        assert_eq!(gate.get_pool(PoolId(1)).await.unwrap(), osmo_atom_pool());
    }

    #[tokio::test]
    async fn unknown_pool_is_an_error() {
        let mut provider = MockPoolProvider::new();
        provider.expect_wait_fresh().returning(|_| Ok(()));
        provider.expect_pool().returning(|_| None);
        let gate = SnapshotGate::new(Arc::new(provider));

        assert!(matches!(
            gate.get_pool(PoolId(9)).await,
            Err(Error::UnknownPool(PoolId(9)))
        ));
    }

    #[tokio::test]
    async fn failed_fetch_does_not_serve_cached_snapshot() {
        let mut provider = MockPoolProvider::new();
        provider
            .expect_wait_fresh()
            .returning(|_| Err(anyhow::anyhow!("timeout")));
        provider.expect_pool().never();
        let gate = SnapshotGate::new(Arc::new(provider));

        assert!(matches!(
            gate.get_pool(PoolId(1)).await,
            Err(Error::Fetch(_))
        ));
    }
}

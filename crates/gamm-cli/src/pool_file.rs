use {
    anyhow::{Context, Result},
    model::{Currency, PoolId},
    pools::{Pool, PoolData, PoolFetching},
    std::path::PathBuf,
};

/// Serves pool state from a JSON dump of the chain's pool query. The file is
/// read again on every fetch so edits are picked up between messages.
pub struct PoolFile {
    path: Option<PathBuf>,
    currencies: Vec<Currency>,
}

impl PoolFile {
    pub fn new(path: Option<PathBuf>, currencies: Vec<Currency>) -> Self {
        Self { path, currencies }
    }
}

#[async_trait::async_trait]
impl PoolFetching for PoolFile {
    async fn fetch_pool(&self, id: PoolId) -> Result<Option<Pool>> {
        let path = self
            .path
            .as_ref()
            .context("no pool file configured, pass --pools")?;
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read pools at {}", path.display()))?;
        let pools: Vec<PoolData> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse pools at {}", path.display()))?;
        tracing::debug!(pools = pools.len(), path = %path.display(), "read pool file");

        let Some(data) = pools.into_iter().find(|pool| pool.id == id) else {
            return Ok(None);
        };
        Ok(Some(data.into_pool(&self.currencies)?))
    }
}

//! Static configuration of the pool messages: amino type strings, gas limits
//! and share token precision, plus the currencies known to the chain.

use {
    anyhow::{Context, anyhow, ensure},
    model::Currency,
    serde::{Deserialize, Serialize},
    std::path::Path,
};

pub const DEFAULT_GAS: u64 = 10_000_000;
pub const DEFAULT_SHARE_COIN_DECIMALS: u32 = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Configuration {
    #[serde(default)]
    pub msg_opts: MsgOpts,

    /// Currencies the chain knows about. Pool assets are resolved against this
    /// list.
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

impl Configuration {
    pub async fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read config at {}", path.as_ref().display()))?;
        let config = Self::from_toml(&content).map_err(|err| {
            anyhow!(
                "failed to parse TOML config at {}: {err:#}",
                path.as_ref().display()
            )
        })?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str::<Self>(content)?.validate()
    }

    pub fn validate(self) -> anyhow::Result<Self> {
        for (i, currency) in self.currencies.iter().enumerate() {
            ensure!(
                !currency.denom.is_empty(),
                "currency at position {i} has an empty denom"
            );
            ensure!(
                !self.currencies[..i]
                    .iter()
                    .any(|other| other.denom == currency.denom),
                "currency {} is configured twice",
                currency.denom
            );
        }
        Ok(self)
    }

    pub fn currency(&self, denom: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|currency| currency.denom == denom)
    }
}

/// Message options, one entry per pool operation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MsgOpts {
    #[serde(default = "MsgOpt::create_pool")]
    pub create_pool: MsgOpt,
    #[serde(default = "ShareMsgOpt::join_pool")]
    pub join_pool: ShareMsgOpt,
    #[serde(default = "ShareMsgOpt::exit_pool")]
    pub exit_pool: ShareMsgOpt,
    #[serde(default = "MsgOpt::swap_exact_amount_in")]
    pub swap_exact_amount_in: MsgOpt,
    #[serde(default = "MsgOpt::swap_exact_amount_out")]
    pub swap_exact_amount_out: MsgOpt,
}

impl Default for MsgOpts {
    fn default() -> Self {
        Self {
            create_pool: MsgOpt::create_pool(),
            join_pool: ShareMsgOpt::join_pool(),
            exit_pool: ShareMsgOpt::exit_pool(),
            swap_exact_amount_in: MsgOpt::swap_exact_amount_in(),
            swap_exact_amount_out: MsgOpt::swap_exact_amount_out(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MsgOpt {
    /// Amino type string of the message.
    #[serde(rename = "type")]
    pub type_: String,
    /// Gas limit of a transaction carrying this message.
    pub gas: u64,
}

impl MsgOpt {
    fn new(type_: &str) -> Self {
        Self {
            type_: type_.to_owned(),
            gas: DEFAULT_GAS,
        }
    }

    fn create_pool() -> Self {
        Self::new("osmosis/gamm/create-pool")
    }

    fn swap_exact_amount_in() -> Self {
        Self::new("osmosis/gamm/swap-exact-amount-in")
    }

    fn swap_exact_amount_out() -> Self {
        Self::new("osmosis/gamm/swap-exact-amount-out")
    }
}

/// Options of the operations that mint or burn pool shares.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ShareMsgOpt {
    #[serde(rename = "type")]
    pub type_: String,
    pub gas: u64,
    /// Decimals of the pool share token.
    #[serde(default = "default_share_coin_decimals")]
    pub share_coin_decimals: u32,
}

impl ShareMsgOpt {
    fn new(type_: &str) -> Self {
        Self {
            type_: type_.to_owned(),
            gas: DEFAULT_GAS,
            share_coin_decimals: DEFAULT_SHARE_COIN_DECIMALS,
        }
    }

    fn join_pool() -> Self {
        Self::new("osmosis/gamm/join-pool")
    }

    fn exit_pool() -> Self {
        Self::new("osmosis/gamm/exit-pool")
    }
}

fn default_share_coin_decimals() -> u32 {
    DEFAULT_SHARE_COIN_DECIMALS
}

#[cfg(test)]
mod tests {
    use {super::*, std::io::Write};

    #[test]
    fn defaults() {
        let config = Configuration::from_toml("").unwrap();
        let opts = config.msg_opts;
        assert_eq!(opts.create_pool.type_, "osmosis/gamm/create-pool");
        assert_eq!(opts.join_pool.type_, "osmosis/gamm/join-pool");
        assert_eq!(opts.exit_pool.type_, "osmosis/gamm/exit-pool");
        assert_eq!(
            opts.swap_exact_amount_in.type_,
            "osmosis/gamm/swap-exact-amount-in"
        );
        assert_eq!(
            opts.swap_exact_amount_out.type_,
            "osmosis/gamm/swap-exact-amount-out"
        );
        assert_eq!(opts.join_pool.share_coin_decimals, 6);
        assert_eq!(opts.exit_pool.gas, DEFAULT_GAS);
        assert!(config.currencies.is_empty());
    }

    #[test]
    fn deserialize_full_configuration() {
        let toml = r#"
        [msg-opts.join-pool]
        type = "custom/join"
        gas = 250000
        share-coin-decimals = 18

        [msg-opts.swap-exact-amount-out]
        type = "custom/swap-out"
        gas = 120000

        [[currencies]]
        denom = "uosmo"
        decimals = 6

        [[currencies]]
        denom = "uion"
        decimals = 6
        "#;

        let config = Configuration::from_toml(toml).unwrap();
        assert_eq!(config.msg_opts.join_pool.type_, "custom/join");
        assert_eq!(config.msg_opts.join_pool.gas, 250_000);
        assert_eq!(config.msg_opts.join_pool.share_coin_decimals, 18);
        assert_eq!(config.msg_opts.swap_exact_amount_out.gas, 120_000);
        // untouched sections keep their defaults
        assert_eq!(config.msg_opts.exit_pool, MsgOpts::default().exit_pool);
        assert_eq!(config.currency("uion"), Some(&Currency::new("uion", 6)));
        assert_eq!(config.currency("uatom"), None);
    }

    #[test]
    fn rejects_unknown_fields_and_duplicates() {
        assert!(Configuration::from_toml("unknown = 1").is_err());
        let duplicated = r#"
        [[currencies]]
        denom = "uosmo"
        decimals = 6

        [[currencies]]
        denom = "uosmo"
        decimals = 18
        "#;
        assert!(Configuration::from_toml(duplicated).is_err());
    }

    #[tokio::test]
    async fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[msg-opts.create-pool]\ntype = \"x/create\"\ngas = 1\n")
            .unwrap();
        let config = Configuration::from_path(file.path()).await.unwrap();
        assert_eq!(config.msg_opts.create_pool.type_, "x/create");
        assert_eq!(config.msg_opts.create_pool.gas, 1);

        assert!(Configuration::from_path("/does/not/exist.toml").await.is_err());
    }
}

use {
    model::PoolId,
    std::{fmt, path::PathBuf, str::FromStr},
};

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// The log filter.
    #[clap(
        long,
        env,
        default_value = "warn,gamm_cli=info,gamm_account=debug,pools=debug"
    )]
    pub log: String,

    /// At which log level logs should be printed to stderr instead of stdout.
    #[clap(long, env)]
    pub stderr_threshold: Option<tracing::Level>,

    /// Path to the configuration file. This file should be in TOML format and
    /// holds the message options and the known currencies. Defaults apply
    /// when omitted.
    #[clap(long, env)]
    pub config: Option<PathBuf>,

    /// Path to a JSON array of pool states as returned by the chain's pool
    /// query. Required for every operation on an existing pool.
    #[clap(long, env)]
    pub pools: Option<PathBuf>,

    /// Address of the account the message is built for.
    #[clap(long, env)]
    pub sender: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Creates a new weighted pool.
    CreatePool {
        /// Swap fee in percent, e.g. `0.3`.
        #[clap(long)]
        swap_fee: String,

        /// Initial asset as `weight:amount:denom`. Repeat for every asset.
        #[clap(long = "asset", required = true)]
        assets: Vec<AssetArg>,
    },
    /// Mints a fixed amount of pool shares.
    JoinPool {
        #[clap(long)]
        pool_id: PoolId,

        #[clap(long)]
        share_out_amount: String,

        /// Maximum slippage in percent. `0` or empty disables the caps.
        #[clap(long, default_value = "")]
        max_slippage: String,
    },
    /// Burns a fixed amount of pool shares.
    ExitPool {
        #[clap(long)]
        pool_id: PoolId,

        #[clap(long)]
        share_in_amount: String,

        #[clap(long, default_value = "")]
        max_slippage: String,
    },
    /// Swaps a fixed amount of one token.
    SwapExactAmountIn {
        #[clap(long)]
        pool_id: PoolId,

        #[clap(long)]
        token_in_denom: String,

        #[clap(long)]
        token_in_amount: String,

        #[clap(long)]
        token_out_denom: String,

        #[clap(long, default_value = "")]
        max_slippage: String,
    },
    /// Swaps for a fixed amount of one token.
    SwapExactAmountOut {
        #[clap(long)]
        pool_id: PoolId,

        #[clap(long)]
        token_in_denom: String,

        #[clap(long)]
        token_out_denom: String,

        #[clap(long)]
        token_out_amount: String,

        #[clap(long, default_value = "")]
        max_slippage: String,
    },
}

/// Initial pool asset given as `weight:amount:denom`. The denom goes last
/// since IBC denoms contain slashes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetArg {
    pub weight: String,
    pub amount: String,
    pub denom: String,
}

impl FromStr for AssetArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(weight), Some(amount), Some(denom))
                if !weight.is_empty() && !amount.is_empty() && !denom.is_empty() =>
            {
                Ok(Self {
                    weight: weight.to_owned(),
                    amount: amount.to_owned(),
                    denom: denom.to_owned(),
                })
            }
            _ => Err(format!("expected weight:amount:denom but got {s:?}")),
        }
    }
}

impl fmt::Display for AssetArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.weight, self.amount, self.denom)
    }
}

use {
    crate::{
        PoolFile,
        cli::{self, Command},
    },
    anyhow::{Context, Result},
    clap::Parser,
    configs::Configuration,
    gamm_account::{MsgBuilder, PoolAssetInput},
    model::{Currency, Message},
    pools::{CachedPools, SnapshotGate},
    std::sync::Arc,
    tracing::level_filters::LevelFilter,
};

pub async fn start(args: impl Iterator<Item = String>) {
    let args = cli::Args::parse_from(args);
    let stderr_threshold = args
        .stderr_threshold
        .map(LevelFilter::from_level)
        .unwrap_or(LevelFilter::ERROR);
    observe::tracing::initialize(&args.log, stderr_threshold);
    tracing::info!("running gamm-cli with {args:#?}");

    match run(args).await {
        Ok(msg) => match serde_json::to_string_pretty(&msg) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(?err, "failed to serialize message");
                std::process::exit(1);
            }
        },
        Err(err) => {
            tracing::error!(?err, "failed to build message");
            std::process::exit(1);
        }
    }
}

/// Builds the message selected by the command line against the configured
/// currencies and the pool file.
pub async fn run(args: cli::Args) -> Result<Message> {
    let config = match &args.config {
        Some(path) => Configuration::from_path(path).await?,
        None => Configuration::default(),
    };
    let pools = CachedPools::new(Arc::new(PoolFile::new(
        args.pools.clone(),
        config.currencies.clone(),
    )));
    let msgs = MsgBuilder::new(
        args.sender,
        config.msg_opts.clone(),
        SnapshotGate::new(Arc::new(pools)),
    );
    let currency = |denom: &str| -> Result<Currency> {
        config
            .currency(denom)
            .cloned()
            .with_context(|| format!("currency {denom} is not configured"))
    };

    let msg = match args.command {
        Command::CreatePool { swap_fee, assets } => {
            let assets = assets
                .into_iter()
                .map(|asset| {
                    Ok::<_, anyhow::Error>(PoolAssetInput {
                        weight: asset.weight,
                        currency: currency(&asset.denom)?,
                        amount: asset.amount,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            msgs.make_create_pool_msg(&swap_fee, &assets)?
        }
        Command::JoinPool {
            pool_id,
            share_out_amount,
            max_slippage,
        } => {
            msgs.make_join_pool_msg(pool_id, &share_out_amount, &max_slippage)
                .await?
        }
        Command::ExitPool {
            pool_id,
            share_in_amount,
            max_slippage,
        } => {
            msgs.make_exit_pool_msg(pool_id, &share_in_amount, &max_slippage)
                .await?
        }
        Command::SwapExactAmountIn {
            pool_id,
            token_in_denom,
            token_in_amount,
            token_out_denom,
            max_slippage,
        } => {
            msgs.make_swap_exact_amount_in_msg(
                pool_id,
                currency(&token_in_denom)?,
                &token_in_amount,
                currency(&token_out_denom)?,
                &max_slippage,
            )
            .await?
        }
        Command::SwapExactAmountOut {
            pool_id,
            token_in_denom,
            token_out_denom,
            token_out_amount,
            max_slippage,
        } => {
            msgs.make_swap_exact_amount_out_msg(
                pool_id,
                currency(&token_in_denom)?,
                currency(&token_out_denom)?,
                &token_out_amount,
                &max_slippage,
            )
            .await?
        }
    };
    Ok(msg)
}

use {
    crate::{
        Error,
        MsgSource,
        SendError,
        Submitter,
        builders::{
            CreatePool,
            ExitPool,
            JoinPool,
            PoolAssetInput,
            SwapExactAmountIn,
            SwapExactAmountOut,
        },
        reactor::{Reactor, RefreshPlan},
    },
    account_balances::BalanceCache,
    configs::MsgOpts,
    futures::FutureExt,
    model::{Currency, Fee, Message, Operation, PoolId, TxResponse},
    pools::{Pool, SnapshotGate},
    std::sync::Arc,
    tracing::instrument,
};

/// Builds the pool messages of one sender. Every message that depends on pool
/// state is computed against a snapshot fetched for that message.
#[derive(Clone)]
pub struct MsgBuilder {
    sender: String,
    opts: MsgOpts,
    pools: SnapshotGate,
}

impl MsgBuilder {
    pub fn new(sender: impl Into<String>, opts: MsgOpts, pools: SnapshotGate) -> Self {
        Self {
            sender: sender.into(),
            opts,
            pools,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn opts(&self) -> &MsgOpts {
        &self.opts
    }

    #[instrument(skip(self, assets), fields(assets = assets.len()))]
    pub fn make_create_pool_msg(
        &self,
        swap_fee: &str,
        assets: &[PoolAssetInput],
    ) -> Result<Message, Error> {
        CreatePool::parse(swap_fee, assets)?.build(&self.opts.create_pool, &self.sender)
    }

    #[instrument(skip(self))]
    pub async fn make_join_pool_msg(
        &self,
        pool_id: PoolId,
        share_out_amount: &str,
        max_slippage: &str,
    ) -> Result<Message, Error> {
        let join = JoinPool::parse(pool_id, share_out_amount, max_slippage)?;
        let pool = self.pools.get_pool(pool_id).await?;
        join.build(&self.opts.join_pool, &self.sender, &pool)
    }

    #[instrument(skip(self))]
    pub async fn make_exit_pool_msg(
        &self,
        pool_id: PoolId,
        share_in_amount: &str,
        max_slippage: &str,
    ) -> Result<Message, Error> {
        let exit = ExitPool::parse(pool_id, share_in_amount, max_slippage)?;
        let pool = self.pools.get_pool(pool_id).await?;
        exit.build(&self.opts.exit_pool, &self.sender, &pool)
    }

    #[instrument(
        skip(self, in_currency, out_currency),
        fields(in_denom = %in_currency.denom, out_denom = %out_currency.denom)
    )]
    pub async fn make_swap_exact_amount_in_msg(
        &self,
        pool_id: PoolId,
        in_currency: Currency,
        in_amount: &str,
        out_currency: Currency,
        max_slippage: &str,
    ) -> Result<Message, Error> {
        let swap =
            SwapExactAmountIn::parse(pool_id, in_currency, in_amount, out_currency, max_slippage)?;
        let pool = self.pools.get_pool(pool_id).await?;
        swap.build(&self.opts.swap_exact_amount_in, &self.sender, &pool)
    }

    #[instrument(
        skip(self, in_currency, out_currency),
        fields(in_denom = %in_currency.denom, out_denom = %out_currency.denom)
    )]
    pub async fn make_swap_exact_amount_out_msg(
        &self,
        pool_id: PoolId,
        in_currency: Currency,
        out_currency: Currency,
        out_amount: &str,
        max_slippage: &str,
    ) -> Result<Message, Error> {
        let swap = SwapExactAmountOut::parse(
            pool_id,
            in_currency,
            out_currency,
            out_amount,
            max_slippage,
        )?;
        let pool = self.pools.get_pool(pool_id).await?;
        swap.build(&self.opts.swap_exact_amount_out, &self.sender, &pool)
    }

    /// Defers fetching the pool and building the message until the submitter
    /// polls the producer.
    fn producer<F>(&self, pool_id: PoolId, build: F) -> MsgSource
    where
        F: FnOnce(&str, &Pool) -> Result<Message, Error> + Send + 'static,
    {
        let pools = self.pools.clone();
        let sender = self.sender.clone();
        let producer = async move {
            let pool = pools.get_pool(pool_id).await?;
            Ok::<_, Error>(vec![build(&sender, &pool)?])
        };
        MsgSource::Producer(producer.boxed())
    }
}

/// Pool operations of a single account.
///
/// `send_*` methods validate their input, hand the message to the
/// [`Submitter`] and return once the transaction has a verdict and the
/// resulting cache refreshes were requested.
pub struct GammAccount {
    msgs: MsgBuilder,
    submitter: Arc<dyn Submitter>,
    reactor: Reactor,
}

impl GammAccount {
    pub fn new(
        msgs: MsgBuilder,
        balances: Arc<dyn BalanceCache>,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        Self {
            reactor: Reactor::new(balances, msgs.pools.clone()),
            msgs,
            submitter,
        }
    }

    pub fn msgs(&self) -> &MsgBuilder {
        &self.msgs
    }

    #[instrument(skip(self, assets), fields(assets = assets.len()))]
    pub async fn send_create_pool_msg(
        &self,
        swap_fee: &str,
        assets: &[PoolAssetInput],
        memo: &str,
    ) -> Result<TxResponse, SendError> {
        let create = CreatePool::parse(swap_fee, assets)?;
        let opt = &self.msgs.opts.create_pool;
        let msg = create.build(opt, &self.msgs.sender)?;
        self.submit(
            Operation::CreatePool,
            MsgSource::Msgs(vec![msg]),
            opt.gas,
            memo,
            RefreshPlan::create_pool(create.denoms()),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn send_join_pool_msg(
        &self,
        pool_id: PoolId,
        share_out_amount: &str,
        max_slippage: &str,
        memo: &str,
    ) -> Result<TxResponse, SendError> {
        let join = JoinPool::parse(pool_id, share_out_amount, max_slippage)?;
        let opt = self.msgs.opts.join_pool.clone();
        let gas = opt.gas;
        let msgs = self
            .msgs
            .producer(pool_id, move |sender, pool| join.build(&opt, sender, pool));
        self.submit(
            Operation::JoinPool,
            msgs,
            gas,
            memo,
            RefreshPlan::join_or_exit(pool_id),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn send_exit_pool_msg(
        &self,
        pool_id: PoolId,
        share_in_amount: &str,
        max_slippage: &str,
        memo: &str,
    ) -> Result<TxResponse, SendError> {
        let exit = ExitPool::parse(pool_id, share_in_amount, max_slippage)?;
        let opt = self.msgs.opts.exit_pool.clone();
        let gas = opt.gas;
        let msgs = self
            .msgs
            .producer(pool_id, move |sender, pool| exit.build(&opt, sender, pool));
        self.submit(
            Operation::ExitPool,
            msgs,
            gas,
            memo,
            RefreshPlan::join_or_exit(pool_id),
        )
        .await
    }

    #[instrument(
        skip(self, in_currency, out_currency),
        fields(in_denom = %in_currency.denom, out_denom = %out_currency.denom)
    )]
    pub async fn send_swap_exact_amount_in_msg(
        &self,
        pool_id: PoolId,
        in_currency: Currency,
        in_amount: &str,
        out_currency: Currency,
        max_slippage: &str,
        memo: &str,
    ) -> Result<TxResponse, SendError> {
        let swap =
            SwapExactAmountIn::parse(pool_id, in_currency, in_amount, out_currency, max_slippage)?;
        let plan = RefreshPlan::swap(&swap.token_in.currency.denom, &swap.out_currency.denom);
        let opt = self.msgs.opts.swap_exact_amount_in.clone();
        let gas = opt.gas;
        let msgs = self
            .msgs
            .producer(pool_id, move |sender, pool| swap.build(&opt, sender, pool));
        self.submit(Operation::SwapExactAmountIn, msgs, gas, memo, plan)
            .await
    }

    #[instrument(
        skip(self, in_currency, out_currency),
        fields(in_denom = %in_currency.denom, out_denom = %out_currency.denom)
    )]
    pub async fn send_swap_exact_amount_out_msg(
        &self,
        pool_id: PoolId,
        in_currency: Currency,
        out_currency: Currency,
        out_amount: &str,
        max_slippage: &str,
        memo: &str,
    ) -> Result<TxResponse, SendError> {
        let swap = SwapExactAmountOut::parse(
            pool_id,
            in_currency,
            out_currency,
            out_amount,
            max_slippage,
        )?;
        let plan = RefreshPlan::swap(&swap.in_currency.denom, &swap.token_out.currency.denom);
        let opt = self.msgs.opts.swap_exact_amount_out.clone();
        let gas = opt.gas;
        let msgs = self
            .msgs
            .producer(pool_id, move |sender, pool| swap.build(&opt, sender, pool));
        self.submit(Operation::SwapExactAmountOut, msgs, gas, memo, plan)
            .await
    }

    async fn submit(
        &self,
        operation: Operation,
        msgs: MsgSource,
        gas: u64,
        memo: &str,
        plan: RefreshPlan,
    ) -> Result<TxResponse, SendError> {
        let response = self
            .submitter
            .send(operation, msgs, Fee::gas_only(gas), memo.to_owned())
            .await?;
        tracing::debug!(
            %operation,
            tx_hash = %response.tx_hash,
            code = ?response.code,
            "transaction confirmed"
        );
        self.reactor.react(operation, &response, &plan);
        Ok(response)
    }
}

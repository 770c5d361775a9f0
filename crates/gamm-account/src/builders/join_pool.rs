use {
    super::{bounds, parse_amount, parse_slippage},
    crate::Error,
    configs::ShareMsgOpt,
    model::{Message, Msg, PoolId, Slippage, message::MsgJoinPool},
    number::Dec,
    pools::Pool,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinPool {
    pub pool_id: PoolId,
    /// Shares to mint in whole share units.
    pub share_out: Dec,
    pub slippage: Slippage,
}

impl JoinPool {
    pub fn parse(
        pool_id: PoolId,
        share_out_amount: &str,
        max_slippage: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            pool_id,
            share_out: parse_amount(share_out_amount)?,
            slippage: parse_slippage(max_slippage)?,
        })
    }

    /// Caps every token the pool will pull in at `estimate * (1 + slippage)`.
    pub fn build(&self, opt: &ShareMsgOpt, sender: &str, pool: &Pool) -> Result<Message, Error> {
        let estimates = pool.estimate_join_swap(&self.share_out, opt.share_coin_decimals)?;
        let token_in_maxs = bounds(&estimates, self.slippage.max_in_factor())?;

        Ok(Message {
            type_: opt.type_.clone(),
            value: Msg::JoinPool(MsgJoinPool {
                sender: sender.to_owned(),
                pool_id: pool.id,
                share_out_amount: self.share_out.to_integer(opt.share_coin_decimals)?,
                token_in_maxs,
            }),
        })
    }
}

use {
    super::{bounds, parse_amount, parse_slippage},
    crate::Error,
    configs::ShareMsgOpt,
    model::{Message, Msg, PoolId, Slippage, message::MsgExitPool},
    number::Dec,
    pools::Pool,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitPool {
    pub pool_id: PoolId,
    /// Shares to burn in whole share units.
    pub share_in: Dec,
    pub slippage: Slippage,
}

impl ExitPool {
    pub fn parse(
        pool_id: PoolId,
        share_in_amount: &str,
        max_slippage: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            pool_id,
            share_in: parse_amount(share_in_amount)?,
            slippage: parse_slippage(max_slippage)?,
        })
    }

    /// Floors every token paid out at `estimate * (1 - slippage)`.
    pub fn build(&self, opt: &ShareMsgOpt, sender: &str, pool: &Pool) -> Result<Message, Error> {
        let estimates = pool.estimate_exit_swap(&self.share_in, opt.share_coin_decimals)?;
        let token_out_mins = bounds(&estimates, self.slippage.min_out_factor())?;

        Ok(Message {
            type_: opt.type_.clone(),
            value: Msg::ExitPool(MsgExitPool {
                sender: sender.to_owned(),
                pool_id: pool.id,
                share_in_amount: self.share_in.to_integer(opt.share_coin_decimals)?,
                token_out_mins,
            }),
        })
    }
}

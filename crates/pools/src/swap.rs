//! Swap estimates and the swap message factories of a pool snapshot.

use {
    crate::{Error, Pool, PoolAsset, weighted_math},
    model::{
        Currency,
        Message,
        Msg,
        Slippage,
        TokenAmount,
        message::{
            MsgSwapExactAmountIn,
            MsgSwapExactAmountOut,
            SwapAmountInRoute,
            SwapAmountOutRoute,
        },
    },
    number::Dec,
};

impl Pool {
    fn swap_assets(
        &self,
        denom_in: &str,
        denom_out: &str,
    ) -> Result<(&PoolAsset, &PoolAsset), Error> {
        if denom_in == denom_out {
            return Err(Error::SameDenom(denom_in.to_owned()));
        }
        Ok((self.asset(denom_in)?, self.asset(denom_out)?))
    }

    /// Expected output of swapping exactly `token_in`. Truncated to whole raw
    /// units of `out_currency`.
    pub fn estimate_swap_exact_amount_in(
        &self,
        token_in: &TokenAmount,
        out_currency: &Currency,
    ) -> Result<TokenAmount, Error> {
        let (asset_in, asset_out) =
            self.swap_assets(&token_in.currency.denom, &out_currency.denom)?;
        let amount_out = weighted_math::calc_out_given_in(
            &asset_in.balance(),
            &asset_in.weight,
            &asset_out.balance(),
            &asset_out.weight,
            &Dec::from_integer(&token_in.raw()?, 0),
            &self.swap_fee,
        )?;
        Ok(TokenAmount::from_raw(
            out_currency.clone(),
            &amount_out.to_integer(0)?,
        ))
    }

    /// Expected input needed to receive exactly `token_out`. Truncated to
    /// whole raw units of `in_currency`.
    pub fn estimate_swap_exact_amount_out(
        &self,
        in_currency: &Currency,
        token_out: &TokenAmount,
    ) -> Result<TokenAmount, Error> {
        let (asset_in, asset_out) =
            self.swap_assets(&in_currency.denom, &token_out.currency.denom)?;
        let amount_in = weighted_math::calc_in_given_out(
            &asset_in.balance(),
            &asset_in.weight,
            &asset_out.balance(),
            &asset_out.weight,
            &Dec::from_integer(&token_out.raw()?, 0),
            &self.swap_fee,
        )?;
        Ok(TokenAmount::from_raw(
            in_currency.clone(),
            &amount_in.to_integer(0)?,
        ))
    }

    /// Single hop swap of exactly `token_in` through this pool. With a bounded
    /// `slippage` the message carries `estimated_out * (1 - slippage)` as the
    /// minimum output.
    pub fn make_swap_exact_amount_in_msg(
        &self,
        type_: &str,
        sender: &str,
        token_in: &TokenAmount,
        out_currency: &Currency,
        slippage: &Slippage,
    ) -> Result<Message, Error> {
        let estimated_out = self.estimate_swap_exact_amount_in(token_in, out_currency)?;
        let token_out_min_amount = slippage
            .min_out_factor()
            .map(|factor| estimated_out.scaled_coin(&factor))
            .transpose()?
            .map(|coin| coin.amount);
        tracing::debug!(
            pool_id = %self.id,
            estimated_out = %estimated_out.amount,
            ?token_out_min_amount,
            "built swap exact amount in"
        );

        Ok(Message {
            type_: type_.to_owned(),
            value: Msg::SwapExactAmountIn(MsgSwapExactAmountIn {
                sender: sender.to_owned(),
                routes: vec![SwapAmountInRoute {
                    pool_id: self.id,
                    token_out_denom: out_currency.denom.clone(),
                }],
                token_in: token_in.to_coin()?,
                token_out_min_amount,
            }),
        })
    }

    /// Single hop swap for exactly `token_out`. With a bounded `slippage` the
    /// message caps the input at `estimated_in * (1 + slippage)`.
    pub fn make_swap_exact_amount_out_msg(
        &self,
        type_: &str,
        sender: &str,
        in_currency: &Currency,
        token_out: &TokenAmount,
        slippage: &Slippage,
    ) -> Result<Message, Error> {
        let estimated_in = self.estimate_swap_exact_amount_out(in_currency, token_out)?;
        let token_in_max_amount = slippage
            .max_in_factor()
            .map(|factor| estimated_in.scaled_coin(&factor))
            .transpose()?
            .map(|coin| coin.amount);
        tracing::debug!(
            pool_id = %self.id,
            estimated_in = %estimated_in.amount,
            ?token_in_max_amount,
            "built swap exact amount out"
        );

        Ok(Message {
            type_: type_.to_owned(),
            value: Msg::SwapExactAmountOut(MsgSwapExactAmountOut {
                sender: sender.to_owned(),
                routes: vec![SwapAmountOutRoute {
                    pool_id: self.id,
                    token_in_denom: in_currency.denom.clone(),
                }],
                token_in_max_amount,
                token_out: token_out.to_coin()?,
            }),
        })
    }
}

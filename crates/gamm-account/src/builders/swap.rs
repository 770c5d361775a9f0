use {
    super::{parse_amount, parse_slippage},
    crate::Error,
    configs::MsgOpt,
    model::{Currency, Message, PoolId, Slippage, TokenAmount},
    pools::Pool,
};

fn ensure_distinct(a: &Currency, b: &Currency) -> Result<(), Error> {
    if a.denom == b.denom {
        return Err(Error::InvalidAmount(format!(
            "can not swap {} for itself",
            a.denom
        )));
    }
    Ok(())
}

/// Swap of a fixed input amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapExactAmountIn {
    pub pool_id: PoolId,
    pub token_in: TokenAmount,
    pub out_currency: Currency,
    pub slippage: Slippage,
}

impl SwapExactAmountIn {
    pub fn parse(
        pool_id: PoolId,
        in_currency: Currency,
        in_amount: &str,
        out_currency: Currency,
        max_slippage: &str,
    ) -> Result<Self, Error> {
        ensure_distinct(&in_currency, &out_currency)?;
        Ok(Self {
            pool_id,
            token_in: TokenAmount::new(in_currency, parse_amount(in_amount)?),
            out_currency,
            slippage: parse_slippage(max_slippage)?,
        })
    }

    pub fn build(&self, opt: &MsgOpt, sender: &str, pool: &Pool) -> Result<Message, Error> {
        Ok(pool.make_swap_exact_amount_in_msg(
            &opt.type_,
            sender,
            &self.token_in,
            &self.out_currency,
            &self.slippage,
        )?)
    }
}

/// Swap for a fixed output amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapExactAmountOut {
    pub pool_id: PoolId,
    pub in_currency: Currency,
    pub token_out: TokenAmount,
    pub slippage: Slippage,
}

impl SwapExactAmountOut {
    pub fn parse(
        pool_id: PoolId,
        in_currency: Currency,
        out_currency: Currency,
        out_amount: &str,
        max_slippage: &str,
    ) -> Result<Self, Error> {
        ensure_distinct(&in_currency, &out_currency)?;
        Ok(Self {
            pool_id,
            in_currency,
            token_out: TokenAmount::new(out_currency, parse_amount(out_amount)?),
            slippage: parse_slippage(max_slippage)?,
        })
    }

    pub fn build(&self, opt: &MsgOpt, sender: &str, pool: &Pool) -> Result<Message, Error> {
        Ok(pool.make_swap_exact_amount_out_msg(
            &opt.type_,
            sender,
            &self.in_currency,
            &self.token_out,
            &self.slippage,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        testlib::currencies::{atom, osmo},
    };

    #[test]
    fn rejects_swapping_a_denom_for_itself() {
        assert!(matches!(
            SwapExactAmountIn::parse(PoolId(1), osmo(), "1", osmo(), "1"),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            SwapExactAmountOut::parse(PoolId(1), atom(), atom(), "1", "1"),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn rejects_invalid_amounts() {
        assert!(matches!(
            SwapExactAmountIn::parse(PoolId(1), osmo(), "-3", atom(), "1"),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            SwapExactAmountOut::parse(PoolId(1), osmo(), atom(), "1", "-1"),
            Err(Error::InvalidAmount(_))
        ));
    }
}

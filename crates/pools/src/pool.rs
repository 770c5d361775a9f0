use {
    crate::Error,
    model::{
        Coin,
        Currency,
        PoolId,
        TokenAmount,
        message::{PoolAsset as MsgPoolAsset, PoolParams},
    },
    num::BigUint,
    number::{Dec, units::precision_dec},
    serde::Deserialize,
};

/// Immutable snapshot of a weighted pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    pub id: PoolId,
    /// In on-chain order.
    pub assets: Vec<PoolAsset>,
    /// Outstanding shares in raw units.
    pub total_shares: BigUint,
    pub swap_fee: Dec,
    pub exit_fee: Dec,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolAsset {
    pub currency: Currency,
    pub weight: Dec,
    /// Balance held by the pool in raw units.
    pub amount: BigUint,
}

impl PoolAsset {
    pub fn balance(&self) -> Dec {
        Dec::from_integer(&self.amount, 0)
    }
}

impl Pool {
    pub fn asset(&self, denom: &str) -> Result<&PoolAsset, Error> {
        self.assets
            .iter()
            .find(|asset| asset.currency.denom == denom)
            .ok_or_else(|| Error::UnknownDenom {
                pool_id: self.id,
                denom: denom.to_owned(),
            })
    }

    /// Token amounts that have to be provided to mint `share_out` shares.
    pub fn estimate_join_swap(
        &self,
        share_out: &Dec,
        share_decimals: u32,
    ) -> Result<Vec<TokenAmount>, Error> {
        let ratio = self.share_ratio(share_out, share_decimals)?;
        Ok(self
            .assets
            .iter()
            .map(|asset| {
                let amount = Dec::from_integer(&asset.amount, asset.currency.decimals);
                TokenAmount::new(asset.currency.clone(), &amount * &ratio)
            })
            .collect())
    }

    /// Token amounts paid out for burning `share_in` shares, net of the exit
    /// fee.
    pub fn estimate_exit_swap(
        &self,
        share_in: &Dec,
        share_decimals: u32,
    ) -> Result<Vec<TokenAmount>, Error> {
        let ratio = self.share_ratio(share_in, share_decimals)?;
        let after_fee = &ratio * &(&Dec::one() - &self.exit_fee);
        Ok(self
            .assets
            .iter()
            .map(|asset| {
                let amount = Dec::from_integer(&asset.amount, asset.currency.decimals);
                TokenAmount::new(asset.currency.clone(), &amount * &after_fee)
            })
            .collect())
    }

    /// Fraction of the pool that `shares` (human readable) represent.
    fn share_ratio(&self, shares: &Dec, share_decimals: u32) -> Result<Dec, Error> {
        if self.total_shares == BigUint::default() {
            return Err(Error::NoShares(self.id));
        }
        let raw_shares = shares * &precision_dec(share_decimals);
        Ok(raw_shares.checked_quo(&Dec::from_integer(&self.total_shares, 0))?)
    }
}

/// Pool state as served by the chain's query endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolData {
    pub id: PoolId,
    pub pool_params: PoolParams,
    pub total_shares: Coin,
    pub pool_assets: Vec<MsgPoolAsset>,
}

impl PoolData {
    /// Resolves every asset denom against the configured currencies.
    pub fn into_pool(self, currencies: &[Currency]) -> Result<Pool, Error> {
        let assets = self
            .pool_assets
            .into_iter()
            .map(|asset| {
                let currency = currencies
                    .iter()
                    .find(|currency| currency.denom == asset.token.denom)
                    .ok_or_else(|| Error::UnknownCurrency(asset.token.denom.clone()))?;
                Ok(PoolAsset {
                    currency: currency.clone(),
                    weight: Dec::from_integer(&asset.weight, 0),
                    amount: asset.token.amount,
                })
            })
            .collect::<Result<_, Error>>()?;
        Ok(Pool {
            id: self.id,
            assets,
            total_shares: self.total_shares.amount,
            swap_fee: self.pool_params.swap_fee,
            exit_fee: self.pool_params.exit_fee,
        })
    }
}

/// 50/50 OSMO/ATOM pool with 1000 of each and 100 shares (6 decimals)
/// outstanding.
#[cfg(test)]
pub(crate) fn osmo_atom_pool() -> Pool {
    Pool {
        id: PoolId(1),
        assets: vec![
            PoolAsset {
                currency: testlib::currencies::osmo(),
                weight: Dec::one(),
                amount: BigUint::from(1_000_000_000u64),
            },
            PoolAsset {
                currency: testlib::currencies::atom(),
                weight: Dec::one(),
                amount: BigUint::from(1_000_000_000u64),
            },
        ],
        total_shares: BigUint::from(100_000_000u64),
        swap_fee: Dec::zero(),
        exit_fee: Dec::zero(),
    }
}

use {
    super::parse_amount,
    crate::Error,
    configs::MsgOpt,
    model::{
        Currency,
        Message,
        Msg,
        TokenAmount,
        message::{MsgCreatePool, PoolAsset, PoolParams},
    },
    num::{BigUint, Zero},
    number::Dec,
    std::str::FromStr,
};

/// One initial asset of a new pool as entered by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolAssetInput {
    /// Positive integer.
    pub weight: String,
    pub currency: Currency,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePool {
    swap_fee: Dec,
    assets: Vec<(BigUint, TokenAmount)>,
}

impl CreatePool {
    /// `swap_fee` is a percentage, `"1"` meaning 1%.
    pub fn parse(swap_fee: &str, assets: &[PoolAssetInput]) -> Result<Self, Error> {
        // The on-chain fee keeps 18 fractional digits.
        let swap_fee = parse_amount(swap_fee)?
            .percent_to_fraction()
            .truncate_to(number::PRECISION);
        if swap_fee >= Dec::one() {
            return Err(Error::InvalidAmount(format!(
                "swap fee {swap_fee} must be below 100%"
            )));
        }
        if assets.is_empty() {
            return Err(Error::InvalidAmount("pool has no assets".to_owned()));
        }

        let mut parsed = Vec::with_capacity(assets.len());
        for (i, asset) in assets.iter().enumerate() {
            if assets[..i]
                .iter()
                .any(|other| other.currency.denom == asset.currency.denom)
            {
                return Err(Error::InvalidAmount(format!(
                    "{} is supplied twice",
                    asset.currency.denom
                )));
            }
            let weight = BigUint::from_str(asset.weight.trim())
                .ok()
                .filter(|weight| !weight.is_zero())
                .ok_or_else(|| {
                    Error::InvalidAmount(format!(
                        "weight {:?} is not a positive integer",
                        asset.weight
                    ))
                })?;
            let amount = parse_amount(&asset.amount)?;
            parsed.push((weight, TokenAmount::new(asset.currency.clone(), amount)));
        }

        Ok(Self {
            swap_fee,
            assets: parsed,
        })
    }

    pub fn denoms(&self) -> Vec<String> {
        self.assets
            .iter()
            .map(|(_, token)| token.currency.denom.clone())
            .collect()
    }

    /// Asset order is kept since it determines the on-chain asset indices.
    pub fn build(&self, opt: &MsgOpt, sender: &str) -> Result<Message, Error> {
        let pool_assets = self
            .assets
            .iter()
            .map(|(weight, token)| {
                Ok(PoolAsset {
                    weight: weight.clone(),
                    token: token.to_coin()?,
                })
            })
            .collect::<Result<_, Error>>()?;

        Ok(Message {
            type_: opt.type_.clone(),
            value: Msg::CreatePool(MsgCreatePool {
                sender: sender.to_owned(),
                pool_params: PoolParams {
                    swap_fee: self.swap_fee.clone(),
                    exit_fee: Dec::zero(),
                },
                pool_assets,
            }),
        })
    }
}

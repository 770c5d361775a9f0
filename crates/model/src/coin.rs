use {
    num::BigUint,
    number::Dec,
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, serde_as},
};

/// A denomination together with the number of decimals its human readable
/// representation uses. Supplied by chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub denom: String,
    pub decimals: u32,
}

impl Currency {
    pub fn new(denom: impl Into<String>, decimals: u32) -> Self {
        Self {
            denom: denom.into(),
            decimals,
        }
    }
}

/// A coin as it appears in a message: the smallest unit of `denom` as an
/// integer. Never carries a fractional component.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Coin {
    pub denom: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: BigUint,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// A human readable amount of a currency, e.g. `1.5` ATOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAmount {
    pub currency: Currency,
    pub amount: Dec,
}

impl TokenAmount {
    pub fn new(currency: Currency, amount: Dec) -> Self {
        Self { currency, amount }
    }

    /// Builds the human readable amount from the smallest unit of `currency`.
    pub fn from_raw(currency: Currency, raw: &BigUint) -> Self {
        let amount = Dec::from_integer(raw, currency.decimals);
        Self { currency, amount }
    }

    /// The amount in the smallest unit of the currency, truncated.
    pub fn raw(&self) -> Result<BigUint, number::Error> {
        self.amount.to_integer(self.currency.decimals)
    }

    /// Wire representation of the amount, truncated to the currency decimals.
    pub fn to_coin(&self) -> Result<Coin, number::Error> {
        Ok(Coin {
            denom: self.currency.denom.clone(),
            amount: self.raw()?,
        })
    }

    /// Scales the amount by `factor` and truncates the result to the currency
    /// decimals.
    pub fn scaled_coin(&self, factor: &Dec) -> Result<Coin, number::Error> {
        Ok(Coin {
            denom: self.currency.denom.clone(),
            amount: (&self.amount * factor).to_integer(self.currency.decimals)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn atom() -> Currency {
        Currency::new("uatom", 6)
    }

    #[test]
    fn coin_amount_is_an_integer_string() {
        let coin = Coin::new("uosmo", 1_500_000u32);
        assert_eq!(
            serde_json::to_value(&coin).unwrap(),
            json!({ "denom": "uosmo", "amount": "1500000" })
        );
        let parsed: Coin =
            serde_json::from_value(json!({ "denom": "uosmo", "amount": "12" })).unwrap();
        assert_eq!(parsed, Coin::new("uosmo", 12u32));
        assert!(
            serde_json::from_value::<Coin>(json!({ "denom": "uosmo", "amount": "1.5" })).is_err()
        );
    }

    #[test]
    fn token_amount_truncates_to_currency_decimals() {
        let amount = TokenAmount::new(atom(), "1.9999995".parse().unwrap());
        assert_eq!(amount.to_coin().unwrap(), Coin::new("uatom", 1_999_999u32));
    }

    #[test]
    fn scaled_coin_applies_factor_before_truncating() {
        let amount = TokenAmount::new(atom(), "0.0000011".parse().unwrap());
        let coin = amount.scaled_coin(&"1.05".parse().unwrap()).unwrap();
        // 1.1 * 1.05 = 1.155 micro atom
        assert_eq!(coin, Coin::new("uatom", 1u32));
    }

    #[test]
    fn from_raw_round_trips_integer_amounts() {
        let amount = TokenAmount::from_raw(atom(), &BigUint::from(2_500_000u32));
        assert_eq!(amount.amount, "2.5".parse().unwrap());
        assert_eq!(amount.raw().unwrap(), BigUint::from(2_500_000u32));
    }
}

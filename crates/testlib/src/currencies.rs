//! Commonly used currencies.

use model::Currency;

/// The native staking token, 6 decimals.
pub fn osmo() -> Currency {
    Currency::new("uosmo", 6)
}

/// Cosmos Hub ATOM over IBC, 6 decimals.
pub fn atom() -> Currency {
    Currency::new(
        "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2",
        6,
    )
}

/// ION, 6 decimals.
pub fn ion() -> Currency {
    Currency::new("uion", 6)
}

/// An 18 decimal token bridged from an EVM chain.
pub fn weth() -> Currency {
    Currency::new("weth-wei", 18)
}

//! Amino JSON messages of the pool module.
//!
//! Each operation has a fixed set of fields. The type string that accompanies a
//! message is configurable per chain and therefore lives next to the value
//! instead of being hard-coded as a serde tag.

use {
    crate::{Coin, PoolId},
    num::BigUint,
    number::Dec,
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, serde_as},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: Msg,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Msg {
    CreatePool(MsgCreatePool),
    JoinPool(MsgJoinPool),
    ExitPool(MsgExitPool),
    SwapExactAmountIn(MsgSwapExactAmountIn),
    SwapExactAmountOut(MsgSwapExactAmountOut),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgCreatePool {
    pub sender: String,
    pub pool_params: PoolParams,
    /// Order determines the asset indices of the created pool.
    pub pool_assets: Vec<PoolAsset>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolParams {
    pub swap_fee: Dec,
    pub exit_fee: Dec,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PoolAsset {
    #[serde_as(as = "DisplayFromStr")]
    pub weight: BigUint,
    pub token: Coin,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgJoinPool {
    pub sender: String,
    pub pool_id: PoolId,
    #[serde_as(as = "DisplayFromStr")]
    pub share_out_amount: BigUint,
    /// `None` when no slippage bound is enforced.
    pub token_in_maxs: Option<Vec<Coin>>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgExitPool {
    pub sender: String,
    pub pool_id: PoolId,
    #[serde_as(as = "DisplayFromStr")]
    pub share_in_amount: BigUint,
    /// `None` when no slippage bound is enforced.
    pub token_out_mins: Option<Vec<Coin>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapAmountInRoute {
    pub pool_id: PoolId,
    pub token_out_denom: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapAmountOutRoute {
    pub pool_id: PoolId,
    pub token_in_denom: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSwapExactAmountIn {
    pub sender: String,
    pub routes: Vec<SwapAmountInRoute>,
    pub token_in: Coin,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub token_out_min_amount: Option<BigUint>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSwapExactAmountOut {
    pub sender: String,
    pub routes: Vec<SwapAmountOutRoute>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub token_in_max_amount: Option<BigUint>,
    pub token_out: Coin,
}

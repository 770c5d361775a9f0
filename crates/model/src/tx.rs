use {
    crate::Coin,
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, serde_as},
};

/// Fee attached to a transaction. Message builders only ever set the gas
/// limit and leave the fee amount to the signer.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    #[serde_as(as = "DisplayFromStr")]
    pub gas: u64,
}

impl Fee {
    pub fn gas_only(gas: u64) -> Self {
        Self {
            amount: Vec::new(),
            gas,
        }
    }
}

/// Result of a broadcast transaction as reported by the chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResponse {
    /// Absent or `0` on success.
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub tx_hash: String,
    #[serde(default)]
    pub raw_log: String,
}

impl TxResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.code, None | Some(0))
    }

    /// Turns a non-zero result code into an error.
    pub fn into_result(self) -> Result<Self, SubmissionFailure> {
        match self.code {
            None | Some(0) => Ok(self),
            Some(code) => Err(SubmissionFailure {
                tx_hash: self.tx_hash,
                code,
                log: self.raw_log,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transaction {tx_hash} failed with code {code}: {log}")]
pub struct SubmissionFailure {
    pub tx_hash: String,
    pub code: u32,
    pub log: String,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn success_codes() {
        assert!(TxResponse::default().is_success());
        let ok = TxResponse {
            code: Some(0),
            ..Default::default()
        };
        assert!(ok.is_success());
        assert!(ok.into_result().is_ok());

        let failed = TxResponse {
            code: Some(5),
            tx_hash: "ABCD".to_owned(),
            raw_log: "insufficient funds".to_owned(),
        };
        assert!(!failed.is_success());
        assert_eq!(
            failed.into_result(),
            Err(SubmissionFailure {
                tx_hash: "ABCD".to_owned(),
                code: 5,
                log: "insufficient funds".to_owned(),
            })
        );
    }

    #[test]
    fn fee_wire_shape() {
        assert_eq!(
            serde_json::to_value(Fee::gas_only(10_000_000)).unwrap(),
            json!({ "amount": [], "gas": "10000000" })
        );
    }
}

//! In-memory [`Submitter`] for tests.

use {
    crate::{MsgSource, SendError, Submitter},
    async_trait::async_trait,
    model::{Fee, Message, Operation, TxResponse},
    std::sync::Mutex,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Sent {
    pub operation: Operation,
    pub msgs: Vec<Message>,
    pub fee: Fee,
    pub memo: String,
}

/// Resolves every message source it is given, records the result and answers
/// with a fixed response.
#[derive(Debug, Default)]
pub struct FakeSubmitter {
    response: TxResponse,
    sent: Mutex<Vec<Sent>>,
}

impl FakeSubmitter {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(code: u32, log: &str) -> Self {
        Self {
            response: TxResponse {
                code: Some(code),
                tx_hash: "FAILED".to_owned(),
                raw_log: log.to_owned(),
            },
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Submitter for FakeSubmitter {
    async fn send(
        &self,
        operation: Operation,
        msgs: MsgSource,
        fee: Fee,
        memo: String,
    ) -> Result<TxResponse, SendError> {
        let msgs = msgs.resolve().await?;
        self.sent.lock().unwrap().push(Sent {
            operation,
            msgs,
            fee,
            memo,
        });
        Ok(self.response.clone())
    }
}

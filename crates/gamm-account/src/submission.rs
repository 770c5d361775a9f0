use {
    crate::{Error, SendError},
    async_trait::async_trait,
    futures::future::BoxFuture,
    model::{Fee, Message, Operation, TxResponse},
    std::fmt,
};

/// Lazily built messages. The future is only polled by the submitter, so any
/// pool state it reads is fetched at submission time.
pub type MsgProducer = BoxFuture<'static, Result<Vec<Message>, Error>>;

pub enum MsgSource {
    Msgs(Vec<Message>),
    Producer(MsgProducer),
}

impl MsgSource {
    pub async fn resolve(self) -> Result<Vec<Message>, Error> {
        match self {
            Self::Msgs(msgs) => Ok(msgs),
            Self::Producer(producer) => producer.await,
        }
    }
}

impl fmt::Debug for MsgSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msgs(msgs) => f.debug_tuple("Msgs").field(msgs).finish(),
            Self::Producer(_) => f.write_str("Producer"),
        }
    }
}

/// Signs, broadcasts and confirms transactions of one account.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Resolves `msgs`, wraps them in a transaction with `fee` and `memo` and
    /// waits for the chain's verdict on it.
    async fn send(
        &self,
        operation: Operation,
        msgs: MsgSource,
        fee: Fee,
        memo: String,
    ) -> Result<TxResponse, SendError>;
}

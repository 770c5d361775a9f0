//! Builds, submits and follows up on the pool messages of one account.
//!
//! Building a join, exit or swap message always starts with a fresh pool
//! snapshot. When sending, the snapshot is fetched lazily by the
//! [`Submitter`], and once the transaction confirmed the [`reactor`]
//! invalidates the cached state the operation touched.

mod account;
pub mod builders;
mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fake;
pub mod reactor;
mod submission;

#[cfg(any(test, feature = "test-util"))]
pub use submission::MockSubmitter;
pub use {
    account::{GammAccount, MsgBuilder},
    builders::PoolAssetInput,
    error::{Error, SendError},
    submission::{MsgProducer, MsgSource, Submitter},
};

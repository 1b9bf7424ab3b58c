//! Unified error types surfaced by the runtime API.
//!
//! Only lifecycle and query plumbing can fail here. Mutating requests
//! never return errors by design; a rejected request is silent.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("authority worker request channel closed")]
    RequestChannelClosed,

    #[error("authority worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires item and host oracles before spawning")]
    MissingOracles,
}

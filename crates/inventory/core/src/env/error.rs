use thiserror::Error;

/// Raised when the engine needs an oracle the environment does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("item oracle not available in environment")]
    ItemsNotAvailable,

    #[error("host oracle not available in environment")]
    HostNotAvailable,

    #[error("balance configuration not available in environment")]
    BalanceNotAvailable,
}

use serde_json::Value;
use thiserror::Error;

pub type RpcResult<T> = Result<T, RpcError>;

#[derive(Error, Debug)]
pub enum RpcError {
    /// Node unreachable or connect timeout. Retryable by the caller;
    /// nothing here retries on its own.
    #[error("connection error: {0}")]
    Connection(String),

    /// Session dropped mid-call. Not retryable mid-pagination: the
    /// cursor state is gone, restart the fetch.
    #[error("transport error: {0}")]
    Transport(String),

    /// Application-level error reported by the node.
    #[error("remote error {code}: {message}")]
    Remote {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// The first page of a collection came back empty: the account has
    /// nothing under this query. Not a failure of the mechanism.
    #[error("no {method} records found for {account}")]
    NoRecordsFound { method: String, account: String },

    /// The caller cancelled the fetch; no further pages were requested.
    #[error("fetch cancelled")]
    Cancelled,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Chain(#[from] graphene_wallet_types::ChainError),
}

impl RpcError {
    /// Whether a fresh attempt at the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RpcError::Connection(_))
    }
}

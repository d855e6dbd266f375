use thiserror::Error;

pub type OpsResult<T> = Result<T, OpsError>;

/// Assembly failures. Both variants mean a table or call site is out of
/// date; they must reach the caller, never a default value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("operation {0} body is not a JSON object")]
    InvalidBody(String),
}

use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

/// Codec failures.
///
/// These indicate a stale table or a programming error at the call site,
/// so callers must propagate them; constructing an operation from a
/// half-converted value is worse than failing the submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("precision {0} outside supported range 0..=18")]
    InvalidPrecision(u32),

    #[error("amount {amount} does not fit a 64-bit integer at precision {precision}")]
    AmountOverflow { amount: String, precision: u32 },

    #[error("unparseable amount: {0}")]
    InvalidAmount(String),

    #[error("flag {name} is not in the {table} table")]
    UnknownFlag { name: String, table: &'static str },
}

//! # Graphene Wallet Codec
//!
//! Deterministic conversion between the values a user types and the
//! values the ledger's binary operation format carries:
//!
//! - decimal amounts <-> fixed-point scaled integers, per-asset precision
//!   ([`precision`]);
//! - named boolean options <-> packed bitmasks over static, ordered
//!   flag tables ([`flags`]).
//!
//! Every screen in the wallet funnels through these conversions, and a
//! wrong value here is a silent on-chain misconfiguration rather than a
//! crash. The codecs are pure functions with no shared state; errors are
//! never swallowed internally.

pub mod error;
pub mod flags;
pub mod precision;

pub use error::{CodecError, CodecResult};
pub use flags::{FlagEntry, FlagTable, ASSET_DISABLE_BITS, ASSET_FLAGS, ASSET_ISSUER_PERMISSIONS};
pub use precision::{parse_amount, to_decimal, to_scaled, MAX_PRECISION};

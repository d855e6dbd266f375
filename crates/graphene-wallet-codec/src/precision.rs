//! Fixed-point amount conversion.
//!
//! The ledger stores every amount as a signed 64-bit integer scaled by a
//! per-asset power of ten. Conversion uses [`Decimal`] throughout so the
//! round trip is exact at any supported precision; floating point never
//! touches an amount.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{CodecError, CodecResult};

/// Highest per-asset precision the ledger accepts.
pub const MAX_PRECISION: u32 = 18;

fn check_precision(precision: u32) -> CodecResult<()> {
    if precision > MAX_PRECISION {
        return Err(CodecError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Convert a decimal amount to its ledger-native scaled integer.
///
/// Rounds to `precision` digits with ties away from zero, matching the
/// ledger's own rounding, then shifts the decimal point right by
/// `precision` places. Values whose scaled form does not fit an `i64`
/// fail with [`CodecError::AmountOverflow`] rather than truncating.
pub fn to_scaled(amount: Decimal, precision: u32) -> CodecResult<i64> {
    check_precision(precision)?;

    let rounded = amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);

    // Work on the raw mantissa so the shift is exact even near i64::MAX,
    // where a Decimal multiply would have to rescale.
    let shift = precision - rounded.scale().min(precision);
    rounded
        .mantissa()
        .checked_mul(10i128.pow(shift))
        .and_then(|scaled| i64::try_from(scaled).ok())
        .ok_or_else(|| CodecError::AmountOverflow {
            amount: amount.to_string(),
            precision,
        })
}

/// Convert a ledger-native scaled integer back to a decimal amount.
///
/// Exact for every valid input; the result carries `precision` decimal
/// places.
pub fn to_decimal(scaled: i64, precision: u32) -> CodecResult<Decimal> {
    check_precision(precision)?;
    Ok(Decimal::new(scaled, precision))
}

/// Parse a human-entered amount string straight to its scaled integer.
pub fn parse_amount(text: &str, precision: u32) -> CodecResult<i64> {
    let amount =
        Decimal::from_str(text.trim()).map_err(|_| CodecError::InvalidAmount(text.to_string()))?;
    to_scaled(amount, precision)
}

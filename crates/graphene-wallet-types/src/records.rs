//! Record types returned by account-scoped ledger queries.
//!
//! Records are immutable once fetched. Each carries the object id the
//! node assigned it; cursor pagination feeds the last id of one page
//! into the next call, so every pageable record implements [`PageCursor`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A record that can serve as a pagination cursor.
pub trait PageCursor {
    /// The object id the next page starts strictly after.
    fn cursor_id(&self) -> &str;
}

/// One active credit deal, as returned by the credit-deal queries.
///
/// Amounts are ledger-native scaled integers; convert through
/// `graphene-wallet-codec` before showing them to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditDeal {
    /// Object id, e.g. `1.22.7`.
    pub id: String,
    /// Account that borrowed the funds.
    pub borrower: String,
    /// The credit offer this deal was taken against.
    pub offer_id: String,
    /// Account that owns the offer (the lender).
    pub offer_owner: String,
    /// Asset id of the debt, e.g. `1.3.0`.
    pub debt_asset: String,
    /// Outstanding debt in the debt asset's scaled units.
    pub debt_amount: i64,
    /// Asset id of the collateral.
    pub collateral_asset: String,
    /// Locked collateral in the collateral asset's scaled units.
    pub collateral_amount: i64,
    /// Fee rate the deal accrues, in hundredths of a percent.
    pub fee_rate: u32,
    /// Deadline for the next repayment.
    pub latest_repay_time: NaiveDateTime,
    /// Automatic-repayment mode chosen by the borrower.
    #[serde(default)]
    pub auto_repay: u8,
}

impl PageCursor for CreditDeal {
    fn cursor_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_deal_parses_node_json() {
        let json = r#"{
            "id": "1.22.7",
            "borrower": "1.2.100",
            "offer_id": "1.21.3",
            "offer_owner": "1.2.55",
            "debt_asset": "1.3.0",
            "debt_amount": 150000,
            "collateral_asset": "1.3.5",
            "collateral_amount": 420000,
            "fee_rate": 10000,
            "latest_repay_time": "2026-09-01T12:00:00"
        }"#;

        let deal: CreditDeal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.id, "1.22.7");
        assert_eq!(deal.debt_amount, 150_000);
        assert_eq!(deal.auto_repay, 0);
        assert_eq!(deal.cursor_id(), "1.22.7");
    }
}

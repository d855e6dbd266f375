//! The operation vocabulary.
//!
//! Opcode = index into [`OPERATION_NAMES`]. The ledger's protocol
//! assigns each operation its position permanently: this table is
//! APPEND-ONLY. Never reorder, rename or remove an entry; retired
//! operations keep their slot.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{OpsError, OpsResult};

/// Every operation the ledger understands, in protocol order.
pub static OPERATION_NAMES: [&str; 78] = [
    "transfer",                                  // 0
    "limit_order_create",                        // 1
    "limit_order_cancel",                        // 2
    "call_order_update",                         // 3
    "fill_order",                                // 4 (virtual)
    "account_create",                            // 5
    "account_update",                            // 6
    "account_whitelist",                         // 7
    "account_upgrade",                           // 8
    "account_transfer",                          // 9
    "asset_create",                              // 10
    "asset_update",                              // 11
    "asset_update_bitasset",                     // 12
    "asset_update_feed_producers",               // 13
    "asset_issue",                               // 14
    "asset_reserve",                             // 15
    "asset_fund_fee_pool",                       // 16
    "asset_settle",                              // 17
    "asset_global_settle",                       // 18
    "asset_publish_feed",                        // 19
    "witness_create",                            // 20
    "witness_update",                            // 21
    "proposal_create",                           // 22
    "proposal_update",                           // 23
    "proposal_delete",                           // 24
    "withdraw_permission_create",                // 25
    "withdraw_permission_update",                // 26
    "withdraw_permission_claim",                 // 27
    "withdraw_permission_delete",                // 28
    "committee_member_create",                   // 29
    "committee_member_update",                   // 30
    "committee_member_update_global_parameters", // 31
    "vesting_balance_create",                    // 32
    "vesting_balance_withdraw",                  // 33
    "worker_create",                             // 34
    "custom",                                    // 35
    "assert",                                    // 36
    "balance_claim",                             // 37
    "override_transfer",                         // 38
    "transfer_to_blind",                         // 39
    "blind_transfer",                            // 40
    "transfer_from_blind",                       // 41
    "asset_settle_cancel",                       // 42 (virtual)
    "asset_claim_fees",                          // 43
    "fba_distribute",                            // 44 (virtual)
    "bid_collateral",                            // 45
    "execute_bid",                               // 46 (virtual)
    "asset_claim_pool",                          // 47
    "asset_update_issuer",                       // 48
    "htlc_create",                               // 49
    "htlc_redeem",                               // 50
    "htlc_redeemed",                             // 51 (virtual)
    "htlc_extend",                               // 52
    "htlc_refund",                               // 53 (virtual)
    "custom_authority_create",                   // 54
    "custom_authority_update",                   // 55
    "custom_authority_delete",                   // 56
    "ticket_create",                             // 57
    "ticket_update",                             // 58
    "liquidity_pool_create",                     // 59
    "liquidity_pool_delete",                     // 60
    "liquidity_pool_deposit",                    // 61
    "liquidity_pool_withdraw",                   // 62
    "liquidity_pool_exchange",                   // 63
    "samet_fund_create",                         // 64
    "samet_fund_delete",                         // 65
    "samet_fund_update",                         // 66
    "samet_fund_borrow",                         // 67
    "samet_fund_repay",                          // 68
    "credit_offer_create",                       // 69
    "credit_offer_delete",                       // 70
    "credit_offer_update",                       // 71
    "credit_offer_accept",                       // 72
    "credit_deal_repay",                         // 73
    "credit_deal_expired",                       // 74 (virtual)
    "liquidity_pool_update",                     // 75
    "credit_deal_update",                        // 76
    "limit_order_update",                        // 77
];

static OPCODE_INDEX: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    OPERATION_NAMES
        .iter()
        .enumerate()
        .map(|(opcode, name)| (*name, opcode as u8))
        .collect()
});

/// Look up the numeric opcode for an operation name.
pub fn opcode_of(name: &str) -> OpsResult<u8> {
    OPCODE_INDEX
        .get(name)
        .copied()
        .ok_or_else(|| OpsError::UnknownOperation(name.to_string()))
}

/// Reverse lookup, for labelling decoded payloads.
pub fn name_of(opcode: u8) -> Option<&'static str> {
    OPERATION_NAMES.get(opcode as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_opcodes() {
        assert_eq!(opcode_of("transfer").unwrap(), 0);
        assert_eq!(opcode_of("limit_order_create").unwrap(), 1);
        assert_eq!(opcode_of("asset_create").unwrap(), 10);
        assert_eq!(opcode_of("proposal_create").unwrap(), 22);
        assert_eq!(opcode_of("worker_create").unwrap(), 34);
        assert_eq!(opcode_of("credit_offer_accept").unwrap(), 72);
        assert_eq!(opcode_of("limit_order_update").unwrap(), 77);
    }

    #[test]
    fn unknown_operation_never_defaults() {
        assert_eq!(
            opcode_of("totally_unknown_op").unwrap_err(),
            OpsError::UnknownOperation("totally_unknown_op".to_string())
        );
    }

    #[test]
    fn names_are_unique() {
        assert_eq!(OPCODE_INDEX.len(), OPERATION_NAMES.len());
    }

    #[test]
    fn reverse_lookup_matches_table() {
        assert_eq!(name_of(34), Some("worker_create"));
        assert_eq!(name_of(77), Some("limit_order_update"));
        assert_eq!(name_of(78), None);
        for (opcode, name) in OPERATION_NAMES.iter().enumerate() {
            assert_eq!(opcode_of(name).unwrap() as usize, opcode);
        }
    }
}

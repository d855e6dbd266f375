//! The credit-deal query shapes.
//!
//! Two remote methods page through the same record type from opposite
//! sides of a deal; the aggregate runs both sequentially over one shared
//! connection and merges the collections keyed by role.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use graphene_wallet_types::{CreditDeal, NodeEndpoint, PageLimits};

use crate::connection::{Connector, NodeConnection};
use crate::error::{RpcError, RpcResult};
use crate::pagination::fetch_all_pages;

pub const GET_CREDIT_DEALS_BY_BORROWER: &str = "get_credit_deals_by_borrower";
pub const GET_CREDIT_DEALS_BY_OFFER_OWNER: &str = "get_credit_deals_by_offer_owner";

/// An account's credit deals, split by the account's role in them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountCreditDeals {
    /// Deals where the account is the borrower.
    pub borrowed: Vec<CreditDeal>,
    /// Deals funded by a credit offer the account owns.
    pub lent: Vec<CreditDeal>,
}

impl AccountCreditDeals {
    pub fn is_empty(&self) -> bool {
        self.borrowed.is_empty() && self.lent.is_empty()
    }
}

/// Fetch both sides of an account's credit deals.
///
/// A role with no records contributes an empty list; only transport,
/// remote or cancellation failures abort the aggregate.
pub async fn fetch_account_credit_deals(
    connector: &dyn Connector,
    endpoint: &NodeEndpoint,
    conn: Option<&mut NodeConnection>,
    account: &str,
    limits: PageLimits,
    cancel: &CancellationToken,
) -> RpcResult<AccountCreditDeals> {
    match conn {
        Some(shared) => fetch_roles(shared, account, limits, cancel).await,
        None => {
            let mut owned = connector.connect(endpoint).await?;
            let result = fetch_roles(&mut owned, account, limits, cancel).await;
            owned.close().await;
            result
        }
    }
}

async fn fetch_roles(
    conn: &mut NodeConnection,
    account: &str,
    limits: PageLimits,
    cancel: &CancellationToken,
) -> RpcResult<AccountCreditDeals> {
    let borrowed =
        role_or_empty(fetch_all_pages(conn, GET_CREDIT_DEALS_BY_BORROWER, account, limits, cancel).await)?;
    let lent =
        role_or_empty(fetch_all_pages(conn, GET_CREDIT_DEALS_BY_OFFER_OWNER, account, limits, cancel).await)?;
    debug!(
        account,
        borrowed = borrowed.len(),
        lent = lent.len(),
        "credit deals merged"
    );
    Ok(AccountCreditDeals { borrowed, lent })
}

fn role_or_empty(result: RpcResult<Vec<CreditDeal>>) -> RpcResult<Vec<CreditDeal>> {
    match result {
        Ok(deals) => Ok(deals),
        Err(RpcError::NoRecordsFound { .. }) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

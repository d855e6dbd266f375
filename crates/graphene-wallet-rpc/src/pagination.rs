//! Cursor pagination of account-scoped collections.
//!
//! A collection larger than one response arrives as successive pages,
//! each starting strictly after the previous page's last record id.
//! Termination: a page shorter than the requested size, an empty page,
//! or the per-chain page cap. Hitting the cap still returns the
//! accumulated records; the cap is a safety bound, not a failure.
//!
//! Failure contract: any page failure after the first aborts the whole
//! fetch. A partial collection returned as if complete would
//! misrepresent the account's holdings.

use serde::de::DeserializeOwned;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use graphene_wallet_types::{NodeEndpoint, PageCursor, PageLimits};

use crate::connection::{Connector, NodeConnection};
use crate::error::{RpcError, RpcResult};

/// Fetch every page of `method` for `account` over a connection the
/// caller provides and keeps.
///
/// Page 1 is called with `[account, page_size]`, every subsequent page
/// with `[account, page_size, last_id]`. Strictly sequential: the next
/// cursor does not exist until the previous page has arrived.
pub async fn fetch_all_pages<T>(
    conn: &mut NodeConnection,
    method: &str,
    account: &str,
    limits: PageLimits,
    cancel: &CancellationToken,
) -> RpcResult<Vec<T>>
where
    T: DeserializeOwned + PageCursor,
{
    let mut records: Vec<T> = Vec::new();
    let mut pages_fetched = 0u32;

    loop {
        if cancel.is_cancelled() {
            debug!(method, account, pages_fetched, "fetch cancelled");
            return Err(RpcError::Cancelled);
        }
        if pages_fetched == limits.max_pages {
            warn!(
                method,
                account,
                max_pages = limits.max_pages,
                records = records.len(),
                "page cap reached, returning accumulated records"
            );
            return Ok(records);
        }

        let params = match records.last() {
            None => json!([account, limits.page_size]),
            Some(last) => json!([account, limits.page_size, last.cursor_id()]),
        };
        let result = conn.call(method, &params).await?;
        let page: Vec<T> = serde_json::from_value(result)?;
        let fetched = page.len();
        pages_fetched += 1;
        debug!(method, account, page = pages_fetched, fetched, "page received");

        if records.is_empty() && fetched == 0 {
            return Err(RpcError::NoRecordsFound {
                method: method.to_string(),
                account: account.to_string(),
            });
        }
        records.extend(page);

        if fetched < limits.page_size as usize {
            return Ok(records);
        }
    }
}

/// Fetch a full collection, resolving connection ownership.
///
/// With `conn` supplied, every page reuses it and it stays open for its
/// owner. Without one, a connection is opened through `connector` and
/// closed exactly once, on success and on every failure path alike.
pub async fn fetch_collection<T>(
    connector: &dyn Connector,
    endpoint: &NodeEndpoint,
    conn: Option<&mut NodeConnection>,
    method: &str,
    account: &str,
    limits: PageLimits,
    cancel: &CancellationToken,
) -> RpcResult<Vec<T>>
where
    T: DeserializeOwned + PageCursor,
{
    match conn {
        Some(shared) => fetch_all_pages(shared, method, account, limits, cancel).await,
        None => {
            let mut owned = connector.connect(endpoint).await?;
            let result = fetch_all_pages(&mut owned, method, account, limits, cancel).await;
            owned.close().await;
            result
        }
    }
}

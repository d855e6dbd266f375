//! # Graphene Wallet RPC
//!
//! The network half of the wallet core: one persistent WebSocket RPC
//! handle per node ([`NodeConnection`]), and cursor pagination of
//! account-scoped collections on top of it ([`pagination`]).
//!
//! Ownership rule, enforced by every entry point here: whoever opens a
//! connection closes it, on success and on every failure path; a
//! borrowed connection is used for all pages and left open for its
//! owner. Pagination is strictly sequential because each page's cursor
//! is the previous page's last record id.

pub mod connection;
pub mod credit;
pub mod error;
pub mod pagination;
pub mod protocol;
pub mod transport;

#[cfg(test)]
mod tests;

pub use connection::{Connector, NodeConnection, WsConnector, DEFAULT_CONNECT_TIMEOUT};
pub use credit::{
    fetch_account_credit_deals, AccountCreditDeals, GET_CREDIT_DEALS_BY_BORROWER,
    GET_CREDIT_DEALS_BY_OFFER_OWNER,
};
pub use error::{RpcError, RpcResult};
pub use pagination::{fetch_all_pages, fetch_collection};
pub use transport::{RpcTransport, WsTransport};

pub use tokio_util::sync::CancellationToken;

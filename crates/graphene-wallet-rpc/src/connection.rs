//! One persistent RPC handle to a remote ledger node.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use graphene_wallet_types::NodeEndpoint;

use crate::error::{RpcError, RpcResult};
use crate::transport::{RpcTransport, WsTransport};

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A live connection bound to one node.
///
/// Whoever opens a connection owns it and must [`close`](Self::close) it
/// on every exit path. `close` is idempotent, so unconditional release
/// in error paths is safe. Dropping without closing abandons the socket
/// to the runtime; the fetch entry points in this crate never do.
pub struct NodeConnection {
    endpoint: NodeEndpoint,
    transport: Option<Box<dyn RpcTransport>>,
}

impl NodeConnection {
    /// Open a session with exactly one connect attempt. Retries, if
    /// wanted, belong to the caller.
    pub async fn open(endpoint: &NodeEndpoint, timeout: Duration) -> RpcResult<Self> {
        let transport = WsTransport::connect(endpoint, timeout).await?;
        info!(node = %endpoint, "node connection opened");
        Ok(Self {
            endpoint: endpoint.clone(),
            transport: Some(Box::new(transport)),
        })
    }

    /// Wrap an already-established transport. This is how tests inject a
    /// scripted session, and how embedders reuse a custom transport.
    pub fn from_transport(endpoint: NodeEndpoint, transport: Box<dyn RpcTransport>) -> Self {
        Self {
            endpoint,
            transport: Some(transport),
        }
    }

    pub fn endpoint(&self) -> &NodeEndpoint {
        &self.endpoint
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    /// Issue one RPC request on this session.
    pub async fn call(&mut self, method: &str, params: &Value) -> RpcResult<Value> {
        let transport = self
            .transport
            .as_mut()
            .ok_or_else(|| RpcError::Transport("connection already closed".to_string()))?;
        debug!(node = %self.endpoint, method, "rpc call");
        transport.request(method, params).await
    }

    /// Release the session. Idempotent: closing twice, or a connection
    /// that never opened, is a no-op. Shutdown failures are logged, not
    /// returned, so release can be unconditional on error paths.
    pub async fn close(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            match transport.shutdown().await {
                Ok(()) => debug!(node = %self.endpoint, "node connection closed"),
                Err(e) => warn!(node = %self.endpoint, error = %e, "error closing node connection"),
            }
        }
    }
}

/// Factory seam for the "open my own connection" path, so ownership
/// behaviour is testable without a live node.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, endpoint: &NodeEndpoint) -> RpcResult<NodeConnection>;
}

/// Production connector: WebSocket with a configurable connect timeout.
#[derive(Debug, Clone)]
pub struct WsConnector {
    timeout: Duration,
}

impl WsConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for WsConnector {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT)
    }
}

#[async_trait]
impl Connector for WsConnector {
    async fn connect(&self, endpoint: &NodeEndpoint) -> RpcResult<NodeConnection> {
        NodeConnection::open(endpoint, self.timeout).await
    }
}

//! The transport seam: one trait for issuing RPC requests over a live
//! session, and the production WebSocket implementation.
//!
//! Tests substitute their own [`RpcTransport`] to script pages and
//! record lifecycle events; nothing above this module knows which one
//! it is talking to.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, trace};

use graphene_wallet_types::NodeEndpoint;

use crate::error::{RpcError, RpcResult};
use crate::protocol::{RpcRequest, RpcResponse};

/// A live RPC session capable of one request/response at a time.
#[async_trait]
pub trait RpcTransport: Send {
    /// Issue one request and wait for its reply.
    async fn request(&mut self, method: &str, params: &Value) -> RpcResult<Value>;

    /// Tear the session down. Called at most once.
    async fn shutdown(&mut self) -> RpcResult<()>;
}

/// WebSocket JSON-RPC session against a ledger node.
pub struct WsTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    next_id: u64,
}

impl WsTransport {
    /// One retry-free connect attempt, bounded by `timeout`. Retrying is
    /// the caller's decision.
    pub async fn connect(endpoint: &NodeEndpoint, timeout: Duration) -> RpcResult<Self> {
        let attempt = connect_async(endpoint.url.as_str());
        let (stream, _) = tokio::time::timeout(timeout, attempt)
            .await
            .map_err(|_| {
                RpcError::Connection(format!("timed out connecting to {endpoint}"))
            })?
            .map_err(|e| RpcError::Connection(format!("connect to {endpoint} failed: {e}")))?;
        debug!(node = %endpoint, "websocket session established");
        Ok(Self { stream, next_id: 1 })
    }
}

#[async_trait]
impl RpcTransport for WsTransport {
    async fn request(&mut self, method: &str, params: &Value) -> RpcResult<Value> {
        let id = self.next_id;
        self.next_id += 1;

        let request = RpcRequest::new(id, method, params);
        let frame = serde_json::to_string(&request)?;
        trace!(method, id, "sending rpc request");
        self.stream
            .send(Message::Text(frame))
            .await
            .map_err(|e| RpcError::Transport(format!("send failed: {e}")))?;

        loop {
            let message = self
                .stream
                .next()
                .await
                .ok_or_else(|| RpcError::Transport("session closed mid-call".to_string()))?
                .map_err(|e| RpcError::Transport(format!("receive failed: {e}")))?;

            let text = match message {
                Message::Text(text) => text,
                Message::Binary(bytes) => String::from_utf8(bytes).map_err(|_| {
                    RpcError::Transport("non-utf8 binary frame".to_string())
                })?,
                Message::Close(_) => {
                    return Err(RpcError::Transport("session closed by node".to_string()))
                }
                // Pings are answered by the websocket layer on the next
                // send; nothing to do here.
                _ => continue,
            };

            let response: RpcResponse = serde_json::from_str(&text)?;
            if response.id != Some(id) {
                // Subscription notice or stale reply; not ours.
                trace!(method, id, "skipping unrelated frame");
                continue;
            }
            if let Some(error) = response.error {
                return Err(RpcError::Remote {
                    code: error.code,
                    message: error.message,
                    data: error.data,
                });
            }
            return Ok(response.result.unwrap_or(Value::Null));
        }
    }

    async fn shutdown(&mut self) -> RpcResult<()> {
        self.stream
            .close(None)
            .await
            .map_err(|e| RpcError::Transport(format!("close failed: {e}")))
    }
}

//! Chain registry: which chains the wallet knows about, which nodes serve
//! them, and the per-chain pagination limits.
//!
//! Limits differ per chain because they reflect node response-size policy:
//! the primary chain's public nodes accept large pages, the test chain's
//! constrained nodes do not. Both default entries cap a single collection
//! at 1000 records.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::{ChainError, ChainResult};

/// Identifier for a configured chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(String);

impl ChainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single remote ledger endpoint: node URL plus the chain it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEndpoint {
    pub url: Url,
    pub chain_id: ChainId,
}

impl NodeEndpoint {
    pub fn new(url: Url, chain_id: ChainId) -> Self {
        Self { url, chain_id }
    }

    pub fn parse(url: &str, chain_id: ChainId) -> ChainResult<Self> {
        let url = Url::parse(url).map_err(|source| ChainError::InvalidNodeUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self { url, chain_id })
    }
}

impl fmt::Display for NodeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.url, self.chain_id)
    }
}

/// Pagination limits for one chain.
///
/// `page_size` is the per-call record limit the node will honour;
/// `max_pages` bounds the fetch loop so a hostile or looping node cannot
/// hold a fetch open forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
    pub page_size: u32,
    pub max_pages: u32,
}

impl PageLimits {
    pub fn new(page_size: u32, max_pages: u32) -> Self {
        Self {
            page_size,
            max_pages,
        }
    }

    /// Upper bound on records a single fetch can return.
    pub fn record_cap(&self) -> u64 {
        self.page_size as u64 * self.max_pages as u64
    }
}

/// Configuration for one chain: its nodes in preference order and its
/// pagination limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    pub nodes: Vec<String>,
    pub limits: PageLimits,
}

impl ChainConfig {
    /// Resolve the endpoint to use when the caller names no explicit node:
    /// the first configured node for the chain.
    pub fn primary_endpoint(&self) -> ChainResult<NodeEndpoint> {
        let url = self
            .nodes
            .first()
            .ok_or_else(|| ChainError::NoNodes(self.chain_id.to_string()))?;
        NodeEndpoint::parse(url, self.chain_id.clone())
    }

    /// Resolve an explicit node URL against this chain.
    pub fn endpoint_for(&self, url: &str) -> ChainResult<NodeEndpoint> {
        NodeEndpoint::parse(url, self.chain_id.clone())
    }
}

/// The set of chains this wallet build knows about.
///
/// Deserializable so deployments can override nodes and limits without a
/// rebuild; `Default` carries the built-in primary and test chains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainRegistry {
    pub chains: Vec<ChainConfig>,
}

impl ChainRegistry {
    pub fn chain(&self, chain_id: &ChainId) -> ChainResult<&ChainConfig> {
        self.chains
            .iter()
            .find(|c| &c.chain_id == chain_id)
            .ok_or_else(|| ChainError::UnknownChain(chain_id.to_string()))
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self {
            chains: vec![
                ChainConfig {
                    chain_id: ChainId::new("mainnet"),
                    nodes: vec![
                        "wss://node.gph-mainnet.example.com/ws".to_string(),
                        "wss://backup.gph-mainnet.example.org/ws".to_string(),
                    ],
                    limits: PageLimits::new(100, 10),
                },
                ChainConfig {
                    chain_id: ChainId::new("testnet"),
                    nodes: vec!["wss://node.gph-testnet.example.com/ws".to_string()],
                    limits: PageLimits::new(10, 100),
                },
            ],
        }
    }
}

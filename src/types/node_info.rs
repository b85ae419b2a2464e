use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Response of `GET /v1/getinfo`.
///
/// Only `alias` and `version` are relied upon. The rest is optional so that
/// older nodes, or gateways that omit unpopulated fields, still decode.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub alias: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pubkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pending_channels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_active_channels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inactive_channels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_peers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_header_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_to_chain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_to_graph: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testnet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chains: Option<Vec<Chain>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
}

impl NodeInfo {
    /// A bare record carrying only the two fields every node reports.
    pub fn new(alias: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            version: version.into(),
            commit_hash: None,
            identity_pubkey: None,
            color: None,
            num_pending_channels: None,
            num_active_channels: None,
            num_inactive_channels: None,
            num_peers: None,
            block_height: None,
            block_hash: None,
            best_header_timestamp: None,
            synced_to_chain: None,
            synced_to_graph: None,
            testnet: None,
            chains: None,
            uris: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub chain: String,
    pub network: String,
}

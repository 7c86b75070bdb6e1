/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// A customer identity in the reseller pool, assigned to at most one node.
///
/// Accounts are read from the API and mutated only through API calls
/// (activate/deactivate/update-password/delete) - never locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
    pub uid: String,
    pub username: String,
}

impl Account {
    /// Name of the node this account is assigned to, shaped as a list
    /// suitable for [`WriteParameters::with_node_names`]. Empty when the
    /// account is unassigned.
    ///
    /// Mutations never target the account's node implicitly; pass this
    /// explicitly when that is what you mean.
    ///
    /// [`WriteParameters::with_node_names`]: super::requests::WriteParameters::with_node_names
    pub fn node_names(&self) -> Vec<String> {
        self.node
            .as_ref()
            .map(|node| vec![node.name.clone()])
            .unwrap_or_default()
    }
}

/// A proxy/VPN server in the reseller pool, identified by a unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub active: bool,
    pub name: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub services: Vec<NodeService>,
}

/// A service offered by a node (e.g. proxy, wireguard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,
}

/// A live or historical session on a node, grouped per account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConnection {
    pub uid: String,
    #[serde(default)]
    pub active: bool,
    pub username: String,
    #[serde(default)]
    pub connections: u64,
}

/// Traffic counters for one account on a node over a query window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTrafficAccount {
    pub uid: String,
    #[serde(default)]
    pub active: bool,
    pub username: String,
    #[serde(default)]
    pub traffic_down: f64,
    #[serde(default)]
    pub traffic_up: f64,
    #[serde(default)]
    pub traffic_all: f64,
}

/// Aggregate traffic counters for a node over a query window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeTrafficTotals {
    pub traffic_down: f64,
    pub traffic_up: f64,
    pub traffic_all: f64,
    pub quota: f64,
}

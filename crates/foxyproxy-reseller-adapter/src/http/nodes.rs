/*
[INPUT]:  Node names, pagination cursors and query time windows
[OUTPUT]: Node records, connection totals and traffic counters
[POS]:    HTTP layer - node, connection and traffic endpoints
[UPDATE]: When adding new node endpoints or changing window encoding
*/

use chrono::{DateTime, Utc};
use reqwest::Method;

use crate::http::client::validate_page;
use crate::http::{ResellerClient, Result};
use crate::types::{Node, NodeConnection, NodeTrafficAccount, NodeTrafficTotals};

impl ResellerClient {
    /// Get at most `size` nodes in the reseller pool, beginning at the
    /// zero-based `index`. Nodes are sorted lexicographically by name.
    ///
    /// GET /nodes/?index={index}&size={size}
    pub async fn get_all_nodes(&self, index: i32, size: i32) -> Result<Vec<Node>> {
        validate_page(index, size)?;
        let endpoint = format!("/nodes/?index={index}&size={size}");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_list()
    }

    /// Get the node with the given name, or `None` if no such node exists.
    ///
    /// GET /nodes/{nodeName}
    pub async fn get_node(&self, node_name: &str) -> Result<Option<Node>> {
        let endpoint = format!("/nodes/{node_name}");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_optional()
    }

    /// Total number of nodes in the reseller pool.
    ///
    /// GET /nodes/count/
    pub async fn get_node_count(&self) -> Result<u64> {
        let response = self.execute(Method::GET, "/nodes/count/", None).await?;
        response.decode_count()
    }

    /// DNS suffixes usable to reach the pool's nodes.
    ///
    /// GET /nodes/dns-suffixes/
    pub async fn get_dns_suffixes(&self) -> Result<Vec<String>> {
        let response = self
            .execute(Method::GET, "/nodes/dns-suffixes/", None)
            .await?;
        response.decode_list()
    }

    /// Per-account listing of currently open connections on a node. Closed
    /// connections are not included.
    ///
    /// GET /nodes/{nodeName}/connections-by-account/
    pub async fn get_active_node_connections_by_account(
        &self,
        node_name: &str,
    ) -> Result<Vec<NodeConnection>> {
        let endpoint = format!("/nodes/{node_name}/connections-by-account/");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_list()
    }

    /// Per-account listing of connections closed between `start` and `end`,
    /// inclusive on both ends. Active connections are not included. The
    /// window is passed through as-is; the API defines start <= end.
    ///
    /// GET /nodes/{nodeName}/connections-by-account/{start}/{end}/
    pub async fn get_historical_node_connections_by_account(
        &self,
        node_name: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<NodeConnection>> {
        let endpoint = format!(
            "/nodes/{node_name}/connections-by-account/{}/{}/",
            start.timestamp(),
            end.timestamp()
        );
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_list()
    }

    /// Count of currently open connections on a node.
    ///
    /// GET /nodes/{nodeName}/connections/
    pub async fn get_active_node_connection_totals(&self, node_name: &str) -> Result<u64> {
        let endpoint = format!("/nodes/{node_name}/connections/");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_count()
    }

    /// Count of connections closed between `start` and `end`, inclusive.
    ///
    /// GET /nodes/{nodeName}/connections/{start}/{end}/
    pub async fn get_historical_node_connection_totals(
        &self,
        node_name: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64> {
        let endpoint = format!(
            "/nodes/{node_name}/connections/{}/{}/",
            start.timestamp(),
            end.timestamp()
        );
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_count()
    }

    /// Traffic counters for every account on a node between `start` and
    /// `end`, inclusive.
    ///
    /// GET /nodes/{nodeName}/traffic-by-account/{start}/{end}
    pub async fn get_node_traffic_by_account(
        &self,
        node_name: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<NodeTrafficAccount>> {
        let endpoint = format!(
            "/nodes/{node_name}/traffic-by-account/{}/{}",
            start.timestamp(),
            end.timestamp()
        );
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_list()
    }

    /// Aggregate traffic counters for a node between `start` and `end`,
    /// inclusive. `None` if the node is unknown.
    ///
    /// GET /nodes/{nodeName}/traffic/{start}/{end}
    pub async fn get_node_traffic_totals(
        &self,
        node_name: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<NodeTrafficTotals>> {
        let endpoint = format!(
            "/nodes/{node_name}/traffic/{}/{}",
            start.timestamp(),
            end.timestamp()
        );
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_optional()
    }
}

//! Wire models for GraphQL responses.
//!
//! Domain payload types (`RawTransaction`, `AccountNode`, the transfer
//! records) live in `wsexport-core` and deserialize directly from the node
//! selections; this module only adds the envelopes around them.

use serde::Deserialize;

use wsexport_core::accounts::AccountNode;
use wsexport_core::activities::{FundsTransfer, InstitutionalTransfer, RawTransaction};

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Relay-style pagination info.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// Relay-style connection: edges plus page info.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Unwraps the edges into their nodes.
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// `FetchActivityList` payload.
#[derive(Debug, Deserialize)]
pub struct ActivityListData {
    pub activities: Connection<RawTransaction>,
}

/// `FetchActivityFeedItems` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeedData {
    pub activity_feed_items: Connection<RawTransaction>,
}

/// `FetchAllAccountFinancials` payload.
#[derive(Debug, Deserialize)]
pub struct AccountFinancialsData {
    pub identity: Option<IdentityNode>,
}

#[derive(Debug, Deserialize)]
pub struct IdentityNode {
    pub id: String,
    pub accounts: Connection<AccountNode>,
}

/// `FetchFundsTransfer` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsTransferData {
    pub funds_transfer: Option<FundsTransfer>,
}

/// `FetchInstitutionalTransfer` payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalTransferData {
    pub account_transfer: Option<InstitutionalTransfer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_deserializes_and_unwraps() {
        let json = serde_json::json!({
            "edges": [
                { "node": { "id": "tfsa-001", "nickname": null, "unifiedAccountType": "SELF_DIRECTED_TFSA" } },
                { "node": { "id": "cash-001", "unifiedAccountType": "CASH" } }
            ],
            "pageInfo": { "hasNextPage": true, "endCursor": "c1" }
        });
        let connection: Connection<AccountNode> = serde_json::from_value(json).unwrap();
        assert!(connection.page_info.has_next_page);
        assert_eq!(connection.page_info.end_cursor.as_deref(), Some("c1"));

        let nodes = connection.into_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id, "tfsa-001");
    }

    #[test]
    fn test_envelope_without_data() {
        let envelope: GraphqlResponse<ActivityListData> =
            serde_json::from_str(r#"{"errors":[{"message":"denied"}]}"#).unwrap();
        assert!(envelope.data.is_none());
    }
}

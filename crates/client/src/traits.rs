//! Traits defining the contract with the remote API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use wsexport_core::accounts::AccountNode;
use wsexport_core::activities::RawTransaction;
use wsexport_core::errors::Result;

/// Paged read access to the account directory and the two activity query
/// shapes, each driven to exhaustion before returning.
///
/// Enrichment lookups live on the separate
/// [`TransferResolver`](wsexport_core::activities::TransferResolver) trait,
/// which the concrete client also implements.
#[async_trait]
pub trait ExportApiClient: Send + Sync {
    /// Fetch every account in the directory.
    async fn fetch_accounts(&self) -> Result<Vec<AccountNode>>;

    /// Fetch all activities for specific accounts via the account-scoped
    /// activity list, from `start_date` (inclusive) to now.
    async fn fetch_account_activities(
        &self,
        account_ids: &[String],
        start_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<RawTransaction>>;

    /// Fetch all completed activities via the identity-scoped activity
    /// feed, from `start_date` (inclusive) onwards.
    async fn fetch_feed_activities(
        &self,
        account_ids: &[String],
        start_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<RawTransaction>>;
}

//! Export orchestration: directory fetch, activity fetch, classification,
//! grouping, and artifact assembly.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use log::info;

use wsexport_core::accounts::AccountInfo;
use wsexport_core::activities::{classify, TransferResolver};
use wsexport_core::errors::Result;
use wsexport_core::export::{build_file_name, group_by_account, serialize_rows, ExportArtifact};
use wsexport_core::locale::Locale;

use crate::traits::ExportApiClient;

/// Which activity source to export from.
#[derive(Debug, Clone)]
pub enum ExportScope {
    /// One account's activity list.
    AccountDetails { account_id: String },
    /// The cross-account activity feed, optionally restricted to some
    /// accounts. `None` covers every account in the directory.
    ActivityFeed { account_ids: Option<Vec<String>> },
}

/// How far back the export reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    ThisMonth,
    LastThreeMonths,
    All,
}

impl TimeFrame {
    /// Lower bound of the export window, or `None` for an unbounded export.
    /// Month arithmetic lands on the first of the month at UTC midnight.
    pub fn start_date(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let months_back = match self {
            TimeFrame::ThisMonth => 0,
            TimeFrame::LastThreeMonths => 3,
            TimeFrame::All => return None,
        };
        let months = now.year() * 12 + now.month0() as i32 - months_back;
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) as u32 + 1;
        Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
    }
}

/// Runs a full export: one CSV artifact per account that produced rows.
pub struct ExportOrchestrator {
    api_client: Arc<dyn ExportApiClient>,
    resolver: Arc<dyn TransferResolver>,
}

impl ExportOrchestrator {
    pub fn new(api_client: Arc<dyn ExportApiClient>, resolver: Arc<dyn TransferResolver>) -> Self {
        ExportOrchestrator {
            api_client,
            resolver,
        }
    }

    pub async fn run(
        &self,
        scope: &ExportScope,
        time_frame: TimeFrame,
        locale: Locale,
    ) -> Result<Vec<ExportArtifact>> {
        self.run_at(scope, time_frame, locale, Utc::now()).await
    }

    async fn run_at(
        &self,
        scope: &ExportScope,
        time_frame: TimeFrame,
        locale: Locale,
        now: DateTime<Utc>,
    ) -> Result<Vec<ExportArtifact>> {
        let texts = locale.texts();
        let start_date = time_frame.start_date(now);

        info!("Fetching account details");
        let directory = self.api_client.fetch_accounts().await?;
        let nickname_by_id: HashMap<String, String> = directory
            .iter()
            .map(|node| {
                let info = AccountInfo::from_node(node.clone(), texts);
                (info.id, info.nickname)
            })
            .collect();

        info!("Fetching transactions");
        let transactions = match scope {
            ExportScope::AccountDetails { account_id } => {
                self.api_client
                    .fetch_account_activities(std::slice::from_ref(account_id), start_date)
                    .await?
            }
            ExportScope::ActivityFeed { account_ids } => {
                let ids = match account_ids {
                    Some(ids) => ids.clone(),
                    None => directory.iter().map(|node| node.id.clone()).collect(),
                };
                self.api_client
                    .fetch_feed_activities(&ids, start_date)
                    .await?
            }
        };
        info!("Fetched {} transactions", transactions.len());

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for transaction in &transactions {
            match classify(transaction, texts, self.resolver.as_ref()).await? {
                Some(row) => rows.push(row),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            info!("Skipped {skipped} transactions with no known rendering");
        }

        let from_date = start_date.map(|d| d.date_naive());
        let now_date = now.date_naive();

        let artifacts = group_by_account(rows)
            .into_iter()
            .map(|group| {
                let nickname = nickname_by_id
                    .get(&group.account_id)
                    .map(String::as_str)
                    .unwrap_or(texts.unknown);
                ExportArtifact {
                    file_name: build_file_name(nickname, from_date, now_date, texts),
                    content: serialize_rows(&group.rows, texts),
                    account_id: group.account_id,
                }
            })
            .collect();

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use wsexport_core::accounts::AccountNode;
    use wsexport_core::activities::{FundsTransfer, InstitutionalTransfer, RawTransaction};
    use wsexport_core::errors::{Error, FetchError};

    struct MockApiClient {
        accounts: Vec<AccountNode>,
        activities: Vec<RawTransaction>,
        account_calls: Mutex<Vec<Vec<String>>>,
        feed_calls: Mutex<Vec<Vec<String>>>,
        start_dates: Mutex<Vec<Option<DateTime<Utc>>>>,
    }

    impl MockApiClient {
        fn new(accounts: Vec<AccountNode>, activities: Vec<RawTransaction>) -> Self {
            MockApiClient {
                accounts,
                activities,
                account_calls: Mutex::new(Vec::new()),
                feed_calls: Mutex::new(Vec::new()),
                start_dates: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ExportApiClient for MockApiClient {
        async fn fetch_accounts(&self) -> Result<Vec<AccountNode>> {
            Ok(self.accounts.clone())
        }

        async fn fetch_account_activities(
            &self,
            account_ids: &[String],
            start_date: Option<DateTime<Utc>>,
        ) -> Result<Vec<RawTransaction>> {
            self.account_calls.lock().unwrap().push(account_ids.to_vec());
            self.start_dates.lock().unwrap().push(start_date);
            Ok(self.activities.clone())
        }

        async fn fetch_feed_activities(
            &self,
            account_ids: &[String],
            start_date: Option<DateTime<Utc>>,
        ) -> Result<Vec<RawTransaction>> {
            self.feed_calls.lock().unwrap().push(account_ids.to_vec());
            self.start_dates.lock().unwrap().push(start_date);
            Ok(self.activities.clone())
        }
    }

    struct NoopResolver;

    #[async_trait]
    impl TransferResolver for NoopResolver {
        async fn funds_transfer(&self, _transfer_id: &str) -> Result<FundsTransfer> {
            Err(Error::Fetch(FetchError::Status {
                status: 500,
                body: "unexpected enrichment call".to_string(),
            }))
        }

        async fn institutional_transfer(&self, _transfer_id: &str) -> Result<InstitutionalTransfer> {
            Err(Error::Fetch(FetchError::Status {
                status: 500,
                body: "unexpected enrichment call".to_string(),
            }))
        }
    }

    fn account(id: &str, nickname: Option<&str>, account_type: &str) -> AccountNode {
        serde_json::from_value(json!({
            "id": id,
            "nickname": nickname,
            "unifiedAccountType": account_type,
        }))
        .unwrap()
    }

    fn transaction(account_id: &str, raw_type: &str, amount: &str) -> RawTransaction {
        serde_json::from_value(json!({
            "accountId": account_id,
            "amount": amount,
            "amountSign": "positive",
            "occurredAt": "2024-03-05T10:00:00-05:00",
            "type": raw_type,
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn orchestrator(api: MockApiClient) -> (ExportOrchestrator, Arc<MockApiClient>) {
        let api = Arc::new(api);
        (
            ExportOrchestrator::new(api.clone(), Arc::new(NoopResolver)),
            api,
        )
    }

    #[test]
    fn test_time_frame_start_dates() {
        let now = Utc.with_ymd_and_hms(2024, 2, 20, 9, 30, 0).unwrap();
        assert_eq!(
            TimeFrame::ThisMonth.start_date(now),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single()
        );
        assert_eq!(
            TimeFrame::LastThreeMonths.start_date(now),
            Utc.with_ymd_and_hms(2023, 11, 1, 0, 0, 0).single()
        );
        assert_eq!(TimeFrame::All.start_date(now), None);
    }

    #[tokio::test]
    async fn test_account_details_export_produces_one_artifact() {
        let api = MockApiClient::new(
            vec![account("tfsa-001", Some("My TFSA"), "SELF_DIRECTED_TFSA")],
            vec![transaction("tfsa-001", "INTEREST", "1.23")],
        );
        let (orchestrator, api) = orchestrator(api);

        let artifacts = orchestrator
            .run_at(
                &ExportScope::AccountDetails {
                    account_id: "tfsa-001".to_string(),
                },
                TimeFrame::All,
                Locale::EnCa,
                now(),
            )
            .await
            .unwrap();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].account_id, "tfsa-001");
        assert_eq!(
            artifacts[0].file_name,
            "Wealthsimple My TFSA Transactions up to 2024-03-15.csv"
        );

        let content = String::from_utf8(artifacts[0].content.clone()).unwrap();
        assert!(content.starts_with('\u{feff}'));
        assert!(content.contains("\"Interest\""));
        assert!(content.contains("\"1.23\""));

        assert_eq!(
            *api.account_calls.lock().unwrap(),
            vec![vec!["tfsa-001".to_string()]]
        );
        assert!(api.feed_calls.lock().unwrap().is_empty());
        assert_eq!(*api.start_dates.lock().unwrap(), vec![None]);
    }

    #[tokio::test]
    async fn test_feed_export_defaults_to_all_accounts_and_groups() {
        let api = MockApiClient::new(
            vec![
                account("tfsa-001", None, "SELF_DIRECTED_TFSA"),
                account("cash-001", None, "CASH"),
            ],
            vec![
                transaction("tfsa-001", "INTEREST", "1.00"),
                transaction("cash-001", "INTEREST", "2.00"),
                transaction("tfsa-001", "INTEREST", "3.00"),
            ],
        );
        let (orchestrator, api) = orchestrator(api);

        let artifacts = orchestrator
            .run_at(
                &ExportScope::ActivityFeed { account_ids: None },
                TimeFrame::LastThreeMonths,
                Locale::EnCa,
                now(),
            )
            .await
            .unwrap();

        assert_eq!(
            *api.feed_calls.lock().unwrap(),
            vec![vec!["tfsa-001".to_string(), "cash-001".to_string()]]
        );
        assert_eq!(
            *api.start_dates.lock().unwrap(),
            vec![Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).single()]
        );

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].account_id, "tfsa-001");
        assert_eq!(artifacts[1].account_id, "cash-001");
        assert_eq!(
            artifacts[1].file_name,
            "Wealthsimple Cash Transactions from 2023-12-01 up to 2024-03-15.csv"
        );

        let tfsa = String::from_utf8(artifacts[0].content.clone()).unwrap();
        assert_eq!(tfsa.lines().count(), 3, "header plus two rows");
    }

    #[tokio::test]
    async fn test_unknown_transactions_are_skipped_not_fatal() {
        let api = MockApiClient::new(
            vec![account("cash-001", None, "CASH")],
            vec![
                transaction("cash-001", "SOMETHING_NEW", "9.99"),
                transaction("cash-001", "INTEREST", "0.50"),
            ],
        );
        let (orchestrator, _) = orchestrator(api);

        let artifacts = orchestrator
            .run_at(
                &ExportScope::ActivityFeed { account_ids: None },
                TimeFrame::All,
                Locale::EnCa,
                now(),
            )
            .await
            .unwrap();

        assert_eq!(artifacts.len(), 1);
        let content = String::from_utf8(artifacts[0].content.clone()).unwrap();
        assert_eq!(content.lines().count(), 2, "header plus the interest row");
    }

    #[tokio::test]
    async fn test_unlisted_account_falls_back_to_unknown_nickname() {
        let api = MockApiClient::new(
            vec![],
            vec![transaction("rrsp-009", "INTEREST", "4.00")],
        );
        let (orchestrator, _) = orchestrator(api);

        let artifacts = orchestrator
            .run_at(
                &ExportScope::AccountDetails {
                    account_id: "rrsp-009".to_string(),
                },
                TimeFrame::All,
                Locale::EnCa,
                now(),
            )
            .await
            .unwrap();

        assert_eq!(
            artifacts[0].file_name,
            "Wealthsimple Unknown Transactions up to 2024-03-15.csv"
        );
    }
}

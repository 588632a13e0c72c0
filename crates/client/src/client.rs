//! Authenticated GraphQL transport.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use wsexport_core::accounts::AccountNode;
use wsexport_core::activities::{
    FundsTransfer, InstitutionalTransfer, RawTransaction, TransferResolver,
};
use wsexport_core::errors::{Error, FetchError, Result};

use crate::models::{
    AccountFinancialsData, ActivityFeedData, ActivityListData, FundsTransferData, GraphqlResponse,
    InstitutionalTransferData,
};
use crate::pagination::{fetch_all_pages, Page};
use crate::queries;
use crate::traits::ExportApiClient;

pub const DEFAULT_API_URL: &str = "https://my.wealthsimple.com";

const ACTIVITIES_PAGE_SIZE: u32 = 100;
const ACCOUNTS_PAGE_SIZE: u32 = 25;

/// GraphQL client bound to one identity's bearer token.
pub struct GraphqlClient {
    client: Client,
    graphql_url: String,
    auth_header: HeaderValue,
    identity_id: String,
}

impl GraphqlClient {
    pub fn new(base_url: &str, access_token: &str, identity_id: &str) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {access_token}"))
            .map_err(|_| Error::Unexpected("access token is not a valid header value".into()))?;

        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(GraphqlClient {
            client,
            graphql_url: format!("{}/graphql", base_url.trim_end_matches('/')),
            auth_header,
            identity_id: identity_id.to_string(),
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    async fn post_graphql<T: DeserializeOwned>(
        &self,
        operation_name: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        debug!("GraphQL request: {operation_name}");

        let payload = json!({
            "operationName": operation_name,
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(&self.graphql_url)
            .headers(self.headers())
            .json(&payload)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let envelope: GraphqlResponse<T> = parse_response(operation_name, response).await?;
        envelope.data.ok_or_else(|| {
            FetchError::MissingData(format!("{operation_name} response carried no data")).into()
        })
    }

    async fn fetch_activity_list_page(
        &self,
        account_ids: &[String],
        start_date: Option<DateTime<Utc>>,
        end_date: DateTime<Utc>,
        cursor: Option<String>,
    ) -> Result<Page<RawTransaction>> {
        let query = format!("{}\n{}", queries::FETCH_ACTIVITY_LIST, queries::ACTIVITY_FRAGMENT);
        let variables = json!({
            "first": ACTIVITIES_PAGE_SIZE,
            "cursor": cursor,
            "accountIds": account_ids,
            "startDate": start_date,
            "endDate": end_date,
        });
        let data: ActivityListData = self
            .post_graphql("FetchActivityList", &query, variables)
            .await?;
        Ok(data.activities.into())
    }

    async fn fetch_feed_page(
        &self,
        account_ids: &[String],
        start_date: Option<DateTime<Utc>>,
        cursor: Option<String>,
    ) -> Result<Page<RawTransaction>> {
        let query = format!(
            "{}\n{}",
            queries::FETCH_ACTIVITY_FEED_ITEMS,
            queries::ACTIVITY_FRAGMENT
        );
        let variables = json!({
            "first": ACTIVITIES_PAGE_SIZE,
            "cursor": cursor,
            "condition": {
                "startDate": start_date,
                "accountIds": account_ids,
                "unifiedStatuses": ["COMPLETED"],
            },
        });
        let data: ActivityFeedData = self
            .post_graphql("FetchActivityFeedItems", &query, variables)
            .await?;
        Ok(data.activity_feed_items.into())
    }

    async fn fetch_accounts_page(&self, cursor: Option<String>) -> Result<Page<AccountNode>> {
        let variables = json!({
            "identityId": self.identity_id,
            "pageSize": ACCOUNTS_PAGE_SIZE,
            "cursor": cursor,
        });
        let data: AccountFinancialsData = self
            .post_graphql(
                "FetchAllAccountFinancials",
                queries::FETCH_ALL_ACCOUNT_FINANCIALS,
                variables,
            )
            .await?;
        let identity = data.identity.ok_or_else(|| {
            FetchError::MissingData("identity not found in account financials".to_string())
        })?;
        Ok(identity.accounts.into())
    }
}

#[async_trait]
impl ExportApiClient for GraphqlClient {
    async fn fetch_accounts(&self) -> Result<Vec<AccountNode>> {
        fetch_all_pages(|cursor| self.fetch_accounts_page(cursor)).await
    }

    async fn fetch_account_activities(
        &self,
        account_ids: &[String],
        start_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<RawTransaction>> {
        let end_date = Utc::now();
        fetch_all_pages(|cursor| {
            self.fetch_activity_list_page(account_ids, start_date, end_date, cursor)
        })
        .await
    }

    async fn fetch_feed_activities(
        &self,
        account_ids: &[String],
        start_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<RawTransaction>> {
        fetch_all_pages(|cursor| self.fetch_feed_page(account_ids, start_date, cursor)).await
    }
}

#[async_trait]
impl TransferResolver for GraphqlClient {
    async fn funds_transfer(&self, transfer_id: &str) -> Result<FundsTransfer> {
        let data: FundsTransferData = self
            .post_graphql(
                "FetchFundsTransfer",
                queries::FETCH_FUNDS_TRANSFER,
                json!({ "id": transfer_id }),
            )
            .await?;
        data.funds_transfer.ok_or_else(|| {
            FetchError::MissingData(format!("funds transfer {transfer_id} not found")).into()
        })
    }

    async fn institutional_transfer(&self, transfer_id: &str) -> Result<InstitutionalTransfer> {
        let data: InstitutionalTransferData = self
            .post_graphql(
                "FetchInstitutionalTransfer",
                queries::FETCH_INSTITUTIONAL_TRANSFER,
                json!({ "id": transfer_id }),
            )
            .await?;
        data.account_transfer.ok_or_else(|| {
            FetchError::MissingData(format!("institutional transfer {transfer_id} not found"))
                .into()
        })
    }
}

async fn parse_response<T: DeserializeOwned>(operation_name: &str, response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        }
        .into());
    }

    serde_json::from_str(&body).map_err(|e| {
        FetchError::Decode(format!("{operation_name}: {e}")).into()
    })
}

//! Enrichment lookups for transaction kinds without inline counterparty
//! details.
//!
//! Two kinds qualify: electronic funds transfers (bank counterparty on a
//! backing funds-transfer record) and institutional transfers (external
//! institution on a backing account-transfer record). Lookups are one
//! independent round trip each, awaited in transaction order; there is no
//! caching, so a recurring id is re-fetched.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::Result;

/// Counterparty bank account details on a funds transfer.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
}

/// One side of a funds transfer.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountOwner {
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
}

/// A bank funds transfer record, fetched by id for EFT transactions.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FundsTransfer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<BankAccountOwner>,
    #[serde(default)]
    pub destination: Option<BankAccountOwner>,
}

impl FundsTransfer {
    /// The counterparty bank account on the source side, if present.
    pub fn source_bank_account(&self) -> Option<&BankAccount> {
        self.source.as_ref().and_then(|o| o.bank_account.as_ref())
    }

    /// The counterparty bank account on the destination side, if present.
    pub fn destination_bank_account(&self) -> Option<&BankAccount> {
        self.destination
            .as_ref()
            .and_then(|o| o.bank_account.as_ref())
    }
}

/// An institutional transfer record, fetched by id for incoming
/// inter-institution transfers.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalTransfer {
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub transfer_status: Option<String>,
    #[serde(default)]
    pub redacted_institution_account_number: Option<String>,
}

/// On-demand secondary lookups performed while classifying.
///
/// A failed lookup surfaces as a [`FetchError`](crate::errors::FetchError)
/// and aborts the export of the owning transaction's run.
#[async_trait]
pub trait TransferResolver: Send + Sync {
    /// Fetch a bank funds transfer by id.
    async fn funds_transfer(&self, transfer_id: &str) -> Result<FundsTransfer>;

    /// Fetch an institutional transfer by id.
    async fn institutional_transfer(&self, transfer_id: &str) -> Result<InstitutionalTransfer>;
}

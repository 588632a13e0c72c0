//! Transaction classifier.
//!
//! Maps one raw feed item to a rendered {payee, notes, category} triple for
//! the given locale, calling out to the [`TransferResolver`] for the kinds
//! whose counterparty lives on a backing record. Classification is total:
//! unrecognized keys log a diagnostic and are skipped, never fatal.

use log::{debug, error};

use crate::accounts::account_label;
use crate::errors::{Error, FetchError, Result};
use crate::locale::Texts;

use super::activities_model::{ActivityKind, RawTransaction, RenderedRow};
use super::enrichment::{BankAccount, TransferResolver};

/// Classifies one transaction into a render-ready row.
///
/// Returns `Ok(None)` for unrecognized (type, subType) keys; those rows are
/// dropped and the export continues. Enrichment failures propagate and abort
/// the run. Enrichment calls happen in place, so classifying transactions
/// sequentially keeps output order equal to input order.
pub async fn classify(
    tx: &RawTransaction,
    texts: &Texts,
    resolver: &dyn TransferResolver,
) -> Result<Option<RenderedRow>> {
    let mut category = String::new();

    let (payee, notes) = match tx.kind() {
        ActivityKind::Interest => (
            texts.wealthsimple.to_string(),
            texts.interest_notes.to_string(),
        ),
        ActivityKind::StockLendingInterest => (
            texts.wealthsimple.to_string(),
            texts.stock_lending_interest_notes.to_string(),
        ),
        ActivityKind::ETransferOut => {
            let payee = field(&tx.e_transfer_email);
            let notes = format!(
                "{} {} {}",
                texts.withdrawal_e_transfer_prefix,
                texts.to,
                field(&tx.e_transfer_name)
            );
            (payee, notes)
        }
        ActivityKind::ETransferIn => {
            let payee = field(&tx.e_transfer_email);
            let notes = format!(
                "{} {} {}",
                texts.deposit_e_transfer_prefix,
                texts.from,
                field(&tx.e_transfer_name)
            );
            (payee, notes)
        }
        ActivityKind::Dividend => {
            let symbol = field(&tx.asset_symbol);
            let notes = format!("{} {} {}", texts.dividend_received_prefix, texts.from, symbol);
            (symbol, notes)
        }
        ActivityKind::DividendReinvestment => asset_action(tx, texts.dividend_reinvested_prefix),
        ActivityKind::BuyOrder | ActivityKind::CryptoBuy => {
            asset_action(tx, texts.buy_order_prefix)
        }
        ActivityKind::SellOrder => asset_action(tx, texts.sell_order_prefix),
        ActivityKind::CardSpend => {
            let merchant = field(&tx.spend_merchant);
            (merchant.clone(), merchant)
        }
        ActivityKind::BillPay => {
            category = field(&tx.aft_transaction_category);
            let payee = tx
                .bill_pay_payee_nickname
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(tx.bill_pay_company_name.as_deref())
                .unwrap_or_default()
                .to_string();
            let frequency = field(&tx.frequency);
            let notes = format!("{} ({})", payee, texts.frequency(&frequency));
            (payee, notes)
        }
        ActivityKind::PreauthorizedDebit => {
            category = field(&tx.aft_transaction_category);
            let payee = field(&tx.aft_originator_name);
            let notes = format!("{} {} {}", texts.account_debit_prefix, texts.to, payee);
            (payee, notes)
        }
        ActivityKind::DirectDeposit => {
            category = field(&tx.aft_transaction_category);
            let payee = field(&tx.aft_originator_name);
            let notes = format!("{} {} {}", texts.account_funding_prefix, texts.from, payee);
            (payee, notes)
        }
        ActivityKind::EftOut => {
            let info = resolver.funds_transfer(external_id(tx)?).await?;
            let payee = bank_payee(info.destination_bank_account());
            let notes = format!(
                "{} {} {}",
                texts.electronic_funds_transfer_prefix, texts.to, payee
            );
            (payee, notes)
        }
        ActivityKind::EftIn => {
            let info = resolver.funds_transfer(external_id(tx)?).await?;
            let payee = bank_payee(info.source_bank_account());
            let notes = format!(
                "{} {} {}",
                texts.electronic_funds_transfer_prefix, texts.from, payee
            );
            (payee, notes)
        }
        ActivityKind::P2pReceive => {
            let handle = field(&tx.p2p_handle);
            let notes = p2p_notes(
                texts.cash_transfer_received_prefix,
                texts.from,
                &handle,
                tx,
                texts,
            );
            (handle, notes)
        }
        ActivityKind::P2pSend => {
            let handle = field(&tx.p2p_handle);
            let notes = p2p_notes(
                texts.cash_transfer_sent_prefix,
                texts.to,
                &handle,
                tx,
                texts,
            );
            (handle, notes)
        }
        ActivityKind::CryptoReceive => asset_action(tx, texts.crypto_received),
        ActivityKind::CryptoStake => asset_action(tx, texts.crypto_staked),
        ActivityKind::CryptoStakingReward => asset_action(tx, texts.crypto_staking_reward),
        ActivityKind::InternalTransferSource => {
            let label = account_label(tx.opposing_account_id.as_deref().unwrap_or_default());
            let notes = format!("{} {} {}", texts.transfer_source, texts.to, label);
            (label, notes)
        }
        ActivityKind::InternalTransferDestination => {
            let label = account_label(tx.opposing_account_id.as_deref().unwrap_or_default());
            let notes = format!("{} {} {}", texts.transfer_destination, texts.from, label);
            (label, notes)
        }
        ActivityKind::IncentiveBonus => (
            texts.wealthsimple.to_string(),
            texts.incentive_bonus.to_string(),
        ),
        ActivityKind::InstitutionalTransferIn => {
            let info = resolver.institutional_transfer(external_id(tx)?).await?;
            let payee = format!(
                "{} - ***{}",
                info.institution_name.as_deref().unwrap_or_default(),
                info.redacted_institution_account_number
                    .as_deref()
                    .unwrap_or_default()
            );
            let notes = format!(
                "{} {} {}",
                texts.institutional_transfer_received, texts.from, payee
            );
            (payee, notes)
        }
        ActivityKind::TransferFeeRefund => (
            texts.wealthsimple.to_string(),
            texts.institutional_transfer_fee_refund.to_string(),
        ),
        ActivityKind::Cashback => (texts.wealthsimple.to_string(), texts.cashback.to_string()),
        ActivityKind::Unknown { .. } => {
            error!(
                "{} transaction [{}] has unexpected type. Skipping",
                tx.occurred_date(),
                tx.classification_key()
            );
            debug!("Skipped transaction: {:?}", tx);
            return Ok(None);
        }
    };

    Ok(Some(RenderedRow {
        account_id: tx.account_id.clone(),
        date: tx.occurred_date(),
        account: account_label(&tx.account_id),
        payee,
        notes,
        category,
        amount: tx.signed_amount(),
    }))
}

/// An optional feed field as a rendered string, empty when absent.
fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Payee/notes pair for asset kinds: payee is the symbol, notes the action
/// verb plus quantity and symbol.
fn asset_action(tx: &RawTransaction, verb: &str) -> (String, String) {
    let symbol = field(&tx.asset_symbol);
    let notes = format!("{} {} {}", verb, field(&tx.asset_quantity), symbol);
    (symbol, notes)
}

/// Directional peer-to-peer notes with the optional free-text message
/// appended.
fn p2p_notes(
    prefix: &str,
    direction: &str,
    handle: &str,
    tx: &RawTransaction,
    texts: &Texts,
) -> String {
    let mut notes = format!("{} {} {}", prefix, direction, handle);
    if let Some(message) = tx.p2p_message.as_deref().filter(|m| !m.is_empty()) {
        notes.push_str(&format!(" {} : {}", texts.with_note, message));
    }
    notes
}

/// Composes the bank counterparty display: institution name, then nickname
/// or account name, then account number, skipping absent pieces.
fn bank_payee(bank: Option<&BankAccount>) -> String {
    let Some(bank) = bank else {
        return String::new();
    };
    let mut parts: Vec<&str> = Vec::new();
    if let Some(institution) = bank.institution_name.as_deref().filter(|s| !s.is_empty()) {
        parts.push(institution);
    }
    if let Some(name) = bank
        .nickname
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(bank.account_name.as_deref().filter(|s| !s.is_empty()))
    {
        parts.push(name);
    }
    if let Some(number) = bank.account_number.as_deref().filter(|s| !s.is_empty()) {
        parts.push(number);
    }
    parts.join(" ")
}

/// The backing record id for kinds that need enrichment.
fn external_id(tx: &RawTransaction) -> Result<&str> {
    tx.external_canonical_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::Fetch(FetchError::MissingData(format!(
                "transaction [{}] has no externalCanonicalId for enrichment",
                tx.classification_key()
            )))
        })
}

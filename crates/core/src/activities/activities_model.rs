//! Activity feed domain models.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::Deserialize;

/// Direction of a transaction amount as reported by the feed.
///
/// The amount itself is an unsigned decimal string; this flag carries the
/// sign separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmountSign {
    #[default]
    Positive,
    Negative,
}

/// One raw activity feed item, straight from the feed query.
///
/// `type` and `subType` jointly form the classification key; the remaining
/// optional fields are a bag of type-specific details, populated only for
/// the kinds that carry them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub account_id: String,
    /// Id of the backing record for kinds that need a secondary lookup.
    #[serde(default)]
    pub external_canonical_id: Option<String>,
    /// Unsigned decimal amount, kept as an opaque string to avoid
    /// floating-point rounding.
    pub amount: String,
    #[serde(default)]
    pub amount_sign: AmountSign,
    pub occurred_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub opposing_account_id: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,

    #[serde(default)]
    pub e_transfer_email: Option<String>,
    #[serde(default)]
    pub e_transfer_name: Option<String>,
    #[serde(default)]
    pub p2p_handle: Option<String>,
    #[serde(default)]
    pub p2p_message: Option<String>,
    #[serde(default)]
    pub asset_symbol: Option<String>,
    #[serde(default)]
    pub asset_quantity: Option<String>,
    #[serde(default)]
    pub aft_originator_name: Option<String>,
    #[serde(default)]
    pub aft_transaction_category: Option<String>,
    #[serde(default)]
    pub bill_pay_company_name: Option<String>,
    #[serde(default)]
    pub bill_pay_payee_nickname: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub spend_merchant: Option<String>,
}

impl RawTransaction {
    /// Resolves the classification key into an [`ActivityKind`].
    pub fn kind(&self) -> ActivityKind {
        ActivityKind::from_key(&self.activity_type, self.sub_type.as_deref())
    }

    /// The compound classification key, for diagnostics.
    pub fn classification_key(&self) -> String {
        match self.sub_type.as_deref() {
            Some(sub_type) if !sub_type.is_empty() => {
                format!("{}/{}", self.activity_type, sub_type)
            }
            _ => self.activity_type.clone(),
        }
    }

    /// The amount string with a leading minus sign for negative amounts.
    pub fn signed_amount(&self) -> String {
        match self.amount_sign {
            AmountSign::Negative => format!("-{}", self.amount),
            AmountSign::Positive => self.amount.clone(),
        }
    }

    /// The date the transaction occurred, rendered `Y-M-D` in the
    /// timestamp's own offset (unpadded, locale-invariant).
    pub fn occurred_date(&self) -> String {
        let date = self.occurred_at.date_naive();
        format!("{}-{}-{}", date.year(), date.month(), date.day())
    }
}

/// Every known (type, subType) classification key, plus a fallback.
///
/// Making the key an explicit tagged union gives exhaustive matching in the
/// classifier; unrecognized keys carry their raw strings for diagnostics and
/// are skipped, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    /// INTEREST
    Interest,
    /// INTEREST/FPL_INTEREST
    StockLendingInterest,
    /// WITHDRAWAL/E_TRANSFER
    ETransferOut,
    /// DEPOSIT/E_TRANSFER, DEPOSIT/E_TRANSFER_FUNDING
    ETransferIn,
    /// DIVIDEND/DIY_DIVIDEND
    Dividend,
    /// DIY_BUY/DIVIDEND_REINVESTMENT
    DividendReinvestment,
    /// DIY_BUY/MARKET_ORDER, DIY_BUY/LIMIT_ORDER
    BuyOrder,
    /// DIY_SELL/MARKET_ORDER, DIY_SELL/LIMIT_ORDER
    SellOrder,
    /// SPEND/PREPAID
    CardSpend,
    /// WITHDRAWAL/BILL_PAY
    BillPay,
    /// WITHDRAWAL/AFT
    PreauthorizedDebit,
    /// DEPOSIT/AFT
    DirectDeposit,
    /// WITHDRAWAL/EFT (requires funds transfer lookup)
    EftOut,
    /// DEPOSIT/EFT (requires funds transfer lookup)
    EftIn,
    /// P2P_PAYMENT/SEND_RECEIVED, P2P_PAYMENT/REQUEST
    P2pReceive,
    /// P2P_PAYMENT/SEND
    P2pSend,
    /// CRYPTO_TRANSFER/TRANSFER_IN
    CryptoReceive,
    /// CRYPTO_STAKING_ACTION/STAKE, CRYPTO_STAKING_ACTION/AUTO_STAKE
    CryptoStake,
    /// CRYPTO_STAKING_REWARD
    CryptoStakingReward,
    /// CRYPTO_BUY/MARKET_ORDER, CRYPTO_BUY/LIMIT_ORDER
    CryptoBuy,
    /// INTERNAL_TRANSFER/SOURCE
    InternalTransferSource,
    /// INTERNAL_TRANSFER/DESTINATION
    InternalTransferDestination,
    /// PROMOTION/INCENTIVE_BONUS
    IncentiveBonus,
    /// INSTITUTIONAL_TRANSFER_INTENT/TRANSFER_IN (requires institutional
    /// transfer lookup)
    InstitutionalTransferIn,
    /// REFUND/TRANSFER_FEE_REFUND
    TransferFeeRefund,
    /// REIMBURSEMENT/CASHBACK
    Cashback,
    /// Anything else. Skipped by the classifier.
    Unknown {
        raw_type: String,
        raw_sub_type: Option<String>,
    },
}

impl ActivityKind {
    /// Maps a raw (type, subType) pair to its kind.
    ///
    /// An empty subType counts as absent, matching how the feed omits it.
    pub fn from_key(raw_type: &str, raw_sub_type: Option<&str>) -> Self {
        let sub_type = raw_sub_type.filter(|s| !s.is_empty());
        match (raw_type, sub_type) {
            ("INTEREST", None) => ActivityKind::Interest,
            ("INTEREST", Some("FPL_INTEREST")) => ActivityKind::StockLendingInterest,
            ("WITHDRAWAL", Some("E_TRANSFER")) => ActivityKind::ETransferOut,
            ("DEPOSIT", Some("E_TRANSFER" | "E_TRANSFER_FUNDING")) => ActivityKind::ETransferIn,
            ("DIVIDEND", Some("DIY_DIVIDEND")) => ActivityKind::Dividend,
            ("DIY_BUY", Some("DIVIDEND_REINVESTMENT")) => ActivityKind::DividendReinvestment,
            ("DIY_BUY", Some("MARKET_ORDER" | "LIMIT_ORDER")) => ActivityKind::BuyOrder,
            ("DIY_SELL", Some("MARKET_ORDER" | "LIMIT_ORDER")) => ActivityKind::SellOrder,
            ("SPEND", Some("PREPAID")) => ActivityKind::CardSpend,
            ("WITHDRAWAL", Some("BILL_PAY")) => ActivityKind::BillPay,
            ("WITHDRAWAL", Some("AFT")) => ActivityKind::PreauthorizedDebit,
            ("DEPOSIT", Some("AFT")) => ActivityKind::DirectDeposit,
            ("WITHDRAWAL", Some("EFT")) => ActivityKind::EftOut,
            ("DEPOSIT", Some("EFT")) => ActivityKind::EftIn,
            ("P2P_PAYMENT", Some("SEND_RECEIVED" | "REQUEST")) => ActivityKind::P2pReceive,
            ("P2P_PAYMENT", Some("SEND")) => ActivityKind::P2pSend,
            ("CRYPTO_TRANSFER", Some("TRANSFER_IN")) => ActivityKind::CryptoReceive,
            ("CRYPTO_STAKING_ACTION", Some("STAKE" | "AUTO_STAKE")) => ActivityKind::CryptoStake,
            ("CRYPTO_STAKING_REWARD", None) => ActivityKind::CryptoStakingReward,
            ("CRYPTO_BUY", Some("MARKET_ORDER" | "LIMIT_ORDER")) => ActivityKind::CryptoBuy,
            ("INTERNAL_TRANSFER", Some("SOURCE")) => ActivityKind::InternalTransferSource,
            ("INTERNAL_TRANSFER", Some("DESTINATION")) => ActivityKind::InternalTransferDestination,
            ("PROMOTION", Some("INCENTIVE_BONUS")) => ActivityKind::IncentiveBonus,
            ("INSTITUTIONAL_TRANSFER_INTENT", Some("TRANSFER_IN")) => {
                ActivityKind::InstitutionalTransferIn
            }
            ("REFUND", Some("TRANSFER_FEE_REFUND")) => ActivityKind::TransferFeeRefund,
            ("REIMBURSEMENT", Some("CASHBACK")) => ActivityKind::Cashback,
            _ => ActivityKind::Unknown {
                raw_type: raw_type.to_string(),
                raw_sub_type: sub_type.map(|s| s.to_string()),
            },
        }
    }

    /// Whether classifying this kind requires a secondary lookup.
    pub fn needs_enrichment(&self) -> bool {
        matches!(
            self,
            ActivityKind::EftOut | ActivityKind::EftIn | ActivityKind::InstitutionalTransferIn
        )
    }
}

/// One classified, render-ready export row. Derived and transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub account_id: String,
    /// Transaction date, `Y-M-D`.
    pub date: String,
    /// Short derived account label (CSV account column).
    pub account: String,
    pub payee: String,
    pub notes: String,
    /// Transaction category; empty for most kinds.
    pub category: String,
    /// Signed decimal amount string.
    pub amount: String,
}

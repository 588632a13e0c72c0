//! User-visible text tables.
//!
//! Every string rendered into a CSV document or a file name comes from one
//! of these tables. The entries mirror the wording used by the Wealthsimple
//! web UI in each locale.

/// All localized strings used by the classifier, serializer, and artifact
/// naming.
#[derive(Debug, Clone, Copy)]
pub struct Texts {
    // CSV column headers
    pub date: &'static str,
    pub account: &'static str,
    pub payee: &'static str,
    pub notes: &'static str,
    pub category: &'static str,
    pub amount: &'static str,

    // Classifier phrases
    pub interest_notes: &'static str,
    pub stock_lending_interest_notes: &'static str,
    pub withdrawal_e_transfer_prefix: &'static str,
    pub deposit_e_transfer_prefix: &'static str,
    pub dividend_received_prefix: &'static str,
    pub dividend_reinvested_prefix: &'static str,
    pub buy_order_prefix: &'static str,
    pub sell_order_prefix: &'static str,
    pub account_funding_prefix: &'static str,
    pub account_debit_prefix: &'static str,
    pub electronic_funds_transfer_prefix: &'static str,
    pub cash_transfer_received_prefix: &'static str,
    pub cash_transfer_sent_prefix: &'static str,
    pub crypto_received: &'static str,
    pub crypto_staked: &'static str,
    pub crypto_staking_reward: &'static str,
    pub transfer_source: &'static str,
    pub transfer_destination: &'static str,
    pub incentive_bonus: &'static str,
    pub institutional_transfer_received: &'static str,
    pub institutional_transfer_fee_refund: &'static str,
    pub cashback: &'static str,
    pub wealthsimple: &'static str,

    // Connectives
    pub from: &'static str,
    pub to: &'static str,
    pub with_note: &'static str,

    // Recurrence frequency labels, keyed by the feed's raw values
    pub frequency_annual: &'static str,
    pub frequency_monthly: &'static str,
    pub frequency_one_time: &'static str,

    // Account naming
    pub non_registered: &'static str,
    pub unknown: &'static str,

    // File name time frame
    pub from_time_frame: &'static str,
    pub up_to_time_frame: &'static str,
}

impl Texts {
    /// Localizes a raw recurrence frequency value from the feed.
    ///
    /// `ANNUALY` is the feed-side spelling. Unmapped values pass through
    /// unchanged rather than rendering as a placeholder.
    pub fn frequency<'a>(&'a self, raw: &'a str) -> &'a str {
        match raw {
            "ANNUALY" => self.frequency_annual,
            "MONTHLY" => self.frequency_monthly,
            "ONE_TIME" => self.frequency_one_time,
            other => other,
        }
    }
}

/// Canadian English text table.
pub const EN_CA: Texts = Texts {
    date: "Date",
    account: "Account",
    payee: "Payee",
    notes: "Notes",
    category: "Category",
    amount: "Amount",

    interest_notes: "Interest",
    stock_lending_interest_notes: "Stock lending earnings",
    withdrawal_e_transfer_prefix: "Sent INTERAC e-Transfer",
    deposit_e_transfer_prefix: "Received INTERAC e-Transfer",
    dividend_received_prefix: "Received dividend",
    dividend_reinvested_prefix: "Reinvested dividend into",
    buy_order_prefix: "Bought",
    sell_order_prefix: "Sold",
    account_funding_prefix: "Direct deposit",
    account_debit_prefix: "Preauthorized debit",
    electronic_funds_transfer_prefix: "Transfer",
    cash_transfer_received_prefix: "Received WealthSimple Cash transfer",
    cash_transfer_sent_prefix: "Sent WealthSimple Cash transfer",
    crypto_received: "Crypto received:",
    crypto_staked: "Crypto staked:",
    crypto_staking_reward: "Crypto staking reward:",
    transfer_source: "Transfered",
    transfer_destination: "Transfered",
    incentive_bonus: "Promotional bonus",
    institutional_transfer_received: "Interinstitutional transfer",
    institutional_transfer_fee_refund: "Transfer fee refund",
    cashback: "Cashback",
    wealthsimple: "WealthSimple",

    from: "from",
    to: "to",
    with_note: "with note",

    frequency_annual: "ANNUAL",
    frequency_monthly: "Monthly",
    frequency_one_time: "One time",

    non_registered: "Non-registered",
    unknown: "Unknown",

    from_time_frame: "from",
    up_to_time_frame: "up to",
};

/// Canadian French text table.
pub const FR_CA: Texts = Texts {
    date: "Date",
    account: "Compte",
    payee: "Bénéficiaire",
    notes: "Notes",
    category: "Categorie",
    amount: "Montant",

    interest_notes: "Intérêt",
    stock_lending_interest_notes: "Gains des prêts d'actions",
    withdrawal_e_transfer_prefix: "Transfert INTERAC envoyé",
    deposit_e_transfer_prefix: "Transfert INTERAC reçu",
    dividend_received_prefix: "Dividendes reçus",
    dividend_reinvested_prefix: "Dividendes réinvestis dans",
    buy_order_prefix: "Acheté:",
    sell_order_prefix: "Vendu:",
    account_funding_prefix: "Dépôt direct",
    account_debit_prefix: "Débit préautorisé",
    electronic_funds_transfer_prefix: "Transfert",
    cash_transfer_received_prefix: "Transfert WealthSimple Cash reçu",
    cash_transfer_sent_prefix: "Transfert WealthSimple Cash envoyé",
    crypto_received: "Crypto reçue:",
    crypto_staked: "Crypto stakée:",
    crypto_staking_reward: "Récompense pour crypto stakée:",
    transfer_source: "Transferé",
    transfer_destination: "Transferé",
    incentive_bonus: "Prime de récompense",
    institutional_transfer_received: "Transfert interinstitution",
    institutional_transfer_fee_refund: "Remboursement des frais de transfert",
    cashback: "Remise en argent",
    wealthsimple: "WealthSimple",

    from: "de",
    to: "à",
    with_note: "avec la note",

    frequency_annual: "Annuel",
    frequency_monthly: "Mensuel",
    frequency_one_time: "Unique",

    non_registered: "Non enregistré",
    unknown: "Inconnu",

    from_time_frame: "du",
    up_to_time_frame: "jusqu'au",
};

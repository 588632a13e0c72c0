//! Account domain models.
//!
//! Two distinct display names exist for an account and both appear in an
//! export: the *nickname* (free text, used in file names) and the *label*
//! (short derived code, used in the CSV account column and for internal
//! transfer counterparties).

use serde::Deserialize;

use crate::locale::Texts;

/// Unified account type reported for cash accounts.
const UNIFIED_TYPE_CASH: &str = "CASH";

/// Prefix of unified account types for self-directed accounts; the remainder
/// names the account category (e.g. `SELF_DIRECTED_TFSA`).
const SELF_DIRECTED_PREFIX: &str = "SELF_DIRECTED_";

/// Account id prefix for non-registered accounts. Contains a hyphen itself,
/// so label derivation treats it as a single segment.
const NON_REGISTERED_ID_PREFIX: &str = "non-registered";

/// Hyphen segment marking a cash account id.
const CASH_ID_SEGMENT: &str = "cash";

/// Raw account record from the account directory query.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountNode {
    pub id: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub unified_account_type: Option<String>,
}

/// An account with its resolved display nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub id: String,
    pub nickname: String,
}

impl AccountInfo {
    /// Resolves the display nickname for a directory record.
    ///
    /// A user-set nickname always wins. Otherwise the nickname is derived
    /// from the unified account type: cash accounts become "Cash" and
    /// self-directed accounts take their category name, with localized
    /// special cases for crypto and non-registered. Anything else falls back
    /// to the localized "Unknown".
    pub fn from_node(node: AccountNode, texts: &Texts) -> Self {
        let nickname = match node.nickname.filter(|n| !n.is_empty()) {
            Some(nickname) => nickname,
            None => derive_nickname(node.unified_account_type.as_deref(), texts),
        };
        Self {
            id: node.id,
            nickname,
        }
    }
}

fn derive_nickname(unified_account_type: Option<&str>, texts: &Texts) -> String {
    let Some(account_type) = unified_account_type else {
        return texts.unknown.to_string();
    };
    if account_type == UNIFIED_TYPE_CASH {
        return "Cash".to_string();
    }
    if let Some(name) = account_type.strip_prefix(SELF_DIRECTED_PREFIX) {
        return match name {
            "CRYPTO" => "Crypto".to_string(),
            "NON_REGISTERED" => texts.non_registered.to_string(),
            other => other.to_string(),
        };
    }
    texts.unknown.to_string()
}

/// Derives the short display label for an account id.
///
/// Splits the id on hyphens: non-registered ids keep the full prefix plus an
/// optional qualifier segment, ids whose second segment is the cash marker
/// become "cash", and everything else takes its first segment. The label is
/// always upper-cased.
pub fn account_label(account_id: &str) -> String {
    let segments: Vec<&str> = account_id.split('-').collect();
    let mut label = segments.first().copied().unwrap_or_default().to_string();

    if let Some(rest) = account_id.strip_prefix(NON_REGISTERED_ID_PREFIX) {
        label = NON_REGISTERED_ID_PREFIX.to_string();
        let qualifiers: Vec<&str> = rest
            .trim_start_matches('-')
            .split('-')
            .filter(|s| !s.is_empty())
            .collect();
        if qualifiers.len() >= 2 {
            label.push(' ');
            label.push_str(qualifiers[1]);
        }
    } else if segments.get(1) == Some(&CASH_ID_SEGMENT) {
        label = CASH_ID_SEGMENT.to_string();
    }

    label.to_uppercase()
}

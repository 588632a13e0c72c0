//! Named output artifacts.

use chrono::NaiveDate;

use crate::locale::Texts;

/// One generated export file for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub account_id: String,
    pub file_name: String,
    /// UTF-8 CSV document with BOM prefix.
    pub content: Vec<u8>,
}

/// Builds the artifact file name for an account and date range.
///
/// `"Wealthsimple {nickname} Transactions {range}.csv"`, where the range is
/// `"{from} {fromDate} {up to} {nowDate}"` or just `"{up to} {nowDate}"`
/// when no start bound was chosen. Dates are `yyyy-MM-dd`.
pub fn build_file_name(
    nickname: &str,
    from_date: Option<NaiveDate>,
    now_date: NaiveDate,
    texts: &Texts,
) -> String {
    let mut time_frame = String::new();
    if let Some(from_date) = from_date {
        time_frame.push_str(&format!(
            "{} {} ",
            texts.from_time_frame,
            from_date.format("%Y-%m-%d")
        ));
    }
    time_frame.push_str(&format!(
        "{} {}",
        texts.up_to_time_frame,
        now_date.format("%Y-%m-%d")
    ));

    format!("Wealthsimple {} Transactions {}.csv", nickname, time_frame)
}

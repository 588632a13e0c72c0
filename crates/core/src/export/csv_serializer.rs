//! CSV rendering for one account's rows.

use crate::activities::RenderedRow;
use crate::locale::Texts;

/// Byte-order mark prefix so spreadsheet tools auto-detect UTF-8.
const UTF8_BOM: char = '\u{feff}';

/// Serializes one account's rows into a CSV document.
///
/// One localized header line, then one line per row. Every field is
/// double-quoted except the account label, which is a derived upper-cased id
/// segment and cannot contain delimiters. Embedded quotes in quoted fields
/// are escaped by doubling.
pub fn serialize_rows(rows: &[RenderedRow], texts: &Texts) -> Vec<u8> {
    let mut doc = String::new();
    doc.push(UTF8_BOM);
    doc.push_str(&format!(
        "{},{},{},{},{},{}\n",
        texts.date, texts.account, texts.payee, texts.notes, texts.category, texts.amount
    ));
    for row in rows {
        doc.push_str(&format!(
            "{},{},{},{},{},{}\n",
            quoted(&row.date),
            row.account,
            quoted(&row.payee),
            quoted(&row.notes),
            quoted(&row.category),
            quoted(&row.amount)
        ));
    }
    doc.into_bytes()
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN_CA, FR_CA};

    fn row(payee: &str, notes: &str, amount: &str) -> RenderedRow {
        RenderedRow {
            account_id: "tfsa-001".to_string(),
            date: "2024-3-5".to_string(),
            account: "TFSA".to_string(),
            payee: payee.to_string(),
            notes: notes.to_string(),
            category: String::new(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_header_plus_one_line_per_row() {
        let rows = vec![row("VEQT", "Bought 1.5 VEQT", "-100.00"), row("A", "B", "5.00")];
        let doc = String::from_utf8(serialize_rows(&rows, &EN_CA)).unwrap();
        let lines: Vec<&str> = doc.trim_end_matches('\n').split('\n').collect();
        assert_eq!(lines.len(), rows.len() + 1);
        assert_eq!(lines[0], "\u{feff}Date,Account,Payee,Notes,Category,Amount");
        assert_eq!(lines[1], "\"2024-3-5\",TFSA,\"VEQT\",\"Bought 1.5 VEQT\",\"\",\"-100.00\"");
    }

    #[test]
    fn test_bom_prefix_bytes() {
        let doc = serialize_rows(&[], &EN_CA);
        assert_eq!(&doc[..3], [0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_localized_header() {
        let doc = String::from_utf8(serialize_rows(&[], &FR_CA)).unwrap();
        assert_eq!(
            doc.trim_end_matches('\n'),
            "\u{feff}Date,Compte,Bénéficiaire,Notes,Categorie,Montant"
        );
    }

    #[test]
    fn test_round_trip_with_embedded_quotes_and_commas() {
        let rows = vec![
            row("Grocer, The \"Best\"", "with note : hi, there", "-12.34"),
            row("pat@example.com", "Received INTERAC e-Transfer from Pat", "5.00"),
        ];
        let doc = serialize_rows(&rows, &EN_CA);

        // Strip the BOM and parse the document back with a CSV reader.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(&doc[3..]);
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>().unwrap();

        assert_eq!(records.len(), rows.len());
        for (record, row) in records.iter().zip(&rows) {
            assert_eq!(&record[0], row.date.as_str());
            assert_eq!(&record[1], row.account.as_str());
            assert_eq!(&record[2], row.payee.as_str());
            assert_eq!(&record[3], row.notes.as_str());
            assert_eq!(&record[4], row.category.as_str());
            assert_eq!(&record[5], row.amount.as_str());
        }
    }
}

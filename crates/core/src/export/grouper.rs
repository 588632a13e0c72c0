//! Partitions classified rows by account.

use std::collections::HashMap;

use crate::activities::RenderedRow;

/// One account's rows, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountGroup {
    pub account_id: String,
    pub rows: Vec<RenderedRow>,
}

/// Groups rows by account id.
///
/// Pure, stable partition: rows keep their arrival order within each group,
/// and groups appear in first-seen order, so flattening the result restores
/// the input order per account.
pub fn group_by_account(rows: Vec<RenderedRow>) -> Vec<AccountGroup> {
    let mut groups: Vec<AccountGroup> = Vec::new();
    let mut index_by_account: HashMap<String, usize> = HashMap::new();

    for row in rows {
        match index_by_account.get(&row.account_id) {
            Some(&index) => groups[index].rows.push(row),
            None => {
                index_by_account.insert(row.account_id.clone(), groups.len());
                groups.push(AccountGroup {
                    account_id: row.account_id.clone(),
                    rows: vec![row],
                });
            }
        }
    }

    groups
}

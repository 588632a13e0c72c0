//! Accounts module - directory records, display nicknames, and labels.

mod accounts_model;


pub use accounts_model::{account_label, AccountInfo, AccountNode};

//! Activities module - raw feed records, classification, and enrichment.

mod activities_model;
mod classifier;
mod enrichment;



pub use activities_model::{ActivityKind, AmountSign, RawTransaction, RenderedRow};
pub use classifier::classify;
pub use enrichment::{
    BankAccount, BankAccountOwner, FundsTransfer, InstitutionalTransfer, TransferResolver,
};

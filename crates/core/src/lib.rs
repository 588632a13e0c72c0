//! wsexport-core - Domain layer for Wealthsimple transaction exports.
//!
//! Holds everything that does not touch the network: locale text tables,
//! account nickname/label derivation, the transaction classifier (with its
//! enrichment trait seam), grouping, and CSV serialization. The companion
//! `wsexport-client` crate supplies the GraphQL transport and the export
//! orchestrator.

pub mod accounts;
pub mod activities;
pub mod errors;
pub mod export;
pub mod locale;

// Re-export error types
pub use errors::Error;
pub use errors::FetchError;
pub use errors::Result;

//! wsexport-client - GraphQL transport and export orchestration.
//!
//! Talks to the Wealthsimple GraphQL API with a bearer token, walks every
//! cursor-paged query to exhaustion, and drives the `wsexport-core`
//! classifier over the fetched transactions to produce one BOM-prefixed CSV
//! artifact per account.

pub mod client;
pub mod models;
pub mod orchestrator;
pub mod pagination;
pub mod queries;
pub mod traits;

pub use client::{GraphqlClient, DEFAULT_API_URL};
pub use orchestrator::{ExportOrchestrator, ExportScope, TimeFrame};
pub use traits::ExportApiClient;

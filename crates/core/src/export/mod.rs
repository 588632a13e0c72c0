//! Export module - grouping, CSV serialization, and artifact naming.

mod artifact;
mod csv_serializer;
mod grouper;

pub use artifact::{build_file_name, ExportArtifact};
pub use csv_serializer::serialize_rows;
pub use grouper::{group_by_account, AccountGroup};

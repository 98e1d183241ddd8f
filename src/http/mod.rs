//! HTTP protocol layer module
//!
//! Response construction, kept apart from file loading and connection handling.

pub mod response;

// Re-export commonly used items
pub use response::{build_500_response, build_artifact_response};

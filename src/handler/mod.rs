//! Request handler module
//!
//! There is no routing: one handler answers every request with the artifact.

pub mod artifact;

// Re-export main entry point
pub use artifact::handle_request;

//! HTTP protocol layer module
//!
//! Content-type lookup and response builders, decoupled from the request
//! resolution logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_file_response};

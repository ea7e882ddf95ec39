//! HTTP protocol layer module
//!
//! Protocol-level response builders shared by the router and the debug API.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_405_response, build_413_response, build_health_response};

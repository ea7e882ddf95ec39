// Debug API response types

use serde::Serialize;
use std::collections::BTreeMap;

/// Successful echo payload returned by the debug endpoint
#[derive(Debug, Serialize)]
pub struct DebugEcho {
    pub success: bool,
    pub message: String,
    pub url: String,
    pub method: String,
    pub timestamp: String,
    pub headers: BTreeMap<String, String>,
}

/// Error payload returned when echo construction fails
#[derive(Debug, Serialize)]
pub struct DebugError {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

// API module entry
// Diagnostic echo endpoint

mod debug;
mod response;
mod types;

pub use debug::handle_debug;
pub use response::preflight_response;

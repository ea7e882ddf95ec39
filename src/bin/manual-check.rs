//! Console-only manual test script.
//!
//! Prints the steps for a human to start the server locally and verify the
//! root health endpoint, then exits. Performs no automated checks.

fn main() {
    println!("Manual check for the debug echo server");
    println!("=======================================");
    println!();
    println!("1. Start the server in another terminal:");
    println!();
    println!("     cargo run");
    println!();
    println!("   Host/port come from config.toml or SERVER_* environment");
    println!("   variables (default 127.0.0.1:8081).");
    println!();
    println!("2. Verify the root health endpoint:");
    println!();
    println!("     curl http://127.0.0.1:8081/");
    println!();
    println!("   Expected response: {{\"status\":\"ok\"}}");
    println!();
    println!("3. Optionally exercise the echo endpoint:");
    println!();
    println!("     curl http://127.0.0.1:8081/api/debug");
    println!();
    println!("   Expected: a JSON body with \"success\":true echoing the");
    println!("   request URL, method, timestamp, and headers.");
}

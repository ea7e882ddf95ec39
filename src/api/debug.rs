//! Debug echo endpoint
//!
//! Reflects the incoming request's URL, method, and headers back as JSON so a
//! client developer can confirm that request routing reaches the server.

use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderMap, HOST};
use hyper::{Method, Response, StatusCode, Uri};
use std::collections::BTreeMap;

use super::response::{cors_json_response, json_response};
use super::types::{DebugEcho, DebugError};
use crate::config::HttpConfig;
use crate::logger;

/// Handle GET/POST on the debug route (POST shares the GET logic).
///
/// Any failure while assembling the payload is caught here and rendered as a
/// 500 JSON error. The error path intentionally carries no CORS headers,
/// mirroring the asymmetry of the original endpoint.
pub fn handle_debug(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    http: &HttpConfig,
) -> Response<Full<Bytes>> {
    let url = request_url(uri, headers);
    logger::log_debug_request(&url);

    match build_echo(&url, method, headers) {
        Ok(echo) => cors_json_response(StatusCode::OK, &echo, http),
        Err(message) => {
            logger::log_debug_failure(&message);
            let error = DebugError {
                error: "Debug API error".to_string(),
                message,
                timestamp: now_iso8601(),
            };
            json_response(StatusCode::INTERNAL_SERVER_ERROR, &error)
        }
    }
}

/// Assemble the echo payload.
///
/// Fails when a header value is not valid UTF-8; that failure surfaces as the
/// endpoint's 500 error path.
fn build_echo(url: &str, method: &Method, headers: &HeaderMap) -> Result<DebugEcho, String> {
    let mut echoed = BTreeMap::new();
    for (name, value) in headers {
        // Duplicate names resolve last-write-wins
        let value = value.to_str().map_err(|e| error_message(&e))?;
        echoed.insert(name.as_str().to_string(), value.to_string());
    }

    Ok(DebugEcho {
        success: true,
        message: "API routing is working!".to_string(),
        url: url.to_string(),
        method: method.as_str().to_string(),
        timestamp: now_iso8601(),
        headers: echoed,
    })
}

/// Reconstruct the request URL as the client addressed it.
///
/// Origin-form request targets carry only a path, so the Host header supplies
/// the authority.
fn request_url(uri: &Uri, headers: &HeaderMap) -> String {
    if uri.authority().is_some() {
        return uri.to_string();
    }

    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    match headers.get(HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => format!("http://{host}{path_and_query}"),
        None => uri.to_string(),
    }
}

/// ISO-8601 timestamp captured at response-construction time
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render an error's message, falling back when it displays empty
fn error_message(e: &impl std::fmt::Display) -> String {
    let message = e.to_string();
    if message.is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::header::HeaderValue;

    fn test_http_config() -> HttpConfig {
        Config::load_from("no-such-config-file")
            .expect("defaults should load")
            .http
    }

    fn request_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("localhost:8081"));
        headers.insert("x-test", HeaderValue::from_static("abc"));
        headers.insert("authorization", HeaderValue::from_static("Bearer x"));
        headers
    }

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.expect("body").to_bytes();
        serde_json::from_slice(&bytes).expect("valid JSON body")
    }

    #[test]
    fn test_build_echo_reflects_request() {
        let headers = request_headers();
        let echo = build_echo("http://localhost:8081/api/debug", &Method::GET, &headers)
            .expect("echo should build");
        assert!(echo.success);
        assert_eq!(echo.message, "API routing is working!");
        assert_eq!(echo.url, "http://localhost:8081/api/debug");
        assert_eq!(echo.method, "GET");
        assert_eq!(echo.headers["x-test"], "abc");
        assert_eq!(echo.headers["authorization"], "Bearer x");
    }

    #[test]
    fn test_build_echo_fails_on_opaque_header_value() {
        let mut headers = request_headers();
        headers.insert(
            "x-binary",
            HeaderValue::from_bytes(&[0xF0, 0x9F]).expect("opaque bytes are legal"),
        );
        let err = build_echo("http://localhost:8081/api/debug", &Method::GET, &headers)
            .expect_err("opaque header value should fail");
        assert!(!err.is_empty());
    }

    #[test]
    fn test_request_url_from_host_header() {
        let uri: Uri = "/api/debug".parse().expect("valid uri");
        let url = request_url(&uri, &request_headers());
        assert_eq!(url, "http://localhost:8081/api/debug");
    }

    #[test]
    fn test_request_url_without_host_header() {
        let uri: Uri = "/api/debug".parse().expect("valid uri");
        let url = request_url(&uri, &HeaderMap::new());
        assert_eq!(url, "/api/debug");
    }

    #[test]
    fn test_timestamp_parses_as_rfc3339() {
        let ts = now_iso8601();
        chrono::DateTime::parse_from_rfc3339(&ts).expect("timestamp should parse");
    }

    #[test]
    fn test_error_message_fallback() {
        struct Empty;
        impl std::fmt::Display for Empty {
            fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Ok(())
            }
        }
        assert_eq!(error_message(&Empty), "Unknown error");
    }

    #[tokio::test]
    async fn test_get_returns_200_with_cors() {
        let uri: Uri = "/api/debug".parse().expect("valid uri");
        let resp = handle_debug(&Method::GET, &uri, &request_headers(), &test_http_config());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(resp.headers()["Content-Type"], "application/json");

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["url"], "http://localhost:8081/api/debug");
        assert_eq!(body["method"], "GET");
        assert_eq!(body["headers"]["authorization"], "Bearer x");
        assert_eq!(body["headers"]["x-test"], "abc");
        let ts = body["timestamp"].as_str().expect("timestamp string");
        chrono::DateTime::parse_from_rfc3339(ts).expect("timestamp should parse");
    }

    #[tokio::test]
    async fn test_post_matches_get_shape() {
        let uri: Uri = "/api/debug".parse().expect("valid uri");
        let resp = handle_debug(&Method::POST, &uri, &request_headers(), &test_http_config());
        assert_eq!(resp.status(), 200);

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "API routing is working!");
        assert_eq!(body["method"], "POST");
    }

    #[tokio::test]
    async fn test_opaque_header_yields_500_without_cors() {
        let mut headers = request_headers();
        headers.insert(
            "x-binary",
            HeaderValue::from_bytes(&[0xF0, 0x9F]).expect("opaque bytes are legal"),
        );
        let uri: Uri = "/api/debug".parse().expect("valid uri");
        let resp = handle_debug(&Method::GET, &uri, &headers, &test_http_config());
        assert_eq!(resp.status(), 500);
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());

        let body = body_json(resp).await;
        assert_eq!(body["error"], "Debug API error");
        assert!(!body["message"].as_str().expect("message string").is_empty());
        let ts = body["timestamp"].as_str().expect("timestamp string");
        chrono::DateTime::parse_from_rfc3339(ts).expect("timestamp should parse");
    }
}

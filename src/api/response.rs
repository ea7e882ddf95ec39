// API response utility functions module

use crate::config::HttpConfig;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response without CORS headers
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build JSON response carrying the configured CORS headers
pub fn cors_json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    http: &HttpConfig,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            // Degrades to the plain JSON error path, without CORS headers
            return json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &serde_json::json!({"error":"Internal server error"}),
            );
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", http.cors_allow_origin.as_str())
        .header("Access-Control-Allow-Methods", http.cors_allow_methods.as_str())
        .header("Access-Control-Allow-Headers", http.cors_allow_headers.as_str())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build CORS preflight response: 200, empty body, no Content-Type
pub fn preflight_response(http: &HttpConfig) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", http.cors_allow_origin.as_str())
        .header("Access-Control-Allow-Methods", http.cors_allow_methods.as_str())
        .header("Access-Control-Allow-Headers", http.cors_allow_headers.as_str())
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build preflight response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_http_config() -> HttpConfig {
        Config::load_from("no-such-config-file")
            .expect("defaults should load")
            .http
    }

    #[test]
    fn test_cors_json_response_headers() {
        let http = test_http_config();
        let resp = cors_json_response(StatusCode::OK, &serde_json::json!({"ok": true}), &http);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            resp.headers()["Access-Control-Allow-Methods"],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            resp.headers()["Access-Control-Allow-Headers"],
            "Content-Type, Authorization"
        );
    }

    #[test]
    fn test_preflight_has_cors_but_no_content_type() {
        let http = test_http_config();
        let resp = preflight_response(&http);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert!(resp.headers().get("Content-Type").is_none());
    }

    #[test]
    fn test_plain_json_response_has_no_cors() {
        let resp = json_response(StatusCode::OK, &serde_json::json!({"ok": true}));
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }
}

//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body-size
//! guard, and dispatch to health endpoints and the debug API.

use crate::api;
use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::header::{HeaderValue, SERVER};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let mut response = route_request(&req, &state);

    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.as_str().to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = http_version_label(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .unwrap_or(0)
            .try_into()
            .unwrap_or(usize::MAX);
        entry.user_agent = user_agent;
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
fn route_request<B>(req: &Request<B>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let method = req.method();
    let path = req.uri().path();

    // 1. Method gate: only GET/POST/HEAD/OPTIONS are served
    if !matches!(
        *method,
        Method::GET | Method::POST | Method::HEAD | Method::OPTIONS
    ) {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return http::build_405_response();
    }

    // 2. Content-Length guard
    if let Some(resp) = check_body_size(req, state.config.http.max_body_size) {
        return resp;
    }

    // 3. Dispatch. HEAD is served for the health endpoints (hyper strips the
    // body on the wire) and falls through to 404 elsewhere.
    match (method, path) {
        (&Method::OPTIONS, "/api/debug") => api::preflight_response(&state.config.http),
        (&Method::GET | &Method::POST, "/api/debug") => {
            api::handle_debug(method, req.uri(), req.headers(), &state.config.http)
        }
        (&Method::GET | &Method::HEAD, p) if is_health_path(p, state) => {
            http::build_health_response("ok")
        }
        _ => http::build_404_response(),
    }
}

fn is_health_path(path: &str, state: &Arc<AppState>) -> bool {
    let health = &state.config.routes.health;
    health.enabled && (path == health.liveness_path || path == health.readiness_path)
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    let size_str = content_length.to_str().ok()?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

const fn http_version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

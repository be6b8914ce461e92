//! Request handling entry point.
//!
//! Runs each request through the resolution pipeline: default-document
//! substitution, alias lookup for extensionless paths, the advisory
//! extension check, then the file read. The request method is never
//! inspected and the body is never read; every method behaves as a GET-style
//! path lookup.

use crate::config::AppState;
use crate::handler::{files, resolve};
use crate::logger::{self, AccessLogEntry};
use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling.
///
/// Infallible by construction: the pipeline always produces exactly one
/// response, so no error ever reaches the transport layer.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    // Raw request target; a query string stays part of the path verbatim.
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), |pq| pq.as_str().to_string());

    let response = respond(&target, &state).await;

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: Local::now(),
            method: req.method().to_string(),
            target,
            http_version: version_label(req.version()),
            status: response.status().as_u16(),
            body_bytes: response.body().size_hint().exact().unwrap_or(0),
            referer: header_value(&req, "referer"),
            user_agent: header_value(&req, "user-agent"),
            request_time_us: u64::try_from(started.elapsed().as_micros())
                .unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Run one request target through the resolution pipeline.
///
/// Separated from [`handle_request`] so the pipeline is drivable with a bare
/// target string.
pub async fn respond(target: &str, state: &AppState) -> Response<Full<Bytes>> {
    let routes = &state.config.routes;

    // 1. Root path falls back to the default document.
    let mut path = resolve::resolve_path(target, &routes.default_document);
    let mut extension = resolve::file_extension(&path);

    // 2. Extensionless paths may be aliased to a concrete file.
    if extension.is_empty() {
        if let Some(file) = resolve::lookup_alias(&path, &routes.aliases) {
            path = file.to_string();
            extension = resolve::file_extension(&path);
        }
    }

    // 3. Advisory extension check. Logged only; the request proceeds.
    if !extension.is_empty() && !routes.allowed_extensions.iter().any(|a| *a == extension) {
        logger::log_warning(&format!("Not supported file extension: {extension}"));
    }

    // 4. Read from disk and answer 200 or 404.
    files::serve(&state.base_dir, &path, &extension).await
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

const fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

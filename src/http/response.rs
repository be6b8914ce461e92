//! HTTP response building module
//!
//! Builders for the two responses the server produces, decoupled from the
//! resolution logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response carrying file bytes with the given content type.
pub fn build_file_response(content: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 404 Not Found response.
///
/// Every filesystem failure collapses into this one response; the body text
/// is fixed.
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("File not found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("File not found")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response_headers() {
        let response = build_file_response(b"<h1>hi</h1>".to_vec(), "text/html");
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Type").unwrap(), "text/html");
        assert_eq!(response.headers().get("Content-Length").unwrap(), "11");
    }

    #[test]
    fn test_404_response_shape() {
        let response = build_404_response();
        assert_eq!(response.status(), 404);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/plain"
        );
    }
}

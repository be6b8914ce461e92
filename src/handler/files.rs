//! File responder.
//!
//! Maps the working path into the base directory, reads the file
//! asynchronously and builds the response. Every read failure, whatever the
//! cause, answers 404.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Read the file for the working path and answer 200 or 404.
///
/// The path is joined onto the base directory and normalized lexically
/// before the read. Missing file, permission error and is-a-directory all
/// collapse into the same not-found response.
pub async fn serve(base_dir: &Path, path: &str, extension: &str) -> Response<Full<Bytes>> {
    let file_path = normalize(&base_dir.join(path.trim_start_matches('/')));

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime::content_type(extension);
            http::build_file_response(content, content_type)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            http::build_404_response()
        }
    }
}

/// Lexical path normalization: collapses `.` segments, duplicate separators
/// and resolves `..` against the preceding segment, flooring at the
/// filesystem root. The filesystem is never consulted.
///
/// `..` segments are allowed to step above the base directory; resolved
/// paths are not confined to it.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

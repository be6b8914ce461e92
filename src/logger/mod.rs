//! Logger module
//!
//! Logging utilities for the server:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - Optional file-based output

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to the info/access stream
fn write_info(message: &str) {
    match writer::get() {
        Some(sinks) => sinks.access(message),
        None => println!("{message}"),
    }
}

/// Write to the error stream
fn write_error(message: &str) {
    match writer::get() {
        Some(sinks) => sinks.error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("File server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Default document: {}",
        config.routes.default_document
    ));
    write_info(&format!(
        "Route aliases: {}",
        config.routes.aliases.len()
    ));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

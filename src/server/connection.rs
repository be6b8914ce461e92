// Connection handling module
// Serves one TCP connection per spawned task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve a connection in a spawned task.
///
/// Each connection runs independently; a failure inside one task never
/// reaches the accept loop or other in-flight requests. There is no
/// connection limit and no timeout: a hung read holds only its own request
/// open.
pub fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    if state.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, peer_addr, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

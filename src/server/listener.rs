// Listener module
// Builds the single TCP listener the request handler sits behind

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind a non-blocking TCP listener on `addr`.
///
/// The socket is built through socket2 so `SO_REUSEADDR` is set before the
/// bind: a quickly restarted server may rebind a port whose previous
/// incarnation is still in TIME_WAIT.
pub fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    // Tokio drives the socket through the poller; it must not block
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    TcpListener::from_std(socket.into())
}

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::Router;
use crate::server::spawner::Spawner;

/// Pending-connection queue length passed to `listen`.
pub const LISTEN_BACKLOG: i32 = 16;

/// Creates a listening socket on all IPv4 interfaces with `SO_REUSEADDR`, so a
/// restart does not fail while the old socket sits in TIME_WAIT.
pub fn bind(port: u16) -> std::io::Result<TcpListener> {
    bind_addr(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}

pub fn bind_addr(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Binds the configured port and serves until the process is killed.
pub async fn run<S: Spawner>(cfg: Arc<Config>, spawner: S) -> anyhow::Result<()> {
    let listener = bind(cfg.port)?;
    info!("Agartha Online HTTP server listening on port {}", cfg.port);
    info!("Serving latest screenshot from {}", cfg.screenshot_dir.display());

    serve(listener, Arc::new(Router::new(cfg)), spawner).await;
    Ok(())
}

/// The accept loop. Accept failures are logged and never end the loop.
pub async fn serve<S: Spawner>(listener: TcpListener, router: Arc<Router>, spawner: S) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        spawner.spawn(async move {
            Connection::new(socket, router).run().await;
        });
    }
}

use std::sync::Arc;

use agartha::config::Config;
use agartha::server::{self, DetachedSpawner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Arc::new(Config::load());

    // Serves until the process is killed; only a setup failure returns.
    server::listener::run(cfg, DetachedSpawner).await
}

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::fs::StaticFiles;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let files = cfg.static_files()?;
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        files.root().display()
    );

    serve(listener, files, cfg.server.read_limit).await
}

/// Accept loop. Each connection is handled to completion before the next
/// one is accepted; a failing connection is logged and dropped.
pub async fn serve(
    listener: TcpListener,
    files: StaticFiles,
    read_limit: usize,
) -> anyhow::Result<()> {
    let files = Arc::new(files);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, Arc::clone(&files), read_limit);
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}

//! Accept loop: one isolated task per accepted connection.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket. Bind failures are fatal to startup.
pub async fn bind(cfg: &Config) -> Result<TcpListener> {
    TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .with_context(|| format!("failed to bind port {}", cfg.port))
}

/// Dispatches accepted connections until the process is shut down.
///
/// Each connection runs its pipeline in its own task, so a slow or
/// misbehaving client never stalls the listener or other connections, and a
/// failing connection task never takes the listener down.
pub async fn serve(listener: TcpListener, root: PathBuf) -> Result<()> {
    let root = Arc::new(root);
    let mut hit: u64 = 0;

    loop {
        match listener.accept().await {
            Ok((socket, peer)) => {
                hit += 1;
                debug!("accepted connection {hit} from {peer}");

                let root = Arc::clone(&root);
                tokio::spawn(async move {
                    let mut conn = Connection::new(socket, root, hit);
                    if let Err(e) = conn.run().await {
                        error!("connection error from {peer}: {e}");
                    }
                });
            }
            Err(e) => {
                error!("accept failed: {e}");
            }
        }
    }
}

pub async fn run(cfg: &Config) -> Result<()> {
    let listener = bind(cfg).await?;
    info!("listening on 0.0.0.0:{}, serving {}", cfg.port, cfg.root.display());
    serve(listener, cfg.root.clone()).await
}

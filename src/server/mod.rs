/// HTTP surface: the same render function as the desktop UI, exposed as JSON.
pub mod routes;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::view::Dashboard;

/// Bind `host:port` and serve until the process is stopped.
pub async fn serve(dashboard: Arc<Dashboard>, host: IpAddr, port: u16) -> Result<()> {
    let addr = SocketAddr::new(host, port);
    let app = routes::create_router(dashboard);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Dashboard API running on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    log::info!("Server shutdown");
    Ok(())
}

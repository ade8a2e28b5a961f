mod handlers;
mod routes;

pub use routes::create_router;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::models::WindowConfig;

/// Shared application state
pub struct AppState {
    pub window: WindowConfig,
}

impl AppState {
    pub fn new(window: WindowConfig) -> Self {
        Self { window }
    }
}

/// Run the API server
pub async fn run_server(addr: SocketAddr, window: WindowConfig) -> Result<()> {
    tracing::info!(
        "Bookable window {}-{}, business day {}..{} min",
        window.bookable_start,
        window.bookable_end,
        window.business_start_minutes,
        window.business_end_minutes
    );

    let state = Arc::new(AppState::new(window));
    let app = create_router(state);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

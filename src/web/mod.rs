//! Browser dashboard: the layout as a page, the two charts as JSON endpoints.
//!
//! ```text
//!   GET /                                  page (controls + Plotly)
//!   GET /health                            liveness
//!   GET /api/layout                        DashboardLayout
//!   GET /api/charts/site-success           ?site=
//!   GET /api/charts/payload-outcome        ?site=&low=&high=
//! ```

pub mod handlers;
pub mod page;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;

use crate::data::model::LaunchTable;
use crate::layout::DashboardLayout;

/// Shared, read-only handler state.
pub struct WebState {
    pub table: LaunchTable,
    pub layout: DashboardLayout,
}

impl WebState {
    pub fn new(table: LaunchTable) -> Self {
        let layout = DashboardLayout::new(&table);
        Self { table, layout }
    }
}

/// Create the dashboard router
pub fn create_router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/api/layout", get(handlers::layout))
        .route("/api/charts/site-success", get(handlers::site_success))
        .route("/api/charts/payload-outcome", get(handlers::payload_outcome))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(table: LaunchTable, addr: &str) -> Result<()> {
    let state = Arc::new(WebState::new(table));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving dashboard")?;

    log::info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Ctrl-C received, shutting down"),
        Err(e) => {
            log::warn!("Cannot listen for Ctrl-C ({e}); serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

//! Scrape endpoint serving the shop metrics in Prometheus text format.

use crate::domain::errors::ExporterError;
use crate::infrastructure::observability::metrics::Metrics;
use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handle to the running metrics listener
pub struct MetricsServer {
    local_addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MetricsServer {
    /// Bind the listener and start serving in the background.
    ///
    /// Binding happens before this returns, so a port conflict surfaces here
    /// rather than inside the spawned task.
    pub async fn start(addr: SocketAddr, metrics: Metrics) -> Result<Self, ExporterError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ExporterError::ListenerBind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ExporterError::ListenerBind { addr, source })?;

        let app = router(metrics);
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Metrics server stopped: {}", e);
            }
        });

        info!("Metrics listener bound on {}", local_addr);
        Ok(Self { local_addr, handle })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }
}

pub fn router(metrics: Metrics) -> Router {
    Router::new()
        .route("/", get(scrape))
        .route("/metrics", get(scrape))
        .with_state(metrics)
}

async fn scrape(State(metrics): State<Metrics>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
        metrics.render(),
    )
}

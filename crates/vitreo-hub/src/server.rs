//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::HubConfig;
use crate::error::{HubError, HubResult};
use std::sync::Arc;
use tokio::net::TcpListener;
use vitreo_catalog::{CatalogIntegrity, InMemoryCatalog, ReferenceCatalog};

/// Vitreo Hub server
pub struct Server {
    config: HubConfig,
    catalog: Arc<InMemoryCatalog>,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: HubConfig) -> HubResult<Self> {
        let catalog = InMemoryCatalog::builtin();

        // Findings are logged only; dangling relations are skipped when read
        CatalogIntegrity::check(&catalog).log();

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
        })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> HubResult<()> {
        let addr = self.config.server.listen_addr;

        let state = AppState::new(self.catalog.clone(), self.config.site.clone());
        let app = create_router(state, &self.config.server);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Vitreo Hub listening on {}", addr);
        tracing::info!(
            innovations = self.catalog.innovations().len(),
            techniques = self.catalog.techniques().len(),
            timeline_events = self.catalog.timeline_events().len(),
            "Catalog loaded"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| HubError::Server(e.to_string()))?;

        tracing::info!("Vitreo Hub shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}

//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;

use crate::api::routes::create_router;
use crate::config::{DispatchSettings, Environment, Settings};
use crate::services::DispatchService;
use crate::services::pushover::PushoverProvider;
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    dispatch_settings: DispatchSettings,
}

impl Server {
    /// Create a new server with the given settings and dispatch credentials
    pub fn new(settings: Settings, dispatch_settings: DispatchSettings) -> Self {
        Self {
            settings,
            dispatch_settings,
        }
    }

    /// Start the server and run until shutdown signal
    ///
    /// Binds to the configured address, serves the router, and shuts down
    /// gracefully on Ctrl+C or SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            request_timeout = %self.settings.server.request_timeout,
            "Server configuration loaded"
        );

        tracing::info!(
            profile = %self.settings.dispatch.profile.as_str(),
            api_url = %self.settings.dispatch.api_url,
            credentials_configured = %self.dispatch_settings.has_credentials(),
            "Dispatch configuration loaded"
        );

        if !self.dispatch_settings.has_credentials() {
            // Not fatal: the dispatcher reports the missing variables per
            // invocation, matching a credential-less deployment's behavior.
            tracing::warn!(
                "Dispatch credentials missing; every dispatch will fail until they are set"
            );
        }

        let provider = PushoverProvider::new(self.settings.dispatch.api_url.clone());
        let dispatcher = DispatchService::new(self.dispatch_settings, std::sync::Arc::new(provider));
        let state = AppState::new(dispatcher);
        tracing::info!("Application state created");

        let router = create_router(state).layer(TimeoutLayer::new(Duration::from_secs(
            self.settings.server.request_timeout,
        )));
        tracing::info!("Router configured");

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// This function returns when either signal is received, allowing
/// the server to perform graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

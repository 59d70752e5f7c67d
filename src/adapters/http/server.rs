use crate::adapters::http::router::{create_router, AppState};
use crate::core::service::{ConversionService, AVAILABLE_ENDPOINTS};
use crate::domain::ports::{ConfigProvider, SystemClock};
use crate::utils::error::{AppError, Result};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct Server {
    router: Router,
    address: String,
}

impl Server {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let service = ConversionService::new(Arc::new(SystemClock), config.max_batch_size());
        Self::with_service(service, config)
    }

    pub fn with_service<C: ConfigProvider>(service: ConversionService, config: &C) -> Self {
        tracing::debug!("Batch limit set to {}", service.max_batch_size());
        Self {
            router: create_router(AppState::new(service), config),
            address: config.bind_address(),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// 綁定設定的位址並執行，直到收到 Ctrl-C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.address).await?;
        self.run_with_listener(listener, shutdown_signal()).await
    }

    pub async fn run_with_listener<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!("🚀 Server listening on http://{}", local_addr);
        tracing::info!("📚 Documentation: http://{}/api", local_addr);
        for endpoint in AVAILABLE_ENDPOINTS {
            tracing::debug!("🔗 Endpoint available: {}", endpoint);
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::ServerError {
                message: e.to_string(),
            })?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

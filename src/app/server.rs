use crate::adapters::http;
use crate::core::resolver::Resolver;
use crate::core::CafeCatalog;
use crate::utils::error::{CafeError, Result};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct CafeServer<C: CafeCatalog + 'static> {
    resolver: Arc<Resolver<C>>,
}

impl<C: CafeCatalog + 'static> CafeServer<C> {
    pub fn new(resolver: Resolver<C>) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    pub fn router(&self) -> Router {
        http::router(Arc::clone(&self.resolver))
    }

    pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
        TcpListener::bind(addr)
            .await
            .map_err(|e| CafeError::ServerError {
                message: format!("failed to bind {}: {}", addr, e),
            })
    }

    /// Bind `addr` and serve until Ctrl-C.
    pub async fn run(self, addr: SocketAddr) -> Result<()> {
        let listener = Self::bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!("Listening on http://{}{}", local_addr, http::CAFE_PATH);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| CafeError::ServerError {
                message: e.to_string(),
            })?;

        tracing::info!("Server on {} stopped", local_addr);
        Ok(())
    }
}

pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

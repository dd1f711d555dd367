//! HTTP server hosting the router.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// HTTP server bound to a socket, serving until cancelled.
pub struct HttpServer {
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
}

impl HttpServer {
    /// Bind the listener.
    ///
    /// # Errors
    ///
    /// Returns `HttpServerError::BindFailed` if the address cannot be bound.
    pub async fn bind(
        addr: SocketAddr,
        router: Router,
        cancel: CancellationToken,
    ) -> Result<Self, HttpServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| HttpServerError::BindFailed(addr, e.to_string()))?;

        Ok(Self {
            listener,
            router,
            cancel,
        })
    }

    /// Address actually bound (useful when binding port 0).
    ///
    /// # Errors
    ///
    /// Returns `HttpServerError::ServerFailed` if the socket address cannot be read.
    pub fn local_addr(&self) -> Result<SocketAddr, HttpServerError> {
        self.listener
            .local_addr()
            .map_err(|e| HttpServerError::ServerFailed(e.to_string()))
    }

    /// Serve requests until the cancellation token fires, then drain.
    ///
    /// # Errors
    ///
    /// Returns `HttpServerError::ServerFailed` if the server stops with an I/O error.
    pub async fn run(self) -> Result<(), HttpServerError> {
        if let Ok(addr) = self.listener.local_addr() {
            tracing::info!(addr = %addr, "HTTP server listening");
        }

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(self.cancel.cancelled_owned())
            .await
            .map_err(|e| HttpServerError::ServerFailed(e.to_string()))?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve until `shutdown` resolves, then cancel and drain within `grace`.
    ///
    /// Returns as soon as the server stops by itself, without waiting for
    /// `shutdown`, so a serve failure is never masked by a pending signal.
    ///
    /// # Errors
    ///
    /// Returns `HttpServerError::ServerFailed` if serving fails and
    /// `HttpServerError::ShutdownTimedOut` if draining exceeds `grace`.
    pub async fn run_until<F>(self, shutdown: F, grace: Duration) -> Result<(), HttpServerError>
    where
        F: Future<Output = ()>,
    {
        let cancel = self.cancel.clone();
        let mut task = tokio::spawn(self.run());

        tokio::select! {
            () = shutdown => {}
            joined = &mut task => return flatten(joined),
        }

        cancel.cancel();
        tracing::info!(timeout_secs = grace.as_secs(), "Graceful shutdown started");

        tokio::time::timeout(grace, task)
            .await
            .map_err(|_| HttpServerError::ShutdownTimedOut(grace))
            .and_then(flatten)
    }
}

fn flatten(
    joined: Result<Result<(), HttpServerError>, tokio::task::JoinError>,
) -> Result<(), HttpServerError> {
    joined.map_err(|e| HttpServerError::ServerFailed(e.to_string()))?
}

/// HTTP server errors.
#[derive(Debug, thiserror::Error)]
pub enum HttpServerError {
    /// Failed to bind to the address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(SocketAddr, String),

    /// Server error.
    #[error("server error: {0}")]
    ServerFailed(String),

    /// In-flight requests did not drain in time.
    #[error("graceful shutdown timed out after {0:?}")]
    ShutdownTimedOut(Duration),
}

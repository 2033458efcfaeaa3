use std::{future::Future, io, net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{
    article::ArticleStorer,
    config::ServerConfig,
    http::routes::{router, AppState},
};

pub struct HttpServer {
    config: ServerConfig,
    store: Arc<dyn ArticleStorer>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, store: Arc<dyn ArticleStorer>) -> Self {
        Self { config, store }
    }

    pub async fn bind(&self) -> io::Result<TcpListener> {
        let bind_addr = self.config.bind_addr();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("News server listening on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    pub async fn run(self) -> io::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }

    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        let app = router(AppState::new(self.store));

        info!("");
        info!("Usage:");
        info!(
            "   curl -X POST -H 'content-type: application/json' -d '{{\"author\":\"A\",\"title\":\"T\",\"summary\":\"S\",\"content\":\"C\",\"tags\":[\"x\"],\"source\":\"https://e.org\"}}' http://{}/articles",
            addr
        );
        info!("   curl http://{}/articles", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("News server stopped");
        Ok(())
    }
}

pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}

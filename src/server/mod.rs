pub mod api;

use std::error::Error;
use std::net::SocketAddr;

use log::info;

pub use api::AppState;

pub struct Server {
    addr: SocketAddr,
    state: AppState,
}

impl Server {
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self { addr, state }
    }

    /// Bind and serve until the process is terminated.
    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::router(self.state);
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("HTTP server listening on http://{}", self.addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}

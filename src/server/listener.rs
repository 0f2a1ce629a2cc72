use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::app::App;
use crate::http::connection::Connection;

/// Accept loop: one task per connection.
///
/// Neither a failed accept nor a failing connection stops the loop.
pub async fn run(app: Arc<App>, listener: TcpListener) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let app = Arc::clone(&app);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, app);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

//! HTTP surface: axum routes over the command handlers.

pub mod error;
pub mod routes;

pub use routes::{router, ApiState, REJECTED_ROWS_HEADER};

use tokio::net::TcpListener;
use tracing::info;

use crate::Result;

/// Serve the API on an already-bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, state: ApiState) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("HTTP API listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("HTTP API stopped");
    Ok(())
}

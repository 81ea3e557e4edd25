use crate::launcher;
use crate::resolver::ExecutablePath;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info};
use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::thread;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

pub const PORT: u16 = 8765;
pub const POPUP_STATUS: &str = "Ente Auth popup launched";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, PORT))
}

pub fn router(path: Arc<ExecutablePath>) -> Router {
    Router::new()
        .route("/popup", get(popup_handler))
        .with_state(path)
}

/// Reports that a launch was attempted; the outcome only goes to the log.
async fn popup_handler(
    State(path): State<Arc<ExecutablePath>>,
) -> (StatusCode, Json<StatusResponse>) {
    let _ = launcher::launch_logged(&path);
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: POPUP_STATUS.to_string(),
        }),
    )
}

pub async fn serve(listener: TcpListener, path: Arc<ExecutablePath>) -> std::io::Result<()> {
    axum::serve(listener, router(path)).await
}

/// axum's accept loop backs off with `tokio::time::sleep`, so timers must be enabled.
fn endpoint_runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Runs the endpoint on its own thread. It is never joined; it ends with the process.
pub fn spawn_background(path: Arc<ExecutablePath>) -> std::io::Result<()> {
    let runtime = endpoint_runtime()?;

    thread::Builder::new()
        .name("popup-endpoint".to_string())
        .spawn(move || {
            runtime.block_on(async move {
                let addr = bind_addr();
                let listener = match TcpListener::bind(addr).await {
                    Ok(listener) => listener,
                    Err(e) => {
                        error!("Failed to bind {}: {}", addr, e);
                        return;
                    }
                };
                info!("Listening on http://{}/popup", addr);
                if let Err(e) = serve(listener, path).await {
                    error!("HTTP server error: {}", e);
                }
            });
        })?;

    Ok(())
}

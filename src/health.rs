use axum::{Router, routing::get};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const LIVENESS_BODY: &str = "mediagrab is running";

pub fn router() -> Router {
    Router::new().route("/", get(|| async { LIVENESS_BODY }))
}

/// Serve the liveness endpoint until `shutdown` fires. Bind or serve errors
/// are logged; the bot keeps running without the endpoint.
pub async fn serve(port: u16, shutdown: CancellationToken) {
    let addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr, "failed to bind health endpoint");
            return;
        }
    };
    info!(addr, "health endpoint listening");

    let server = axum::serve(listener, router()).with_graceful_shutdown(shutdown.cancelled_owned());
    if let Err(e) = server.await {
        error!(error = %e, "health endpoint server error");
    }
}

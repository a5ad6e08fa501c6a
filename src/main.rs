use dotenvy::dotenv;
use servly::logging::init_tracing;
use servly::metrics::{init_metrics, metrics_app};
use servly::router::init_router;
use servly::state::init_app_state;
use servly_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state();

    if state.admin_config.admin_emails.is_empty() {
        info!("ADMIN_EMAILS is empty; admins come from stored roles only");
    }

    if let Some(handle) = init_metrics() {
        let metrics_addr = server_config.metrics_addr;
        tokio::spawn(async move {
            match tokio::net::TcpListener::bind(metrics_addr).await {
                Ok(listener) => {
                    info!("Metrics available at http://{}/metrics", metrics_addr);
                    if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                        error!("Metrics server stopped: {}", e);
                    }
                }
                Err(e) => error!("Failed to bind metrics server on {}: {}", metrics_addr, e),
            }
        });
    }

    let app = init_router(state.clone());

    let listener = tokio::net::TcpListener::bind(server_config.addr).await?;
    state.mark_identity_ready();
    info!("Server running on http://{}", server_config.addr);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        server_config.addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}

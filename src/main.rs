use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    fortnox_sync::{config::GatewayConfig, infra::env::EnvSecretStore},
    std::{sync::Arc, time::Duration},
    tokio::signal,
    tower::ServiceBuilder,
    tower_http::timeout::TimeoutLayer,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = GatewayConfig::from_env();
    tracing::info!(erp_base_url = %config.erp_base_url, "gateway configuration loaded");

    let state = fortnox_sync::AppState {
        config: Arc::new(config),
        secrets: Arc::new(EnvSecretStore),
    };

    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/webhook",
            post(fortnox_sync::adapters::stripe_webhook::stripe_webhook_handler),
        )
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(256 * 1024)) // invoice events carry line items, still well under this
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("listening on 0.0.0.0:3000");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

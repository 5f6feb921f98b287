use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use clearhealth::analysis::gemini::GeminiClient;
use clearhealth::api::{app_router, ApiContext};
use clearhealth::config::{self, AppConfig};
use clearhealth::core_state::CoreState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        model = %config.model,
        "{} starting v{}",
        config::APP_NAME,
        config::APP_VERSION
    );

    let client = Arc::new(GeminiClient::new(config.api_key, config.model));
    let ctx = ApiContext::new(Arc::new(CoreState::new()), client);
    let app = app_router(ctx);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.bind_addr, "dashboard available");

    let shutdown_signal = async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .expect("error while running ClearHealth");
}

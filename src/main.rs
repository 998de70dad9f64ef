use std::sync::Arc;

use finpal_api::store::client::DynamoStore;
use finpal_api::store::repository::InvestmentRepository;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up STORE_REGION, table
    // overrides, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = finpal_api::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting FinPal API in {:?} mode", config.environment);

    let store = DynamoStore::shared().await;
    let repository = Arc::new(InvestmentRepository::new(Arc::new(store)));
    let app = finpal_api::app(repository);

    // Allow tests or deployments to override port via env
    let port = std::env::var("FINPAL_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("FinPal API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::repository::InvestmentRepository;

/// Build the application router around a repository.
pub fn app(repository: Arc<InvestmentRepository>) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Investment read API
        .merge(investment_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(repository)
}

fn investment_routes() -> Router<Arc<InvestmentRepository>> {
    use handlers::investment;

    Router::new()
        .route("/api/investment/detail", post(investment::detail))
        .route("/api/investment/user/detail", post(investment::user_detail))
        .route(
            "/api/investment/summary/history",
            post(investment::summary_history),
        )
}

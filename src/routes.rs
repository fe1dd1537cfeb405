use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Root route: static landing page
        .route("/", get(home))
        // Health check
        .route("/health", get(health_check))
        // Cafe routes stay top-level: the route surface is a stable contract
        .merge(crate::api::routes::cafe_routes::cafe_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

// Handler for root
async fn home() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

//! Cafe routes (top-level public surface)

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::api::controller::cafe::CafeController;
use crate::app_state::AppState;

pub fn cafe_routes() -> Router<AppState> {
    Router::new()
        .route("/random", get(CafeController::random_cafe))
        .route("/all", get(CafeController::all_cafes))
        .route("/search", get(CafeController::search_cafes))
        .route("/add", post(CafeController::add_cafe))
        .route("/update-price/{cafe_id}", patch(CafeController::update_price))
        .route("/report-closed/{cafe_id}", delete(CafeController::report_closed))
}

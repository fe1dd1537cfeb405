use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::json;

use crate::api::dto::cafe_dto::{
    ApiKeyQuery, CafeEnvelope, CafeListEnvelope, SearchEnvelope, SearchQuery, StatusEnvelope,
    UpdatePriceQuery,
};
use crate::api::util::auth::require_api_key;
use crate::app_state::AppState;
use crate::domain::cafe::dto::cafe_add_request::CafeAddRequest;
use crate::errors::AppError;

pub struct CafeController;

impl CafeController {
    pub async fn random_cafe(
        State(state): State<AppState>,
    ) -> Result<Json<CafeEnvelope>, AppError> {
        let cafe = state.cafe_service.random_cafe().await?;

        Ok(Json(CafeEnvelope { cafe: cafe.into() }))
    }

    pub async fn all_cafes(
        State(state): State<AppState>,
    ) -> Result<Json<CafeListEnvelope>, AppError> {
        let cafes = state.cafe_service.all_cafes().await?;

        Ok(Json(CafeListEnvelope {
            cafe: cafes.into_iter().map(Into::into).collect(),
        }))
    }

    /// An unserviced location answers 200 with an error-shaped body; that
    /// quirk is part of the public contract.
    pub async fn search_cafes(
        State(state): State<AppState>,
        Query(query): Query<SearchQuery>,
    ) -> Result<Response, AppError> {
        let cafes = state.cafe_service.search_by_location(&query.loc).await?;

        if cafes.is_empty() {
            let body = json!({ "error": { "NOT FOUND": "No cafes at that location" } });
            return Ok(Json(body).into_response());
        }

        Ok(Json(SearchEnvelope {
            cafes: cafes.into_iter().map(Into::into).collect(),
        })
        .into_response())
    }

    pub async fn add_cafe(
        State(state): State<AppState>,
        Query(key): Query<ApiKeyQuery>,
        Form(payload): Form<CafeAddRequest>,
    ) -> Result<Json<StatusEnvelope>, AppError> {
        require_api_key(key.api_key.as_deref())?;

        state.cafe_service.add_cafe(payload).await?;

        Ok(Json(StatusEnvelope::success(
            "Successfully added the new cafe.",
        )))
    }

    pub async fn update_price(
        State(state): State<AppState>,
        Path(cafe_id): Path<i64>,
        Query(query): Query<UpdatePriceQuery>,
    ) -> Result<Json<StatusEnvelope>, AppError> {
        state
            .cafe_service
            .update_price(cafe_id, query.new_price)
            .await?;

        Ok(Json(StatusEnvelope::success(
            "Successfully changed the coffee price.",
        )))
    }

    /// The key check comes before the existence check, so a bad key on a
    /// missing id is still a 403.
    pub async fn report_closed(
        State(state): State<AppState>,
        Path(cafe_id): Path<i64>,
        Query(key): Query<ApiKeyQuery>,
    ) -> Result<Json<StatusEnvelope>, AppError> {
        require_api_key(key.api_key.as_deref())?;

        let cafe = state.cafe_service.remove_cafe(cafe_id).await?;

        Ok(Json(StatusEnvelope::success(format!(
            "Successfully deleted the cafe: {}",
            cafe.name
        ))))
    }
}

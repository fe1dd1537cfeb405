use std::sync::Arc;

use crate::config;
use crate::core::persistence::cafe::cafe_sqlite_repository::SqliteCafeRepository;
use crate::core::persistence::db;
use crate::domain::cafe::service::cafe_service::CafeService;

/// Shared application context, built once at startup and injected into every
/// handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub cafe_service: Arc<CafeService<SqliteCafeRepository>>,
}

pub async fn build_app_state() -> anyhow::Result<AppState> {
    let pool = db::connect(config::DATABASE_URL).await?;
    db::init_schema(&pool).await?;

    Ok(AppState {
        cafe_service: Arc::new(CafeService::new(SqliteCafeRepository::new(pool))),
    })
}

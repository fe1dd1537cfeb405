//! Connection pool and schema bootstrap.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

// Idempotent: safe to run on every startup. No migration support; the column
// set is fixed.
const CREATE_CAFE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS cafe (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT    NOT NULL UNIQUE,
    map_url        TEXT    NOT NULL,
    img_url        TEXT    NOT NULL,
    location       TEXT    NOT NULL,
    seats          TEXT    NOT NULL,
    has_toilet     INTEGER NOT NULL,
    has_wifi       INTEGER NOT NULL,
    has_sockets    INTEGER NOT NULL,
    can_take_calls INTEGER NOT NULL,
    coffee_price   TEXT
)";

pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Create the cafe table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_CAFE_TABLE).execute(pool).await?;
    info!("Cafe schema ready");

    Ok(())
}

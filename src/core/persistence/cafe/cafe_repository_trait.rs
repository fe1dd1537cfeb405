use anyhow::Result;
use async_trait::async_trait;

use super::cafe_entity::{CafeEntity, NewCafe};

/// Read/write primitives over the cafe table.
///
/// `update_price` and `delete` report a missing id as `Ok(false)`; `insert`
/// surfaces a duplicate name as the storage engine's constraint error.
#[async_trait]
pub trait CafeRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CafeEntity>>;

    async fn get_by_location(&self, location: &str) -> Result<Vec<CafeEntity>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<CafeEntity>>;

    async fn insert(&self, cafe: NewCafe) -> Result<CafeEntity>;

    async fn update_price(&self, id: i64, price: Option<String>) -> Result<bool>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::cafe_entity::{CafeEntity, NewCafe};
use super::cafe_repository_trait::CafeRepository;

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub struct SqliteCafeRepository {
    pool: SqlitePool,
}

impl SqliteCafeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeRepository for SqliteCafeRepository {
    async fn get_all(&self) -> Result<Vec<CafeEntity>> {
        let cafes = sqlx::query_as::<_, CafeEntity>(&format!(
            "SELECT {CAFE_COLUMNS} FROM cafe ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(cafes)
    }

    async fn get_by_location(&self, location: &str) -> Result<Vec<CafeEntity>> {
        let cafes = sqlx::query_as::<_, CafeEntity>(&format!(
            "SELECT {CAFE_COLUMNS} FROM cafe WHERE location = ? ORDER BY id"
        ))
        .bind(location)
        .fetch_all(&self.pool)
        .await?;

        Ok(cafes)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<CafeEntity>> {
        let cafe = sqlx::query_as::<_, CafeEntity>(&format!(
            "SELECT {CAFE_COLUMNS} FROM cafe WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cafe)
    }

    async fn insert(&self, cafe: NewCafe) -> Result<CafeEntity> {
        // Duplicate names hit the UNIQUE constraint and come back as Err.
        let inserted = sqlx::query_as::<_, CafeEntity>(&format!(
            "INSERT INTO cafe \
                 (name, map_url, img_url, location, seats, \
                  has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {CAFE_COLUMNS}"
        ))
        .bind(cafe.name)
        .bind(cafe.map_url)
        .bind(cafe.img_url)
        .bind(cafe.location)
        .bind(cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(cafe.coffee_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn update_price(&self, id: i64, price: Option<String>) -> Result<bool> {
        let result = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::db;
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps every query on the same in-memory database.
    async fn test_repo() -> SqliteCafeRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        db::init_schema(&pool).await.expect("schema");
        SqliteCafeRepository::new(pool)
    }

    fn new_cafe(name: &str, location: &str) -> NewCafe {
        NewCafe {
            name: name.into(),
            map_url: "https://maps.example.com/joe".into(),
            img_url: "https://img.example.com/joe.jpg".into(),
            location: location.into(),
            seats: "10-20".into(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: Some("$3".into()),
        }
    }

    #[tokio::test]
    async fn insert_then_get_all_round_trips_fields() {
        let repo = test_repo().await;

        let inserted = repo.insert(new_cafe("Joe's", "NYC")).await.unwrap();
        assert_eq!(inserted.name, "Joe's");
        assert!(inserted.id > 0);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![inserted]);
    }

    #[tokio::test]
    async fn duplicate_name_violates_unique_constraint() {
        let repo = test_repo().await;
        repo.insert(new_cafe("Joe's", "NYC")).await.unwrap();

        let second = repo.insert(new_cafe("Joe's", "LA")).await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn get_by_location_is_exact_match() {
        let repo = test_repo().await;
        repo.insert(new_cafe("Joe's", "NYC")).await.unwrap();
        repo.insert(new_cafe("Moe's", "NYC Downtown")).await.unwrap();

        let hits = repo.get_by_location("NYC").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Joe's");
    }

    #[tokio::test]
    async fn update_price_reports_missing_id() {
        let repo = test_repo().await;
        let cafe = repo.insert(new_cafe("Joe's", "NYC")).await.unwrap();

        assert!(repo
            .update_price(cafe.id, Some("$4".into()))
            .await
            .unwrap());
        let reread = repo.get_by_id(cafe.id).await.unwrap().unwrap();
        assert_eq!(reread.coffee_price.as_deref(), Some("$4"));

        assert!(!repo.update_price(9999, Some("$4".into())).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_row_and_second_delete_misses() {
        let repo = test_repo().await;
        let cafe = repo.insert(new_cafe("Joe's", "NYC")).await.unwrap();

        assert!(repo.delete(cafe.id).await.unwrap());
        assert!(repo.get_by_id(cafe.id).await.unwrap().is_none());
        assert!(!repo.delete(cafe.id).await.unwrap());
    }
}

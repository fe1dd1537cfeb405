use rand::seq::SliceRandom;
use validator::Validate;

use crate::core::persistence::cafe::cafe_entity::CafeEntity;
use crate::core::persistence::cafe::cafe_repository_trait::CafeRepository;
use crate::domain::cafe::dto::cafe_add_request::CafeAddRequest;
use crate::errors::{database_error, AppError};

/// Application logic over the cafe table, generic over the repository so
/// tests can substitute an in-memory implementation.
pub struct CafeService<R> {
    repo: R,
}

impl<R: CafeRepository> CafeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn all_cafes(&self) -> Result<Vec<CafeEntity>, AppError> {
        self.repo.get_all().await.map_err(database_error)
    }

    /// One row, uniform over the current table, re-sampled per call.
    pub async fn random_cafe(&self) -> Result<CafeEntity, AppError> {
        let cafes = self.repo.get_all().await.map_err(database_error)?;

        cafes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| AppError::NotFound("There are no cafes yet".into()))
    }

    /// Byte-for-byte location match. An empty result is not an error here;
    /// the search route has its own empty-result contract.
    pub async fn search_by_location(&self, location: &str) -> Result<Vec<CafeEntity>, AppError> {
        self.repo
            .get_by_location(location)
            .await
            .map_err(database_error)
    }

    pub async fn add_cafe(&self, request: CafeAddRequest) -> Result<CafeEntity, AppError> {
        request
            .validate()
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        let cafe = request.into_new_cafe()?;

        // A duplicate name propagates as the storage constraint error.
        self.repo.insert(cafe).await.map_err(database_error)
    }

    pub async fn update_price(&self, id: i64, new_price: String) -> Result<(), AppError> {
        let price = if new_price.is_empty() {
            None
        } else {
            Some(new_price)
        };

        let updated = self
            .repo
            .update_price(id, price)
            .await
            .map_err(database_error)?;

        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound("Cafe with that id was not found".into()))
        }
    }

    pub async fn remove_cafe(&self, id: i64) -> Result<CafeEntity, AppError> {
        let cafe = self
            .repo
            .get_by_id(id)
            .await
            .map_err(database_error)?
            .ok_or_else(|| AppError::NotFound("Cafe with that id was not found".into()))?;

        let deleted = self.repo.delete(id).await.map_err(database_error)?;
        if !deleted {
            // Lost the race with a concurrent delete.
            return Err(AppError::NotFound("Cafe with that id was not found".into()));
        }

        Ok(cafe)
    }
}

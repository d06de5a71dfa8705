use std::sync::Arc;

use tracing::debug;

use shared_database::{Database, Repository};
use shared_models::{EntityId, RepositoryError, Stored};

use crate::models::{Rating, UpdateRatingRequest};

pub struct RatingService {
    repository: Arc<dyn Repository<Rating>>,
}

impl RatingService {
    pub fn new(database: &Database) -> Self {
        Self::with_repository(database.repository())
    }

    pub fn with_repository(repository: Arc<dyn Repository<Rating>>) -> Self {
        Self { repository }
    }

    pub async fn create_rating(&self, rating: Rating) -> Result<Stored<Rating>, RepositoryError> {
        debug!("Recording rating of {}", rating.rating);
        self.repository.create(rating).await
    }

    pub async fn get_rating(&self, rating_id: &EntityId) -> Result<Option<Stored<Rating>>, RepositoryError> {
        self.repository.find_by_id(rating_id).await
    }

    pub async fn list_ratings(&self) -> Result<Vec<Stored<Rating>>, RepositoryError> {
        self.repository.find_all().await
    }

    pub async fn update_rating(
        &self,
        rating_id: &EntityId,
        rating: Rating,
    ) -> Result<Option<Stored<Rating>>, RepositoryError> {
        self.repository.update(rating_id, rating).await
    }

    pub async fn patch_rating(
        &self,
        rating_id: &EntityId,
        changes: UpdateRatingRequest,
    ) -> Result<Option<Stored<Rating>>, RepositoryError> {
        let Some(current) = self.repository.find_by_id(rating_id).await? else {
            return Ok(None);
        };

        let mut rating = current.into_record();
        changes.apply_to(&mut rating);
        self.repository.update(rating_id, rating).await
    }

    pub async fn delete_rating(&self, rating_id: &EntityId) -> Result<bool, RepositoryError> {
        debug!("Deleting rating {}", rating_id);
        self.repository.delete(rating_id).await
    }
}

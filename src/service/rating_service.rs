use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::Rating;
use crate::repository::{is_foreign_key_violation, RatingRepository};

#[derive(Clone)]
pub struct RatingService {
    repo: RatingRepository,
}

impl RatingService {
    pub fn new(repo: RatingRepository) -> Self {
        Self { repo }
    }

    /// Records one rating row. Repeat ratings from the same user are
    /// allowed and all count toward the car's aggregate. A nonexistent car
    /// is a validation failure, not a not-found: the car id is a field on
    /// the submitted payload.
    pub async fn add(
        &self,
        rater_id: i64,
        car_id: i64,
        value: Option<f64>,
    ) -> Result<Rating, AppError> {
        if !self.repo.car_exists(car_id).await? {
            return Err(AppError::Validation(format!(
                "Invalid car: {} does not exist",
                car_id
            )));
        }

        let rating = self.repo.insert(car_id, rater_id, value).await.map_err(|e| {
            // Car deleted between the existence check and the insert.
            if is_foreign_key_violation(&e) {
                AppError::Validation(format!("Invalid car: {} does not exist", car_id))
            } else {
                AppError::Database(e)
            }
        })?;

        tracing::info!(
            "{} User {} rated car {}: {:?}",
            API_NAME,
            rater_id,
            car_id,
            rating.rating
        );
        Ok(rating)
    }
}

use anyhow::anyhow;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarOrdering};
use crate::repository::{is_unique_violation, CarRepository};
use crate::service::popularity;
use crate::service::VehicleLookupClient;

#[derive(Clone)]
pub struct CarService {
    repo: CarRepository,
    vehicle_lookup: VehicleLookupClient,
}

impl CarService {
    pub fn new(repo: CarRepository, vehicle_lookup: VehicleLookupClient) -> Self {
        Self {
            repo,
            vehicle_lookup,
        }
    }

    /// Validated, idempotent registration. The catalog check runs first;
    /// a failed or unreachable lookup rejects the request outright.
    pub async fn create(
        &self,
        owner_id: i64,
        make: &str,
        model: &str,
    ) -> Result<(Car, bool), AppError> {
        if !self.vehicle_lookup.exists(make, model).await {
            return Err(AppError::Validation("Wrong Make or Model".to_string()));
        }

        let (id, created) = self.repo.get_or_create(owner_id, make, model).await?;
        if created {
            tracing::info!("{} Created car {} ({} {})", API_NAME, id, make, model);
        } else {
            tracing::info!("{} Car {} already registered for user {}", API_NAME, id, owner_id);
        }

        let car = self
            .repo
            .find_with_ratings(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow!("car {} vanished after get-or-create", id)))?;
        Ok((car, created))
    }

    pub async fn list(&self, ordering: CarOrdering) -> Result<Vec<Car>, AppError> {
        match ordering {
            CarOrdering::Default => Ok(self.repo.list_with_ratings().await?),
            CarOrdering::Popular => self.popular().await,
        }
    }

    pub async fn popular(&self) -> Result<Vec<Car>, AppError> {
        let mut cars = self.repo.list_with_ratings().await?;
        popularity::rank(&mut cars);
        Ok(cars)
    }

    pub async fn retrieve(&self, id: i64) -> Result<Car, AppError> {
        self.repo
            .find_with_ratings(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", id)))
    }

    /// Re-validates the new make/model against the catalog before applying.
    /// Owner-scoped throughout: someone else's car answers not-found before
    /// any catalog call.
    pub async fn update(
        &self,
        owner_id: i64,
        id: i64,
        make: &str,
        model: &str,
    ) -> Result<Car, AppError> {
        if !self.repo.exists_for_owner(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Car {} not found", id)));
        }

        if !self.vehicle_lookup.exists(make, model).await {
            return Err(AppError::Validation("Wrong Make or Model".to_string()));
        }

        let updated = self
            .repo
            .update(id, owner_id, make, model)
            .await
            .map_err(|e| {
                // The new make/model would collide with another car the
                // user already registered under the same natural key.
                if is_unique_violation(&e) {
                    AppError::Validation(format!(
                        "Car with make '{}' and model '{}' already registered",
                        make, model
                    ))
                } else {
                    AppError::Database(e)
                }
            })?;
        if !updated {
            return Err(AppError::NotFound(format!("Car {} not found", id)));
        }

        tracing::info!("{} Updated car {} ({} {})", API_NAME, id, make, model);
        self.retrieve(id).await
    }

    pub async fn delete(&self, owner_id: i64, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id, owner_id).await? {
            return Err(AppError::NotFound(format!("Car {} not found", id)));
        }
        tracing::info!("{} Deleted car {} and its ratings", API_NAME, id);
        Ok(())
    }
}

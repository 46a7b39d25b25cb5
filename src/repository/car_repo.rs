use sqlx::PgPool;

use crate::models::Car;

// Aggregate semantics: COUNT(r.id) counts every rating row, null-valued
// ones included, while AVG(r.rating) skips nulls. Unrated cars get a
// count of 0 and a NULL average via the LEFT JOIN.
const CAR_WITH_RATINGS: &str = "SELECT c.id, c.owner_id, c.make, c.model, \
     AVG(r.rating) AS avg_rating, COUNT(r.id) AS total_rates, c.created_at \
     FROM cars c LEFT JOIN ratings r ON r.car_id = c.id";

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_with_ratings(&self) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("{} GROUP BY c.id ORDER BY c.created_at DESC", CAR_WITH_RATINGS);
        sqlx::query_as::<_, Car>(&query).fetch_all(&self.pool).await
    }

    pub async fn find_with_ratings(&self, id: i64) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("{} WHERE c.id = $1 GROUP BY c.id", CAR_WITH_RATINGS);
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Transactional get-or-create keyed on (owner, make, model). A lost
    /// insert race falls through to re-selecting the winner's row, so
    /// concurrent creates never surface an error or a duplicate.
    pub async fn get_or_create(
        &self,
        owner_id: i64,
        make: &str,
        model: &str,
    ) -> Result<(i64, bool), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM cars WHERE owner_id = $1 AND make = $2 AND model = $3",
        )
        .bind(owner_id)
        .bind(make)
        .bind(model)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(id) = existing {
            tx.commit().await?;
            return Ok((id, false));
        }

        let inserted: Option<i64> = sqlx::query_scalar(
            "INSERT INTO cars (owner_id, make, model) VALUES ($1, $2, $3) \
             ON CONFLICT (owner_id, make, model) DO NOTHING RETURNING id",
        )
        .bind(owner_id)
        .bind(make)
        .bind(model)
        .fetch_optional(&mut *tx)
        .await?;

        match inserted {
            Some(id) => {
                tx.commit().await?;
                Ok((id, true))
            }
            None => {
                let id: i64 = sqlx::query_scalar(
                    "SELECT id FROM cars WHERE owner_id = $1 AND make = $2 AND model = $3",
                )
                .bind(owner_id)
                .bind(make)
                .bind(model)
                .fetch_one(&mut *tx)
                .await?;
                tx.commit().await?;
                Ok((id, false))
            }
        }
    }

    pub async fn exists_for_owner(&self, id: i64, owner_id: i64) -> Result<bool, sqlx::Error> {
        let result: Option<bool> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cars WHERE id = $1 AND owner_id = $2)")
                .bind(id)
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(result.unwrap_or(false))
    }

    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        make: &str,
        model: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE cars SET make = $1, model = $2 WHERE id = $3 AND owner_id = $4")
            .bind(make)
            .bind(model)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes the owner's car; associated ratings go with it via the
    /// ON DELETE CASCADE on ratings.car_id.
    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use sqlx::PgPool;

use crate::models::Rating;

#[derive(Clone)]
pub struct RatingRepository {
    pool: PgPool,
}

impl RatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn car_exists(&self, car_id: i64) -> Result<bool, sqlx::Error> {
        let result: Option<bool> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cars WHERE id = $1)")
                .bind(car_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(result.unwrap_or(false))
    }

    pub async fn insert(
        &self,
        car_id: i64,
        user_id: i64,
        rating: Option<f64>,
    ) -> Result<Rating, sqlx::Error> {
        sqlx::query_as::<_, Rating>(
            "INSERT INTO ratings (car_id, user_id, rating) VALUES ($1, $2, $3) \
             RETURNING id, car_id, user_id, rating",
        )
        .bind(car_id)
        .bind(user_id)
        .bind(rating)
        .fetch_one(&self.pool)
        .await
    }
}

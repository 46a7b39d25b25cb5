use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Rating {
    pub id: i64,
    #[serde(rename = "car")]
    pub car_id: i64,
    #[serde(skip_serializing)]
    pub user_id: i64,
    pub rating: Option<f64>,
}

/// Rating submissions are append-only; there is no update or delete surface.
/// The value is optional, matching the nullable rating column.
#[derive(Debug, Deserialize, Validate)]
pub struct RatingPayload {
    pub car: i64,
    #[validate(range(min = 1.0, max = 5.0, message = "rating must be between 1 and 5"))]
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn in_range_values_pass() {
        for value in [1.0, 2.5, 5.0] {
            let payload = RatingPayload {
                car: 1,
                rating: Some(value),
            };
            assert!(payload.validate().is_ok(), "value {} should pass", value);
        }
    }

    #[test]
    fn out_of_range_values_fail() {
        for value in [0.0, 0.9, 5.1, -3.0, 100.0] {
            let payload = RatingPayload {
                car: 1,
                rating: Some(value),
            };
            assert!(payload.validate().is_err(), "value {} should fail", value);
        }
    }

    #[test]
    fn null_rating_is_accepted() {
        let payload = RatingPayload {
            car: 1,
            rating: None,
        };
        assert!(payload.validate().is_ok());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A car row together with its derived rating aggregate. `total_rates`
/// counts all rating rows, including null-valued ones; `avg_rating`
/// averages the non-null values and is `None` for unrated cars.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Car {
    pub id: i64,
    #[serde(skip_serializing)]
    pub owner_id: i64,
    pub make: String,
    pub model: String,
    pub avg_rating: Option<f64>,
    pub total_rates: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CarPayload {
    #[validate(length(min = 1, max = 300, message = "make must be between 1 and 300 characters"))]
    pub make: String,
    #[validate(length(min = 1, max = 300, message = "model must be between 1 and 300 characters"))]
    pub model: String,
}

/// Ordering of the car list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarOrdering {
    /// Most recently created first.
    #[default]
    Default,
    /// Rating count descending, then average rating.
    Popular,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub ordering: CarOrdering,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn ordering_parses_from_query_values() {
        let params: ListParams = serde_json::from_str(r#"{"ordering": "popular"}"#).unwrap();
        assert_eq!(params.ordering, CarOrdering::Popular);

        let params: ListParams = serde_json::from_str(r#"{"ordering": "default"}"#).unwrap();
        assert_eq!(params.ordering, CarOrdering::Default);
    }

    #[test]
    fn ordering_defaults_when_absent() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.ordering, CarOrdering::Default);
    }

    #[test]
    fn unknown_ordering_is_rejected() {
        assert!(serde_json::from_str::<ListParams>(r#"{"ordering": "newest"}"#).is_err());
    }

    #[test]
    fn empty_make_fails_validation() {
        let payload = CarPayload {
            make: String::new(),
            model: "350z".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}

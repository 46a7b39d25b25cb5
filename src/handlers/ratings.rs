use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::handlers::AppState;
use crate::models::RatingPayload;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_rating))
}

async fn create_rating(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<RatingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let rating = state
        .ratings
        .add(user.user_id, payload.car, payload.rating)
        .await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

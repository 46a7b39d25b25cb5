use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use validator::Validate;

use crate::auth::AuthUser;
use crate::constants::API_NAME;
use crate::error::AppError;
use crate::handlers::AppState;
use crate::models::{Car, CarPayload, ListParams};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/popular", get(popular_cars))
        .route("/:id", get(retrieve_car).put(update_car).delete(delete_car))
}

async fn list_cars(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.cars.list(params.ordering).await?;
    Ok(Json(cars))
}

async fn create_car(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CarPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::info!(
        "{} Registration request from user {}: {} {}",
        API_NAME,
        user.user_id,
        payload.make,
        payload.model
    );

    let (car, created) = state
        .cars
        .create(user.user_id, &payload.make, &payload.model)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(car)))
}

async fn popular_cars(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.cars.popular().await?;
    Ok(Json(cars))
}

async fn retrieve_car(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Car>, AppError> {
    let car = state.cars.retrieve(id).await?;
    Ok(Json(car))
}

async fn update_car(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<CarPayload>,
) -> Result<Json<Car>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let car = state
        .cars
        .update(user.user_id, id, &payload.make, &payload.model)
        .await?;
    Ok(Json(car))
}

async fn delete_car(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.cars.delete(user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

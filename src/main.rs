use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use car_rating_api::auth::AuthKeys;
use car_rating_api::config::Config;
use car_rating_api::constants::API_NAME;
use car_rating_api::handlers::{cars, health, ratings, AppState};
use car_rating_api::repository::{CarRepository, RatingRepository};
use car_rating_api::service::{CarService, RatingService, VehicleLookupClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting server on port {}", API_NAME, config.server_port);

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("{} Connected to database", API_NAME);

    // Initialize repositories and services
    let vehicle_lookup = VehicleLookupClient::new(
        config.vehicle_api_url.clone(),
        Duration::from_secs(config.vehicle_api_timeout_secs),
    )
    .context("Failed to build vehicle lookup client")?;

    let state = AppState {
        cars: CarService::new(CarRepository::new(pool.clone()), vehicle_lookup),
        ratings: RatingService::new(RatingRepository::new(pool)),
        auth: AuthKeys::from_secret(&config.jwt_secret),
    };

    // Build application router
    let app = Router::new()
        .nest("/api/v1/cars", cars::router())
        .nest("/api/v1/rate", ratings::router())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

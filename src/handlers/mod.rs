pub mod cars;
pub mod health;
pub mod ratings;

use axum::extract::FromRef;

use crate::auth::AuthKeys;
use crate::service::{CarService, RatingService};

#[derive(Clone)]
pub struct AppState {
    pub cars: CarService,
    pub ratings: RatingService,
    pub auth: AuthKeys,
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

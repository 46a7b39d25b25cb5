pub mod car;
pub mod rating;

pub use car::{Car, CarOrdering, CarPayload, ListParams};
pub use rating::{Rating, RatingPayload};

pub mod car_repo;
pub mod rating_repo;

pub use car_repo::CarRepository;
pub use rating_repo::RatingRepository;

/// True when the error is a Postgres foreign-key violation (SQLSTATE 23503),
/// e.g. a rating submitted against a car deleted mid-request.
pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    has_sqlstate(e, "23503")
}

/// True when the error is a Postgres unique violation (SQLSTATE 23505),
/// e.g. an update that would collide with another car's (owner, make,
/// model) key.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    has_sqlstate(e, "23505")
}

fn has_sqlstate(e: &sqlx::Error, code: &str) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(code),
        _ => false,
    }
}

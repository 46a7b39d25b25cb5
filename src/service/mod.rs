pub mod car_service;
pub mod popularity;
pub mod rating_service;
pub mod vehicle_lookup;

pub use car_service::CarService;
pub use rating_service::RatingService;
pub use vehicle_lookup::VehicleLookupClient;

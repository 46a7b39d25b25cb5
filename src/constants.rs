pub const API_NAME: &str = "[Car Rating API]";

/// NHTSA vPIC vehicle catalog, used to validate make/model pairs.
pub const DEFAULT_VEHICLE_API_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

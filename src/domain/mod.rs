mod distance;
mod geo_point;
mod gym;
mod lookup_result;

pub use distance::Distance;
pub use geo_point::{GeoPoint, GeoPointError};
pub use gym::Gym;
pub use lookup_result::{LookupResult, NearestGymResponse};

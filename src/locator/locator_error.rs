use crate::domain::GeoPoint;
use crate::geocoder::GeocoderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("the catalog does not contain any gyms")]
    EmptyCatalog,
    #[error("invalid query point {}, {}", .0.latitude, .0.longitude)]
    InvalidQuery(GeoPoint),
    #[error("address '{address}' not found")]
    AddressNotFound { address: String },
    #[error("geocoder unavailable: {0}")]
    GeocoderUnavailable(#[from] GeocoderError),
}

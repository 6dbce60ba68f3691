use crate::domain::GeoPoint;
use async_trait::async_trait;
use reqwest::header;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// Resolves free-text addresses to coordinates.
#[async_trait]
pub trait Geocoder: Debug + Send + Sync {
    /// Returns the best matching point for `address`, or `None` if the address is unknown.
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>, GeocoderError>;
}

#[derive(Error, Debug)]
pub enum GeocoderError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("geocoder client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("geocoder returned a malformed {field}: '{value}'")]
    MalformedCoordinate { field: &'static str, value: String },
    #[error("geocoder did not respond within {} ms", .0.as_millis())]
    Timeout(Duration),
}

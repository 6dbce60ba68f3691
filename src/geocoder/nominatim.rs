use crate::app_config::AppConfig;
use crate::domain::GeoPoint;
use crate::geocoder::{Geocoder, GeocoderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// A single search result of the Nominatim search API, coordinates are sent as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

impl Place {
    fn to_geo_point(&self) -> Result<GeoPoint, GeocoderError> {
        let latitude = parse_coordinate("latitude", &self.lat)?;
        let longitude = parse_coordinate("longitude", &self.lon)?;

        GeoPoint::validated(latitude, longitude).map_err(|e| GeocoderError::MalformedCoordinate {
            field: "location",
            value: e.to_string(),
        })
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, GeocoderError> {
    value.trim().parse::<f64>().map_err(|_| GeocoderError::MalformedCoordinate {
        field,
        value: value.to_string(),
    })
}

/// Geocodes addresses using the OpenStreetMap Nominatim search API.
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    url: String,
}

impl NominatimGeocoder {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        NominatimGeocoder {
            client,
            url: config.geocoder().url().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>, GeocoderError> {
        info!("🔎 Geocoding address...");

        let places = self
            .client
            .get(format!("{}/search", self.url))
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Place>>()
            .await?;

        let Some(place) = places.first() else {
            info!("🔎 Geocoding address... OK, no match");
            return Ok(None);
        };

        let point = place.to_geo_point()?;
        debug!(display_name = ?place.display_name, "🔸 Best match: {:?}", point);
        info!("🔎 Geocoding address... OK, found {}, {}", point.latitude, point.longitude);

        Ok(Some(point))
    }
}

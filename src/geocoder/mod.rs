mod client;
#[cfg(test)]
pub mod fake;
#[allow(clippy::module_inception)]
mod geocoder;
mod nominatim;

pub use client::new_client;
pub use geocoder::{Geocoder, GeocoderError};
pub use nominatim::NominatimGeocoder;

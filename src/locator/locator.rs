use crate::domain::{GeoPoint, LookupResult};
use crate::geocoder::{Geocoder, GeocoderError};
use crate::locator::nearest::find_nearest;
use crate::locator::{Catalog, LocatorError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

/// Finds the gym nearest to a point or an address. Cheap to clone and safe to share between tasks.
#[derive(Clone, Debug)]
pub struct NearestLocator {
    catalog: Catalog,
    geocoder: Arc<dyn Geocoder>,
    geocoder_timeout: Duration,
}

impl NearestLocator {
    pub fn new(catalog: Catalog, geocoder: Arc<dyn Geocoder>, geocoder_timeout: Duration) -> Self {
        NearestLocator {
            catalog,
            geocoder,
            geocoder_timeout,
        }
    }

    #[instrument(skip(self))]
    pub fn nearest_to(&self, query: GeoPoint) -> Result<LookupResult, LocatorError> {
        if !query.is_finite() {
            return Err(LocatorError::InvalidQuery(query));
        }

        let (gym, distance) = find_nearest(self.catalog.gyms(), query)?;
        info!("🏋️ Nearest gym is '{}' at {}", gym.name, distance);

        Ok(LookupResult { gym: gym.clone(), distance })
    }

    #[instrument(skip(self))]
    pub async fn nearest_to_address(&self, address: &str) -> Result<LookupResult, LocatorError> {
        let point = match timeout(self.geocoder_timeout, self.geocoder.geocode(address)).await {
            Ok(Ok(Some(point))) => point,
            Ok(Ok(None)) => {
                return Err(LocatorError::AddressNotFound {
                    address: address.to_string(),
                });
            }
            Ok(Err(e)) => {
                warn!("⚠️ Unable to geocode address: {}", e);
                return Err(LocatorError::GeocoderUnavailable(e));
            }
            Err(_) => {
                warn!("⏳ Geocoder did not respond within {} ms", self.geocoder_timeout.as_millis());
                return Err(LocatorError::GeocoderUnavailable(GeocoderError::Timeout(self.geocoder_timeout)));
            }
        };

        self.nearest_to(point)
    }
}

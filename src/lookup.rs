use crate::app_config::AppConfig;
use crate::domain::{GeoPoint, LookupResult};
use crate::geocoder::GeocoderError;
use crate::locator::{LocatorError, NearestLocator};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument, warn};

#[derive(Clone, PartialEq, Debug)]
pub enum Query {
    Point(GeoPoint),
    Address(String),
}

/// Runs a single lookup. Address lookups are retried with exponential backoff while the geocoder cannot be reached or times out.
#[instrument(skip(locator, config))]
pub async fn lookup(locator: &NearestLocator, query: &Query, config: &AppConfig) -> Result<LookupResult, LocatorError> {
    match query {
        Query::Point(point) => locator.nearest_to(*point),
        Query::Address(address) => {
            let strategy = ExponentialBackoff::from_millis(config.geocoder().retry_ms())
                .factor(2)
                .max_delay(config.geocoder().retry_max_delay_ms())
                .map(jitter)
                .take(config.geocoder().max_retries());

            info!("Looking up nearest gym for '{}'...", address);
            RetryIf::spawn(
                strategy,
                || locator.nearest_to_address(address),
                |e: &LocatorError| {
                    let retry = matches!(
                        e,
                        LocatorError::GeocoderUnavailable(GeocoderError::RequestError(_) | GeocoderError::Timeout(_))
                    );
                    if retry {
                        warn!("⚠️ {}. Retrying...", e);
                    }
                    retry
                },
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::Gym;
    use crate::geocoder::fake::FakeGeocoder;
    use crate::locator::Catalog;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;
    use test_log::test;

    fn locator(geocoder: Arc<FakeGeocoder>) -> NearestLocator {
        let catalog = Catalog::new(vec![
            Gym::new("A", "A street 1", GeoPoint::new(0.0, 0.0)),
            Gym::new("B", "B street 1", GeoPoint::new(0.0, 1.0)),
        ])
        .unwrap();
        NearestLocator::new(catalog, geocoder, Duration::from_millis(200))
    }

    #[test(tokio::test)]
    async fn lookup_of_a_point_does_not_use_the_geocoder() {
        let geocoder = Arc::new(FakeGeocoder::flaky(0, GeoPoint::new(0.0, 1.0)));
        let config = AppConfigBuilder::new().build();

        let result = lookup(&locator(geocoder.clone()), &Query::Point(GeoPoint::new(0.0, 0.4)), &config).await.unwrap();

        assert_eq!(result.gym.name, "A");
        assert_eq!(geocoder.calls(), 0);
    }

    #[test(tokio::test)]
    async fn lookup_of_an_address_retries_while_the_geocoder_is_unavailable() {
        let geocoder = Arc::new(FakeGeocoder::flaky(2, GeoPoint::new(0.0, 0.9)));
        let config = AppConfigBuilder::new().max_retries(2).build();

        let result = lookup(&locator(geocoder.clone()), &Query::Address("B street 2".to_string()), &config).await.unwrap();

        assert_eq!(result.gym.name, "B");
        assert_eq!(geocoder.calls(), 3);
    }

    #[test(tokio::test)]
    async fn lookup_of_an_address_gives_up_after_the_maximum_number_of_retries() {
        let geocoder = Arc::new(FakeGeocoder::flaky(5, GeoPoint::new(0.0, 0.9)));
        let config = AppConfigBuilder::new().max_retries(2).build();

        let result = lookup(&locator(geocoder.clone()), &Query::Address("B street 2".to_string()), &config).await;

        assert!(matches!(result, Err(LocatorError::GeocoderUnavailable(_))));
        assert_eq!(geocoder.calls(), 3);
    }

    #[test(tokio::test)]
    async fn lookup_of_an_address_is_not_retried_for_a_malformed_response() {
        let geocoder = Arc::new(FakeGeocoder::failing());
        let config = AppConfigBuilder::new().max_retries(2).build();

        let result = lookup(&locator(geocoder.clone()), &Query::Address("B street 2".to_string()), &config).await;

        assert!(matches!(
            result,
            Err(LocatorError::GeocoderUnavailable(GeocoderError::MalformedCoordinate { .. }))
        ));
        assert_eq!(geocoder.calls(), 1);
    }

    #[test(tokio::test)]
    async fn lookup_of_an_unknown_address_is_not_retried() {
        let geocoder = Arc::new(FakeGeocoder::NotFound);
        let config = AppConfigBuilder::new().max_retries(2).build();

        let result = lookup(&locator(geocoder), &Query::Address("Nowhere 1".to_string()), &config).await;

        assert!(matches!(result, Err(LocatorError::AddressNotFound { .. })));
    }
}

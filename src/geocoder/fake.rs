use crate::domain::GeoPoint;
use crate::geocoder::{Geocoder, GeocoderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Programmable geocoder used in tests.
#[derive(Debug)]
pub enum FakeGeocoder {
    Found(GeoPoint),
    NotFound,
    /// Always answers with a malformed coordinate.
    Failing { calls: AtomicUsize },
    Slow(Duration, GeoPoint),
    /// Fails the first `failures` calls, then resolves to the point.
    Flaky { failures: usize, calls: AtomicUsize, point: GeoPoint },
}

impl FakeGeocoder {
    pub fn flaky(failures: usize, point: GeoPoint) -> Self {
        FakeGeocoder::Flaky {
            failures,
            calls: AtomicUsize::new(0),
            point,
        }
    }

    pub fn failing() -> Self {
        FakeGeocoder::Failing { calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        match self {
            FakeGeocoder::Flaky { calls, .. } | FakeGeocoder::Failing { calls } => calls.load(Ordering::SeqCst),
            _ => 0,
        }
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, _address: &str) -> Result<Option<GeoPoint>, GeocoderError> {
        match self {
            FakeGeocoder::Found(point) => Ok(Some(*point)),
            FakeGeocoder::NotFound => Ok(None),
            FakeGeocoder::Failing { calls } => {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(GeocoderError::MalformedCoordinate {
                    field: "latitude",
                    value: "unavailable".to_string(),
                })
            }
            FakeGeocoder::Slow(delay, point) => {
                tokio::time::sleep(*delay).await;
                Ok(Some(*point))
            }
            FakeGeocoder::Flaky { failures, calls, point } => {
                let call = calls.fetch_add(1, Ordering::SeqCst);
                if call < *failures {
                    Err(GeocoderError::Timeout(Duration::from_millis(1)))
                } else {
                    Ok(Some(*point))
                }
            }
        }
    }
}

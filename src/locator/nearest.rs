use crate::domain::{Distance, GeoPoint, Gym};
use crate::locator::LocatorError;
use crate::locator::haversine::distance;
use ordered_float::OrderedFloat;

/// Scans every gym and returns the one closest to `query`.
///
/// The scan is linear; when several gyms are exactly equally close the one that comes first in `gyms` wins.
pub fn find_nearest(gyms: &[Gym], query: GeoPoint) -> Result<(&Gym, Distance), LocatorError> {
    gyms.iter()
        .map(|gym| (gym, distance(query, gym.location)))
        // `min_by_key` keeps the first of equally minimal elements
        .min_by_key(|(_, kilometers)| OrderedFloat(*kilometers))
        .map(|(gym, kilometers)| (gym, Distance::from_kilometers(kilometers)))
        .ok_or(LocatorError::EmptyCatalog)
}

use crate::domain::{Distance, Gym};
use serde::Serialize;

/// The gym nearest to a query point together with its distance.
#[derive(Clone, PartialEq, Debug)]
pub struct LookupResult {
    pub gym: Gym,
    pub distance: Distance,
}

impl LookupResult {
    pub fn formatted_distance(&self) -> String {
        self.distance.to_string()
    }
}

/// The shape handed to callers of a lookup.
#[derive(Serialize, PartialEq, Debug)]
pub struct NearestGymResponse<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub distance: String,
}

impl<'a> From<&'a LookupResult> for NearestGymResponse<'a> {
    fn from(result: &'a LookupResult) -> Self {
        NearestGymResponse {
            name: &result.gym.name,
            address: &result.gym.address,
            distance: result.formatted_distance(),
        }
    }
}

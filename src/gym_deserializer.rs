use crate::domain::{GeoPoint, Gym};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Gym {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(alias = "naziv")]
            name: String,
            #[serde(alias = "adresa")]
            address: String,
            lat: f64,
            lng: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let location = GeoPoint::validated(inner.lat, inner.lng).map_err(|e| Error::custom(format!("invalid location for gym '{}': {}", inner.name, e)))?;

        Ok(Gym::new(inner.name, inner.address, location))
    }
}

use crate::domain::{GeoPoint, GeoPointError};
use crate::lookup::Query;
use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(name = "gym-locator")]
#[command(about = "Find the gym nearest to a location or an address.", long_about = None)]
#[command(group(ArgGroup::new("query").required(true).args(["lat", "address"])))]
pub struct Cli {
    /// Latitude of the location, in degrees
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the location, in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Free-text address, resolved through the geocoder
    #[arg(short, long, conflicts_with_all = ["lat", "lng"])]
    pub address: Option<String>,
}

impl Cli {
    pub fn query(&self) -> Result<Query, GeoPointError> {
        match (&self.address, self.lat, self.lng) {
            (Some(address), _, _) => Ok(Query::Address(address.clone())),
            (None, Some(latitude), Some(longitude)) => Ok(Query::Point(GeoPoint::validated(latitude, longitude)?)),
            // clap requires either an address or both coordinates
            _ => unreachable!("missing query arguments"),
        }
    }
}

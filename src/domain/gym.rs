use crate::domain::GeoPoint;

#[derive(Clone, PartialEq, Debug)]
pub struct Gym {
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
}

impl Gym {
    pub fn new(name: impl Into<String>, address: impl Into<String>, location: GeoPoint) -> Self {
        Gym {
            name: name.into(),
            address: address.into(),
            location,
        }
    }
}

use std::fmt::Display;

/// A great-circle distance in kilometers.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Distance {
    kilometers: f64,
}

impl Distance {
    pub fn from_kilometers(kilometers: f64) -> Self {
        Distance { kilometers }
    }

    pub fn kilometers(&self) -> f64 {
        self.kilometers
    }
}

/// Distances of one kilometer or more are shown in kilometers with two decimals, anything else in whole meters.
/// Halves are rounded away from zero.
impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kilometers >= 1.0 {
            write!(f, "{:.2} km", (self.kilometers * 100.0).round() / 100.0)
        } else {
            write!(f, "{:.0} m", (self.kilometers * 1000.0).round())
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Postal address with coordinates. Used by customers and restaurants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub location: GeoPoint,
}

impl Address {
    pub fn new(
        line1: impl Into<String>,
        line2: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            postal_code: postal_code.into(),
            location: GeoPoint::default(),
        }
    }

    pub fn at(mut self, location: GeoPoint) -> Self {
        self.location = location;
        self
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.line1, self.line2, self.city, self.state, self.country, self.postal_code
        )
    }
}

/// Latitude / longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Label under which a customer stores an address. One address per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    Home,
    Office,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_postal_fields() {
        let address = Address::new("12 Park St", "Flat 4", "Pune", "MH", "India", "411001")
            .at(GeoPoint::new(18.52, 73.85));
        assert_eq!(
            address.to_string(),
            "12 Park St, Flat 4, Pune, MH, India, 411001"
        );
    }
}

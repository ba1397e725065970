use crate::model::GeoPoint;
use serde::{Deserialize, Serialize};

sequential_id!(
    /// Type-safe identifier for delivery riders.
    RiderId,
    "rider"
);

/// A delivery rider and the area they cover.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRider {
    pub id: RiderId,
    pub name: String,
    pub location: GeoPoint,
    pub range_km: f64,
    pub on_duty: bool,
    pub occupied: bool,
    pub postal_codes: Vec<String>,
}

impl DeliveryRider {
    /// A newly onboarded rider is off duty and free.
    pub fn new(id: RiderId, params: RiderCreate) -> Self {
        Self {
            id,
            name: params.name,
            location: params.location,
            range_km: params.range_km,
            on_duty: false,
            occupied: false,
            postal_codes: params.postal_codes,
        }
    }

    pub fn is_available(&self) -> bool {
        self.on_duty && !self.occupied
    }

    pub fn serves(&self, postal_code: &str) -> bool {
        self.postal_codes.iter().any(|code| code == postal_code)
    }
}

/// Payload for onboarding a rider.
#[derive(Debug, Clone)]
pub struct RiderCreate {
    pub name: String,
    pub location: GeoPoint,
    pub range_km: f64,
    pub postal_codes: Vec<String>,
}

/// Payload for updating a rider's state. `None` leaves a field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiderUpdate {
    pub location: Option<GeoPoint>,
    pub range_km: Option<f64>,
    pub on_duty: Option<bool>,
    pub occupied: Option<bool>,
    pub postal_codes: Option<Vec<String>>,
}

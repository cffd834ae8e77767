//! National park types - destinations that receive trips

use crate::limits::{validate_park_name, ValidationError};
use crate::trip::TripId;
use serde::{Deserialize, Serialize};

/// Handle to a national park in a [`World`](crate::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParkId(pub usize);

impl std::fmt::Display for ParkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "park#{}", self.0)
    }
}

/// A national park
///
/// The name is fixed at construction: there is no setter, and the
/// [`World`](crate::World) never hands out `&mut NationalPark`.
#[derive(Debug, Clone, Serialize)]
pub struct NationalPark {
    id: ParkId,
    name: String,
    trips: Vec<TripId>,
}

impl NationalPark {
    pub(crate) fn new(id: ParkId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_park_name(&name)?;
        Ok(Self {
            id,
            name,
            trips: Vec::new(),
        })
    }

    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handles of trips to this park, oldest first
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    /// Number of trips to this park
    pub fn total_visits(&self) -> usize {
        self.trips.len()
    }

    pub(crate) fn push_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_park_creation() {
        let park = NationalPark::new(ParkId(3), "Yosemite").unwrap();
        assert_eq!(park.name(), "Yosemite");
        assert_eq!(park.id(), ParkId(3));
        assert_eq!(park.total_visits(), 0);
    }

    #[test]
    fn test_park_name_too_short() {
        assert_eq!(
            NationalPark::new(ParkId(0), "Ab").unwrap_err(),
            ValidationError::ParkNameTooShort { len: 2, min: 3 }
        );
    }
}

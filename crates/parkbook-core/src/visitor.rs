//! Visitor types - people who take trips

use crate::limits::{validate_visitor_name, ValidationError};
use crate::trip::TripId;
use serde::{Deserialize, Serialize};

/// Handle to a visitor in a [`World`](crate::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VisitorId(pub usize);

impl std::fmt::Display for VisitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "visitor#{}", self.0)
    }
}

/// A person who takes trips to national parks
#[derive(Debug, Clone, Serialize)]
pub struct Visitor {
    id: VisitorId,
    name: String,
    /// Trips in registration order
    trips: Vec<TripId>,
}

impl Visitor {
    pub(crate) fn new(id: VisitorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_visitor_name(&name)?;
        Ok(Self {
            id,
            name,
            trips: Vec::new(),
        })
    }

    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the visitor. The old name is kept if the new one is invalid.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_visitor_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Handles of this visitor's trips, oldest first
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    pub(crate) fn push_trip(&mut self, trip: TripId) {
        self.trips.push(trip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_creation() {
        let visitor = Visitor::new(VisitorId(0), "Steve").unwrap();
        assert_eq!(visitor.name(), "Steve");
        assert_eq!(visitor.id(), VisitorId(0));
        assert!(visitor.trips().is_empty());
    }

    #[test]
    fn test_visitor_invalid_name() {
        assert!(Visitor::new(VisitorId(0), "").is_err());
        assert!(Visitor::new(VisitorId(0), "Bartholomew Jones").is_err());
    }

    #[test]
    fn test_set_name() {
        let mut visitor = Visitor::new(VisitorId(0), "Steve").unwrap();

        visitor.set_name("Stephen").unwrap();
        assert_eq!(visitor.name(), "Stephen");

        assert!(visitor.set_name("").is_err());
        assert!(visitor.set_name("x".repeat(16)).is_err());
        assert_eq!(visitor.name(), "Stephen");
    }
}

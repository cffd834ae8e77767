//! The world registry: arenas of visitors, parks and trips
//!
//! Every entity is created through a `World`, which owns them and hands out
//! index handles. Visitors and parks keep the [`TripId`]s of their trips;
//! trips keep the handles of their two endpoints. All derived queries scan
//! those lists on each call.

use crate::error::{Error, Result};
use crate::park::{NationalPark, ParkId};
use crate::trip::{Trip, TripId};
use crate::visitor::{Visitor, VisitorId};
use serde::Serialize;
use std::collections::HashSet;

/// Owner of every visitor, park and trip constructed in one model
#[derive(Debug, Clone, Default, Serialize)]
pub struct World {
    visitors: Vec<Visitor>,
    parks: Vec<NationalPark>,
    trips: Vec<Trip>,
}

/// Summary of a single park, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkReport {
    pub park: ParkId,
    pub name: String,
    pub total_visits: usize,
    pub distinct_visitors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_visitor: Option<String>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a visitor
    pub fn add_visitor(&mut self, name: impl Into<String>) -> Result<VisitorId> {
        let id = VisitorId(self.visitors.len());
        let visitor = Visitor::new(id, name)?;
        tracing::debug!("Registered {} ({})", id, visitor.name());
        self.visitors.push(visitor);
        Ok(id)
    }

    /// Create a national park and add it to the park registry
    pub fn add_park(&mut self, name: impl Into<String>) -> Result<ParkId> {
        let id = ParkId(self.parks.len());
        let park = NationalPark::new(id, name)?;
        tracing::debug!("Registered {} ({})", id, park.name());
        self.parks.push(park);
        Ok(id)
    }

    /// Create a trip and register it with its visitor, its park and the
    /// trip registry.
    ///
    /// Every check runs before anything is appended, so on error none of the
    /// three lists has changed.
    pub fn add_trip(
        &mut self,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<TripId> {
        if visitor.0 >= self.visitors.len() {
            return Err(Error::VisitorNotFound(visitor));
        }
        if national_park.0 >= self.parks.len() {
            return Err(Error::ParkNotFound(national_park));
        }

        let id = TripId(self.trips.len());
        let trip = Trip::new(
            id,
            visitor,
            national_park,
            start_date.into(),
            end_date.into(),
        )?;

        self.visitors[visitor.0].push_trip(id);
        self.parks[national_park.0].push_trip(id);
        self.trips.push(trip);

        tracing::debug!("Registered {} ({} -> {})", id, visitor, national_park);
        Ok(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registries and lookups
    // ─────────────────────────────────────────────────────────────────────────

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    /// Every park ever constructed, in construction order
    pub fn parks(&self) -> &[NationalPark] {
        &self.parks
    }

    /// Every trip ever constructed, in construction order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn visitor(&self, id: VisitorId) -> Option<&Visitor> {
        self.visitors.get(id.0)
    }

    /// Mutable access for renaming. The trip list stays append-only since
    /// [`Visitor`] exposes no way to edit it.
    pub fn visitor_mut(&mut self, id: VisitorId) -> Option<&mut Visitor> {
        self.visitors.get_mut(id.0)
    }

    pub fn park(&self, id: ParkId) -> Option<&NationalPark> {
        self.parks.get(id.0)
    }

    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips.get(id.0)
    }

    /// Mutable access for editing dates; endpoints stay fixed.
    pub fn trip_mut(&mut self, id: TripId) -> Option<&mut Trip> {
        self.trips.get_mut(id.0)
    }

    /// First visitor registered under `name`
    pub fn find_visitor(&self, name: &str) -> Option<VisitorId> {
        self.visitors
            .iter()
            .find(|v| v.name() == name)
            .map(Visitor::id)
    }

    /// First park registered under `name`
    pub fn find_park(&self, name: &str) -> Option<ParkId> {
        self.parks
            .iter()
            .find(|p| p.name() == name)
            .map(NationalPark::id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Visitor queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The visitor's trips, oldest first. Empty for an unknown handle.
    pub fn visitor_trips(&self, id: VisitorId) -> impl Iterator<Item = &Trip> + '_ {
        self.resolve(self.visitor(id).map(Visitor::trips))
    }

    /// Distinct parks the visitor has been to
    pub fn visitor_national_parks(&self, id: VisitorId) -> HashSet<ParkId> {
        self.visitor_trips(id).map(Trip::national_park).collect()
    }

    /// How many of the visitor's trips went to `park`
    pub fn total_visits_at_park(&self, visitor: VisitorId, park: ParkId) -> usize {
        self.visitor_trips(visitor)
            .filter(|t| t.national_park() == park)
            .count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Park queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Trips to the park, oldest first. Empty for an unknown handle.
    pub fn park_trips(&self, id: ParkId) -> impl Iterator<Item = &Trip> + '_ {
        self.resolve(self.park(id).map(NationalPark::trips))
    }

    /// Distinct visitors the park has received
    pub fn park_visitors(&self, id: ParkId) -> HashSet<VisitorId> {
        self.park_trips(id).map(Trip::visitor).collect()
    }

    /// Number of trips to the park; 0 for an unknown handle
    pub fn total_visits(&self, id: ParkId) -> usize {
        self.park(id).map_or(0, NationalPark::total_visits)
    }

    /// Visitor with the most trips to the park.
    ///
    /// On a tie the visitor whose first trip here was registered earliest
    /// wins. `None` if the park has no trips.
    pub fn best_visitor(&self, id: ParkId) -> Option<VisitorId> {
        // (visitor, count) in order of first appearance
        let mut tally: Vec<(VisitorId, usize)> = Vec::new();
        for trip in self.park_trips(id) {
            match tally.iter_mut().find(|(v, _)| *v == trip.visitor()) {
                Some((_, count)) => *count += 1,
                None => tally.push((trip.visitor(), 1)),
            }
        }

        let best = first_max_by_key(tally, |(_, count)| *count).map(|(v, _)| v);
        tracing::trace!("Best visitor of {}: {:?}", id, best);
        best
    }

    /// Park with the most trips across the registry.
    ///
    /// On a tie the earliest-constructed park wins. `None` only when no park
    /// has been constructed.
    pub fn most_visited(&self) -> Option<ParkId> {
        let best = first_max_by_key(self.parks.iter(), |p| p.total_visits()).map(NationalPark::id);
        tracing::trace!("Most visited park: {:?}", best);
        best
    }

    /// Display summary of a park
    pub fn park_report(&self, id: ParkId) -> Option<ParkReport> {
        let park = self.park(id)?;
        Some(ParkReport {
            park: id,
            name: park.name().to_string(),
            total_visits: park.total_visits(),
            distinct_visitors: self.park_visitors(id).len(),
            best_visitor: self
                .best_visitor(id)
                .and_then(|v| self.visitor(v))
                .map(|v| v.name().to_string()),
        })
    }

    fn resolve<'a>(&'a self, ids: Option<&'a [TripId]>) -> impl Iterator<Item = &'a Trip> + 'a {
        ids.unwrap_or_default()
            .iter()
            .filter_map(move |id| self.trips.get(id.0))
    }
}

/// Like `Iterator::max_by_key`, but keeps the first of equal maxima.
fn first_max_by_key<T, I, F>(items: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> usize,
{
    let mut best: Option<(T, usize)> = None;
    for item in items {
        let k = key(&item);
        match &best {
            Some((_, best_k)) if k <= *best_k => {}
            _ => best = Some((item, k)),
        }
    }
    best.map(|(item, _)| item)
}

//! CLI command implementations

pub mod completions;
pub mod park;
pub mod report;
pub mod trips;
pub mod visitor;

use parkbook_core::{Trip, TripId, World};
use serde::Serialize;

use crate::output::Table;

/// A trip with its endpoints resolved to names
#[derive(Debug, Serialize)]
pub struct TripRow {
    pub id: TripId,
    pub visitor: String,
    pub park: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
}

impl TripRow {
    pub fn new(world: &World, trip: &Trip) -> Self {
        Self {
            id: trip.id(),
            visitor: world
                .visitor(trip.visitor())
                .map(|v| v.name().to_string())
                .unwrap_or_default(),
            park: world
                .park(trip.national_park())
                .map(|p| p.name().to_string())
                .unwrap_or_default(),
            start_date: trip.start_date().to_string(),
            end_date: trip.end_date().to_string(),
            duration_days: trip.duration(),
        }
    }
}

/// Table of trips, one row each
pub fn trip_table(rows: &[TripRow]) -> Table {
    let mut table = Table::new(&["#", "Visitor", "Park", "Start", "End", "Days"]);
    for row in rows {
        table.row(vec![
            row.id.0.to_string(),
            row.visitor.clone(),
            row.park.clone(),
            row.start_date.clone(),
            row.end_date.clone(),
            row.duration_days
                .map(|d| d.to_string())
                .unwrap_or_else(|| "?".to_string()),
        ]);
    }
    table
}

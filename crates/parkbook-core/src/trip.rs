//! Trip types - the association between a visitor and a park

use crate::limits::{validate_date, DateField, ValidationError};
use crate::park::ParkId;
use crate::visitor::VisitorId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Year used for dates written without one ("July 4th"). A leap year, so
/// "February 29th" parses.
const REFERENCE_YEAR: i32 = 2000;

/// Handle to a trip in a [`World`](crate::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TripId(pub usize);

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "trip#{}", self.0)
    }
}

/// A visit by one visitor to one park
///
/// Trips are only built by [`World::add_trip`](crate::World::add_trip), which
/// also registers them with both endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    id: TripId,
    visitor: VisitorId,
    national_park: ParkId,
    start_date: String,
    end_date: String,
}

impl Trip {
    pub(crate) fn new(
        id: TripId,
        visitor: VisitorId,
        national_park: ParkId,
        start_date: String,
        end_date: String,
    ) -> Result<Self, ValidationError> {
        validate_date(DateField::Start, &start_date)?;
        validate_date(DateField::End, &end_date)?;
        Ok(Self {
            id,
            visitor,
            national_park,
            start_date,
            end_date,
        })
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn visitor(&self) -> VisitorId {
        self.visitor
    }

    pub fn national_park(&self) -> ParkId {
        self.national_park
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn set_start_date(&mut self, date: impl Into<String>) -> Result<(), ValidationError> {
        let date = date.into();
        validate_date(DateField::Start, &date)?;
        self.start_date = date;
        Ok(())
    }

    pub fn set_end_date(&mut self, date: impl Into<String>) -> Result<(), ValidationError> {
        let date = date.into();
        validate_date(DateField::End, &date)?;
        self.end_date = date;
        Ok(())
    }

    /// Number of days from start to end date, counting both ends.
    ///
    /// Dates are read as `<month> <day>[st|nd|rd|th][,] [year]`. A date
    /// without a year takes the other date's year, or `REFERENCE_YEAR` if
    /// neither has one, and is moved a year so the trip does not run
    /// backwards (a yearless end date moves forward, a yearless start date
    /// moves back). Returns `None` if either date cannot be read or the end
    /// precedes the start.
    pub fn duration(&self) -> Option<i64> {
        let (start_day, start_year) = split_trip_date(&self.start_date)?;
        let (end_day, end_year) = split_trip_date(&self.end_date)?;

        let (start, end) = match (start_year, end_year) {
            (Some(sy), Some(ey)) => (date_in(&start_day, sy)?, date_in(&end_day, ey)?),
            (None, Some(ey)) => {
                let end = date_in(&end_day, ey)?;
                let start = date_in(&start_day, ey)
                    .filter(|s| *s <= end)
                    .or_else(|| date_in(&start_day, ey - 1))?;
                (start, end)
            }
            (start_year, None) => {
                let sy = start_year.unwrap_or(REFERENCE_YEAR);
                let start = date_in(&start_day, sy)?;
                let end = date_in(&end_day, sy)
                    .filter(|e| *e >= start)
                    .or_else(|| date_in(&end_day, sy + 1))?;
                (start, end)
            }
        };

        if end < start {
            return None;
        }
        Some((end - start).num_days() + 1)
    }
}

/// Split a loose "September 1st, 2024" style date into its "September 1"
/// part and its year, if it has one.
fn split_trip_date(text: &str) -> Option<(String, Option<i32>)> {
    let mut parts = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());

    let month = parts.next()?;
    let day_token = parts.next()?;
    let day = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| day_token.strip_suffix(*suffix))
        .unwrap_or(day_token);
    if day.is_empty() || !day.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year = match parts.next() {
        Some(y) => Some(y.parse::<i32>().ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }

    Some((format!("{} {}", month, day), year))
}

fn date_in(month_day: &str, year: i32) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{} {}", month_day, year), "%B %d %Y").ok()
}

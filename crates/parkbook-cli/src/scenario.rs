//! Scenario files: a TOML description of a world to build
//!
//! ```toml
//! visitors = ["Steve", "Jess"]
//! parks = ["Yosemite"]
//!
//! [[trips]]
//! visitor = "Steve"
//! park = "Yosemite"
//! start_date = "July 4th"
//! end_date = "July 9th"
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context};
use parkbook_core::{ParkId, VisitorId, World};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub visitors: Vec<String>,
    #[serde(default)]
    pub parks: Vec<String>,
    #[serde(default)]
    pub trips: Vec<TripEntry>,
}

/// A trip, with its endpoints referenced by name
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TripEntry {
    pub visitor: String,
    pub park: String,
    pub start_date: String,
    pub end_date: String,
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {:?}", path))?;
        Self::parse(&text).with_context(|| format!("Invalid scenario {:?}", path))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Construct every visitor, park and trip in file order
    pub fn build(&self) -> anyhow::Result<World> {
        let mut world = World::new();

        let mut visitors: HashMap<&str, VisitorId> = HashMap::new();
        for name in &self.visitors {
            if visitors.contains_key(name.as_str()) {
                bail!("Duplicate visitor '{}'", name);
            }
            let id = world
                .add_visitor(name.as_str())
                .with_context(|| format!("Invalid visitor '{}'", name))?;
            visitors.insert(name.as_str(), id);
        }

        let mut parks: HashMap<&str, ParkId> = HashMap::new();
        for name in &self.parks {
            if parks.contains_key(name.as_str()) {
                bail!("Duplicate park '{}'", name);
            }
            let id = world
                .add_park(name.as_str())
                .with_context(|| format!("Invalid park '{}'", name))?;
            parks.insert(name.as_str(), id);
        }

        for (i, entry) in self.trips.iter().enumerate() {
            let visitor = *visitors
                .get(entry.visitor.as_str())
                .with_context(|| format!("Trip {}: unknown visitor '{}'", i + 1, entry.visitor))?;
            let park = *parks
                .get(entry.park.as_str())
                .with_context(|| format!("Trip {}: unknown park '{}'", i + 1, entry.park))?;
            world
                .add_trip(
                    visitor,
                    park,
                    entry.start_date.as_str(),
                    entry.end_date.as_str(),
                )
                .with_context(|| format!("Invalid trip {}", i + 1))?;
        }

        Ok(world)
    }
}

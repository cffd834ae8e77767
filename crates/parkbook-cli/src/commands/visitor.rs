//! Visitor command

use clap::Args;
use serde::Serialize;

use super::{trip_table, TripRow};
use crate::output::{format_output, Table};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct VisitorArgs {
    /// Visitor name
    pub name: String,
}

#[derive(Debug, Serialize)]
struct VisitorView {
    name: String,
    trips: Vec<TripRow>,
    parks: Vec<ParkVisits>,
}

#[derive(Debug, Serialize)]
struct ParkVisits {
    park: String,
    visits: usize,
}

pub fn run(args: &VisitorArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<String> {
    tracing::debug!("Running visitor command for: {}", args.name);
    let world = &ctx.world;

    let id = world
        .find_visitor(&args.name)
        .ok_or_else(|| anyhow::anyhow!("Visitor '{}' not found in scenario", args.name))?;

    let mut park_ids: Vec<_> = world.visitor_national_parks(id).into_iter().collect();
    park_ids.sort();

    let view = VisitorView {
        name: args.name.clone(),
        trips: world
            .visitor_trips(id)
            .map(|t| TripRow::new(world, t))
            .collect(),
        parks: park_ids
            .into_iter()
            .filter_map(|p| {
                let park = world.park(p)?;
                Some(ParkVisits {
                    park: park.name().to_string(),
                    visits: world.total_visits_at_park(id, p),
                })
            })
            .collect(),
    };

    format_output(&view, cli.output_format(), |view| {
        let mut parks = Table::new(&["Park", "Visits"]);
        for p in &view.parks {
            parks.row(vec![p.park.clone(), p.visits.to_string()]);
        }
        vec![
            (format!("Trips by {}", view.name), trip_table(&view.trips)),
            ("Parks visited".to_string(), parks),
        ]
    })
}

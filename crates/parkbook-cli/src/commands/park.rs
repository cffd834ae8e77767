//! Park command

use clap::Args;
use parkbook_core::ParkReport;
use serde::Serialize;

use super::{trip_table, TripRow};
use crate::output::{format_output, Table};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct ParkArgs {
    /// Park name
    pub name: String,
}

#[derive(Debug, Serialize)]
struct ParkView {
    #[serde(flatten)]
    report: ParkReport,
    visitors: Vec<String>,
    trips: Vec<TripRow>,
}

pub fn run(args: &ParkArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<String> {
    tracing::debug!("Running park command for: {}", args.name);
    let world = &ctx.world;

    let id = world
        .find_park(&args.name)
        .ok_or_else(|| anyhow::anyhow!("Park '{}' not found in scenario", args.name))?;
    let report = world
        .park_report(id)
        .ok_or_else(|| anyhow::anyhow!("Park '{}' not found in scenario", args.name))?;

    let mut visitor_ids: Vec<_> = world.park_visitors(id).into_iter().collect();
    visitor_ids.sort();

    let view = ParkView {
        report,
        visitors: visitor_ids
            .into_iter()
            .filter_map(|v| world.visitor(v).map(|v| v.name().to_string()))
            .collect(),
        trips: world.park_trips(id).map(|t| TripRow::new(world, t)).collect(),
    };

    format_output(&view, cli.output_format(), |view| {
        let mut summary = Table::new(&["Park", "Visits", "Visitors", "Best visitor"]);
        summary.row(vec![
            view.report.name.clone(),
            view.report.total_visits.to_string(),
            view.report.distinct_visitors.to_string(),
            view.report.best_visitor.clone().unwrap_or_else(|| "-".to_string()),
        ]);
        vec![
            ("Summary".to_string(), summary),
            (format!("Trips to {}", view.report.name), trip_table(&view.trips)),
        ]
    })
}

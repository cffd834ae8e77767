//! Report command - every park plus the most visited one

use parkbook_core::ParkReport;
use serde::Serialize;

use crate::output::{format_output, Table};
use crate::{AppContext, Cli};

#[derive(Debug, Serialize)]
struct Report {
    parks: Vec<ParkReport>,
    most_visited: Option<String>,
}

pub fn run(cli: &Cli, ctx: &AppContext) -> anyhow::Result<String> {
    let world = &ctx.world;

    let report = Report {
        parks: world
            .parks()
            .iter()
            .filter_map(|p| world.park_report(p.id()))
            .collect(),
        most_visited: world
            .most_visited()
            .and_then(|id| world.park(id))
            .map(|p| p.name().to_string()),
    };

    format_output(&report, cli.output_format(), |report| {
        let mut parks = Table::new(&["Park", "Visits", "Visitors", "Best visitor"]);
        for p in &report.parks {
            parks.row(vec![
                p.name.clone(),
                p.total_visits.to_string(),
                p.distinct_visitors.to_string(),
                p.best_visitor.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        let mut most = Table::new(&["Most visited"]);
        if let Some(name) = &report.most_visited {
            most.row(vec![name.clone()]);
        }
        vec![("Parks".to_string(), parks), ("Most visited".to_string(), most)]
    })
}

//! Trips command

use super::{trip_table, TripRow};
use crate::output::format_output;
use crate::{AppContext, Cli};

pub fn run(cli: &Cli, ctx: &AppContext) -> anyhow::Result<String> {
    let world = &ctx.world;
    let rows: Vec<TripRow> = world
        .trips()
        .iter()
        .map(|t| TripRow::new(world, t))
        .collect();
    tracing::debug!("Listing {} trips", rows.len());

    format_output(&rows, cli.output_format(), |rows| {
        vec![("Trips".to_string(), trip_table(rows))]
    })
}

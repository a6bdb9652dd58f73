mod cli;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use tabsift::data::loader;
use tabsift::query::{self, AggregationRequest};
use tabsift::render;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let aggregation = AggregationRequest::from_parts(cli.aggregate_column, cli.agg_type)?;
    let dataset = loader::load_file(&cli.file)?;

    let outcome = query::run(
        &dataset.rows,
        &cli.conditions,
        cli.order_by.as_deref(),
        aggregation.as_ref(),
    )?;

    println!("{}", render::render(&outcome, &dataset.columns, cli.format)?);
    Ok(())
}

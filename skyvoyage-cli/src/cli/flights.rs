use clap::Args;
use skyvoyage_core::{ResultsFilter, SortKey};
use skyvoyage_store::{app_config::Config, BookingStore};

use crate::render;

#[derive(Debug, Args)]
pub(crate) struct FlightsArgs {
    /// Order by price, duration or departure
    #[arg(long)]
    sort: Option<SortKey>,
}

pub(crate) fn run(args: FlightsArgs, config: &Config) -> anyhow::Result<()> {
    let store = BookingStore::from_config(config)?;
    let flights = store.catalog().flights();

    let view: Vec<_> = match args.sort {
        Some(sort_by) => ResultsFilter {
            sort_by,
            ..ResultsFilter::with_price_ceiling(u32::MAX)
        }
        .apply(flights),
        None => flights.iter().collect(),
    };

    println!("{}", render::flights_table(&view));
    println!("{} flights in catalog", flights.len());
    Ok(())
}

use clap::Args;
use skyvoyage_core::refine::{carriers, price_bounds};
use skyvoyage_core::{ResultsFilter, SortKey};
use skyvoyage_store::{app_config::Config, BookingStore};

use super::RouteArgs;
use crate::render;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    #[command(flatten)]
    pub(super) route: RouteArgs,

    /// Number of travellers
    #[arg(long, default_value_t = 1)]
    passengers: u32,

    /// Order by price, duration or departure
    #[arg(long, default_value_t = SortKey::Price)]
    sort: SortKey,

    /// Only show these carriers (repeatable)
    #[arg(long = "airline")]
    airlines: Vec<String>,

    #[arg(long)]
    min_price: Option<u32>,

    /// Defaults to the configured price ceiling
    #[arg(long)]
    max_price: Option<u32>,
}

pub(crate) fn run(args: SearchArgs, config: &Config) -> anyhow::Result<()> {
    let mut store = BookingStore::from_config(config)?;

    let criteria = args.route.criteria(store.criteria(), args.passengers);
    store.set_search_criteria(criteria);
    let results = store.run_search();

    if results.is_empty() {
        println!("No flights match this search.");
        return Ok(());
    }

    if let Some((min, max)) = price_bounds(results) {
        println!("Fares from ${} to ${}", min, max);
    }
    println!("Airlines: {}", carriers(results).join(", "));

    let filter = ResultsFilter {
        sort_by: args.sort,
        airlines: args.airlines,
        price_range: (
            args.min_price.unwrap_or(0),
            args.max_price.unwrap_or(config.search.default_price_ceiling),
        ),
    };
    let view = store.refined_results(&filter);

    println!("{}", render::criteria_line(store.criteria()));
    println!("{}", render::flights_table(&view));
    println!("{} flights found", view.len());
    Ok(())
}

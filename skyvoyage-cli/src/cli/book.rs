use anyhow::{bail, Context};
use clap::Args;
use skyvoyage_core::validation::validate;
use skyvoyage_core::PassengerDraft;
use skyvoyage_store::{app_config::Config, BookingStore};
use std::path::{Path, PathBuf};

use super::RouteArgs;
use crate::render;

#[derive(Debug, Args)]
pub(crate) struct BookArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Catalog id of the flight to book, as shown by `search`
    #[arg(long)]
    flight: u32,

    /// JSON array of passenger drafts; the first entry is the primary contact
    #[arg(long)]
    passenger_file: PathBuf,

    /// Print the confirmed booking as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(args: BookArgs, config: &Config) -> anyhow::Result<()> {
    let drafts = load_drafts(&args.passenger_file)?;
    if drafts.is_empty() {
        bail!("{} lists no passengers", args.passenger_file.display());
    }

    let mut store = BookingStore::from_config(config)?;

    let criteria = args.route.criteria(store.criteria(), drafts.len() as u32);
    store.set_search_criteria(criteria);
    store.run_search();
    store
        .select_flight_by_id(args.flight)
        .with_context(|| format!("flight {} is not offered for this search", args.flight))?;

    store.set_passenger_drafts(drafts);

    let errors = validate(store.passenger_drafts());
    if !errors.is_empty() {
        eprintln!("Please correct the following errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("passenger details are incomplete ({} problem(s))", errors.len());
    }

    let id = store.create_booking()?;
    let booking = store
        .get_booking(id.as_str())
        .with_context(|| format!("booking {} vanished after creation", id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(booking)?);
        return Ok(());
    }

    let fare = store.fare_breakdown();
    println!("{}", render::confirmation(booking, fare.as_ref()));
    Ok(())
}

/// Drafts are re-indexed by their position in the file
fn load_drafts(path: &Path) -> anyhow::Result<Vec<PassengerDraft>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut drafts: Vec<PassengerDraft> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a list of passengers", path.display()))?;

    for (position, draft) in drafts.iter_mut().enumerate() {
        draft.index = position;
    }
    Ok(drafts)
}

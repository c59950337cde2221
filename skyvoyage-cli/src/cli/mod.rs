use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use skyvoyage_catalog::CabinClass;
use skyvoyage_core::SearchCriteria;
use skyvoyage_store::app_config::Config;

mod book;
mod flights;
mod search;

#[derive(Debug, Parser)]
#[command(name = "skyvoyage", about = "Flight search and booking demo", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every flight in the catalog
    Flights(flights::FlightsArgs),
    /// Search the catalog and show refined results
    Search(search::SearchArgs),
    /// Search, pick a flight and book it for the passengers in a JSON file
    Book(book::BookArgs),
}

impl Cli {
    pub(crate) fn run(self, config: &Config) -> anyhow::Result<()> {
        match self.command {
            Commands::Flights(args) => flights::run(args, config),
            Commands::Search(args) => search::run(args, config),
            Commands::Book(args) => book::run(args, config),
        }
    }
}

/// Search form fields shared by `search` and `book`
#[derive(Debug, Args)]
pub(crate) struct RouteArgs {
    /// Origin city or airport code; empty matches everything
    #[arg(long, default_value = "")]
    from: String,

    /// Destination city or airport code; empty matches everything
    #[arg(long, default_value = "")]
    to: String,

    /// Departure date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    depart: Option<NaiveDate>,

    /// Return date (YYYY-MM-DD), defaults to a week after today
    #[arg(long = "return", conflicts_with = "one_way")]
    return_date: Option<NaiveDate>,

    /// Drop the return leg
    #[arg(long)]
    one_way: bool,

    /// Cabin class, e.g. economy or premium-economy
    #[arg(long)]
    cabin: Option<CabinClass>,
}

impl RouteArgs {
    /// Overlay the given fields on the session's default criteria
    pub(crate) fn criteria(&self, defaults: &SearchCriteria, passengers: u32) -> SearchCriteria {
        let depart = self.depart.unwrap_or(defaults.depart_date);
        let return_date = if self.one_way {
            None
        } else {
            self.return_date.or(defaults.return_date)
        };

        defaults
            .clone()
            .with_route(self.from.trim(), self.to.trim())
            .with_dates(depart, return_date)
            .with_passengers(passengers)
            .with_cabin(self.cabin.unwrap_or(defaults.cabin_class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_text_is_trimmed() {
        let cli = Cli::parse_from(["skyvoyage", "search", "--from", "  New York ", "--to", " CDG"]);
        let Commands::Search(args) = cli.command else {
            panic!("expected the search command");
        };

        let criteria = args.route.criteria(&SearchCriteria::default(), 1);
        assert_eq!(criteria.origin, "New York");
        assert_eq!(criteria.destination, "CDG");
    }
}

use serde::{Deserialize, Serialize};
use chrono::{Days, Local, NaiveDate};
use skyvoyage_catalog::{CabinClass, FlightCatalog, FlightRecord};

/// Days between the default departure and the default return date
pub const DEFAULT_RETURN_OFFSET_DAYS: u64 = 7;

/// Search parameters as submitted by the search form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub depart_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cabin_class: CabinClass,
}

impl SearchCriteria {
    /// Form defaults anchored on `today`: no route, one passenger in Economy,
    /// returning `return_offset_days` later.
    pub fn starting(today: NaiveDate, return_offset_days: u64) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            depart_date: today,
            return_date: today.checked_add_days(Days::new(return_offset_days)),
            passengers: 1,
            cabin_class: CabinClass::Economy,
        }
    }

    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// At least one passenger is always kept
    pub fn with_passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers.max(1);
        self
    }

    pub fn with_cabin(mut self, cabin_class: CabinClass) -> Self {
        self.cabin_class = cabin_class;
        self
    }

    pub fn with_dates(mut self, depart_date: NaiveDate, return_date: Option<NaiveDate>) -> Self {
        self.depart_date = depart_date;
        self.return_date = return_date;
        self
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_date.is_some()
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::starting(Local::now().date_naive(), DEFAULT_RETURN_OFFSET_DAYS)
    }
}

/// Filter the catalog by origin and destination, preserving catalog order.
///
/// Each side matches when the query is empty, is a case-insensitive substring of
/// the city, or equals the airport code ignoring case.
pub fn search(criteria: &SearchCriteria, catalog: &FlightCatalog) -> Vec<FlightRecord> {
    let origin = criteria.origin.to_lowercase();
    let destination = criteria.destination.to_lowercase();

    catalog
        .iter()
        .filter(|flight| {
            matches_place(&origin, &flight.departure_city, &flight.departure_code)
                && matches_place(&destination, &flight.arrival_city, &flight.arrival_code)
        })
        .cloned()
        .collect()
}

/// `query` must already be lowercased
fn matches_place(query: &str, city: &str, code: &str) -> bool {
    query.is_empty() || city.to_lowercase().contains(query) || code.to_lowercase() == query
}

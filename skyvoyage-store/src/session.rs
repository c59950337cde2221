use chrono::{Local, Utc};
use skyvoyage_catalog::{FareBreakdown, FlightCatalog, FlightRecord};
use skyvoyage_core::passenger::blank_drafts;
use skyvoyage_core::{
    search, Booking, BookingId, PassengerDraft, PassengerField, ResultsFilter, SearchCriteria,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::app_config::{BookingRules, Config};
use crate::booking_id::{BookingIdGenerator, RandomBookingIds};
use crate::{StoreError, StoreResult};

/// Per-session search and booking state.
///
/// One store belongs to one user session; it is created by the composition root
/// and dropped when the session ends. Mutating operations take `&mut self`, so a
/// booking's id draw, collision check and insert cannot interleave with any
/// other store operation.
pub struct BookingStore {
    catalog: Arc<FlightCatalog>,
    criteria: SearchCriteria,
    /// `None` until the first search runs
    results: Option<Vec<FlightRecord>>,
    selected: Option<FlightRecord>,
    drafts: Vec<PassengerDraft>,
    bookings: HashMap<BookingId, Booking>,
    latest: Option<BookingId>,
    ids: Box<dyn BookingIdGenerator>,
    rules: BookingRules,
}

impl BookingStore {
    pub fn new(catalog: Arc<FlightCatalog>) -> Self {
        let rules = BookingRules::default();
        Self {
            catalog,
            criteria: SearchCriteria::default(),
            results: None,
            selected: None,
            drafts: Vec::new(),
            bookings: HashMap::new(),
            latest: None,
            ids: Box::new(RandomBookingIds::new(rules.id_prefix.clone())),
            rules,
        }
    }

    /// Session wired from configuration: catalog source, booking rules and form defaults
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => FlightCatalog::from_path(path)?,
            None => FlightCatalog::bundled()?,
        };

        let today = Local::now().date_naive();
        let mut store = Self::new(Arc::new(catalog)).with_rules(config.booking.clone());
        store.criteria = SearchCriteria::starting(today, config.search.return_offset_days);
        Ok(store)
    }

    /// Replace the booking rules; also resets the id generator to the rules' prefix
    pub fn with_rules(mut self, rules: BookingRules) -> Self {
        self.ids = Box::new(RandomBookingIds::new(rules.id_prefix.clone()));
        self.rules = rules;
        self
    }

    pub fn with_id_generator(mut self, ids: Box<dyn BookingIdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Replaces the criteria wholesale. Values are trusted as supplied.
    pub fn set_search_criteria(&mut self, criteria: SearchCriteria) {
        tracing::debug!(
            "Search criteria set: {:?} -> {:?}, {} passenger(s), {}",
            criteria.origin,
            criteria.destination,
            criteria.passengers,
            criteria.cabin_class
        );
        self.criteria = criteria;
    }

    /// Run the search engine on the current criteria and keep the results
    pub fn run_search(&mut self) -> &[FlightRecord] {
        let results = search(&self.criteria, &self.catalog);
        tracing::info!(
            "Search {:?} -> {:?} matched {} of {} flights",
            self.criteria.origin,
            self.criteria.destination,
            results.len(),
            self.catalog.len()
        );
        self.results.insert(results).as_slice()
    }

    /// `None` before any search; `Some(&[])` when a search matched nothing
    pub fn search_results(&self) -> Option<&[FlightRecord]> {
        self.results.as_deref()
    }

    /// Filtered and sorted view over the stored results
    pub fn refined_results(&self, filter: &ResultsFilter) -> Vec<&FlightRecord> {
        self.results
            .as_deref()
            .map(|results| filter.apply(results))
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn select_flight(&mut self, flight: Option<FlightRecord>) {
        match &flight {
            Some(f) => tracing::debug!("Selected flight {} ({})", f.flight_number, f.route()),
            None => tracing::debug!("Cleared flight selection"),
        }
        self.selected = flight;
    }

    /// Select from the current results, or from the catalog when no search has run yet
    pub fn select_flight_by_id(&mut self, id: u32) -> StoreResult<&FlightRecord> {
        let found = match &self.results {
            Some(results) => results.iter().find(|f| f.id == id),
            None => self.catalog.get(id),
        };

        let flight = found.cloned().ok_or(StoreError::FlightNotFound(id))?;
        self.select_flight(Some(flight));
        self.selected.as_ref().ok_or(StoreError::FlightNotFound(id))
    }

    pub fn selected_flight(&self) -> Option<&FlightRecord> {
        self.selected.as_ref()
    }

    // ------------------------------------------------------------------
    // Passengers
    // ------------------------------------------------------------------

    pub fn passenger_drafts(&self) -> &[PassengerDraft] {
        &self.drafts
    }

    pub fn set_passenger_drafts(&mut self, drafts: Vec<PassengerDraft>) {
        tracing::debug!("Passenger drafts replaced ({} entries)", drafts.len());
        self.drafts = drafts;
    }

    /// Seed one blank draft per passenger in the criteria, unless drafts already exist
    pub fn prepare_passenger_drafts(&mut self) -> &[PassengerDraft] {
        if self.drafts.is_empty() {
            self.drafts = blank_drafts(self.criteria.passengers.max(1) as usize);
        }
        &self.drafts
    }

    pub fn update_passenger(&mut self, index: usize, field: PassengerField) -> StoreResult<()> {
        let count = self.drafts.len();
        let draft = self
            .drafts
            .get_mut(index)
            .ok_or(StoreError::PassengerOutOfRange { index, count })?;
        draft.apply(field);
        Ok(())
    }

    /// Price summary for the selected flight and current drafts
    pub fn fare_breakdown(&self) -> Option<FareBreakdown> {
        let flight = self.selected.as_ref()?;
        Some(FareBreakdown::compute(
            flight.price,
            self.drafts.len() as u32,
            self.rules.tax_rate,
        ))
    }

    // ------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------

    /// Finalize the selected flight and current drafts into a confirmed booking.
    ///
    /// Drafts are not validated here; callers gate on `validation::validate`.
    pub fn create_booking(&mut self) -> StoreResult<BookingId> {
        let Some(flight) = self.selected.clone() else {
            tracing::warn!("Booking rejected: no flight selected");
            return Err(StoreError::Precondition("no flight selected"));
        };
        if self.drafts.is_empty() {
            tracing::warn!("Booking rejected: no passenger information");
            return Err(StoreError::Precondition("no passenger information"));
        }

        let id = self.allocate_id()?;
        let booking = Booking::confirmed(id.clone(), flight, self.drafts.clone(), Utc::now());

        tracing::info!(
            "Booking {} confirmed: {} for {} passenger(s), total {}",
            booking.id,
            booking.flight.flight_number,
            booking.passenger_count(),
            booking.total_price
        );

        self.bookings.insert(id.clone(), booking);
        self.latest = Some(id.clone());
        Ok(id)
    }

    /// Draw ids until one is unbound
    fn allocate_id(&mut self) -> StoreResult<BookingId> {
        let attempts = self.rules.max_id_attempts.max(1);
        for _ in 0..attempts {
            let id = self.ids.generate();
            if !self.bookings.contains_key(&id) {
                return Ok(id);
            }
            tracing::warn!("Booking id {} already taken, drawing again", id);
        }
        Err(StoreError::IdSpaceExhausted(attempts))
    }

    pub fn get_booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.get(id)
    }

    /// Most recently created booking in this session
    pub fn latest_booking(&self) -> Option<&Booking> {
        self.latest.as_ref().and_then(|id| self.bookings.get(id))
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}

use serde::{Deserialize, Serialize};
use skyvoyage_catalog::FlightRecord;
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Upper bound of the price slider before the user moves it
pub const DEFAULT_PRICE_CEILING: u32 = 2000;

/// Result ordering offered on the results page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::Departure => "departure",
        };
        f.write_str(label)
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "duration" => Ok(SortKey::Duration),
            "departure" => Ok(SortKey::Departure),
            _ => Err(CoreError::UnknownValue {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

/// Client-side view over stored search results: airline and price filters plus ordering.
///
/// Never touches the stored results themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultsFilter {
    pub sort_by: SortKey,
    /// Empty means every carrier
    pub airlines: Vec<String>,
    /// Inclusive bounds on the per-passenger price
    pub price_range: (u32, u32),
}

impl Default for ResultsFilter {
    fn default() -> Self {
        Self {
            sort_by: SortKey::default(),
            airlines: Vec::new(),
            price_range: (0, DEFAULT_PRICE_CEILING),
        }
    }
}

impl ResultsFilter {
    pub fn with_price_ceiling(ceiling: u32) -> Self {
        Self {
            price_range: (0, ceiling),
            ..Default::default()
        }
    }

    /// Add the carrier to the filter, or remove it if already present
    pub fn toggle_airline(&mut self, airline: &str) {
        if let Some(pos) = self.airlines.iter().position(|a| a == airline) {
            self.airlines.remove(pos);
        } else {
            self.airlines.push(airline.to_string());
        }
    }

    pub fn accepts(&self, flight: &FlightRecord) -> bool {
        let (min, max) = self.price_range;
        (self.airlines.is_empty() || self.airlines.iter().any(|a| a == &flight.airline))
            && flight.price >= min
            && flight.price <= max
    }

    /// Filtered and sorted view. The sort is stable, so ties keep catalog order.
    pub fn apply<'a>(&self, results: &'a [FlightRecord]) -> Vec<&'a FlightRecord> {
        let mut view: Vec<&FlightRecord> = results.iter().filter(|f| self.accepts(f)).collect();

        match self.sort_by {
            SortKey::Price => view.sort_by_key(|f| f.price),
            SortKey::Duration => view.sort_by_key(|f| f.duration_minutes),
            SortKey::Departure => view.sort_by_key(|f| f.departure_time),
        }

        view
    }
}

/// Distinct carriers in first-seen order
pub fn carriers(results: &[FlightRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for flight in results {
        if !seen.contains(&flight.airline.as_str()) {
            seen.push(&flight.airline);
        }
    }
    seen
}

/// Cheapest and most expensive fare, or `None` for an empty result set
pub fn price_bounds(results: &[FlightRecord]) -> Option<(u32, u32)> {
    let min = results.iter().map(|f| f.price).min()?;
    let max = results.iter().map(|f| f.price).max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyvoyage_catalog::FlightCatalog;

    fn flights() -> Vec<FlightRecord> {
        FlightCatalog::bundled().unwrap().flights().to_vec()
    }

    #[test]
    fn test_default_filter_sorts_by_price() {
        let flights = flights();
        let view = ResultsFilter::default().apply(&flights);

        assert_eq!(view.len(), flights.len());
        assert!(view.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(view[0].flight_number, "AF1404");

        let capped = ResultsFilter::with_price_ceiling(1000).apply(&flights);
        assert!(capped.iter().all(|f| f.price <= 1000));
        assert_eq!(capped.len(), flights.len() - 4);
    }

    #[test]
    fn test_airline_filter_and_toggle() {
        let flights = flights();
        let mut filter = ResultsFilter::default();
        filter.toggle_airline("Air France");

        let view = filter.apply(&flights);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|f| f.airline == "Air France"));

        filter.toggle_airline("Air France");
        assert!(filter.airlines.is_empty());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let flights = flights();
        let filter = ResultsFilter {
            price_range: (449, 512),
            ..Default::default()
        };
        let prices: Vec<u32> = filter.apply(&flights).iter().map(|f| f.price).collect();
        assert_eq!(prices, vec![449, 478, 512]);
    }

    #[test]
    fn test_sort_by_duration_and_departure() {
        let flights = flights();
        let by_duration = ResultsFilter {
            sort_by: SortKey::Duration,
            ..ResultsFilter::with_price_ceiling(u32::MAX)
        }
        .apply(&flights);
        assert!(by_duration.windows(2).all(|w| w[0].duration_minutes <= w[1].duration_minutes));

        let by_departure = ResultsFilter {
            sort_by: SortKey::Departure,
            ..ResultsFilter::with_price_ceiling(u32::MAX)
        }
        .apply(&flights);
        assert!(by_departure.windows(2).all(|w| w[0].departure_time <= w[1].departure_time));
        assert_eq!(by_departure.len(), flights.len());
    }

    #[test]
    fn test_carriers_and_bounds() {
        let flights = flights();
        let names = carriers(&flights);
        assert_eq!(names[0], "Air France");
        assert_eq!(names.iter().filter(|n| **n == "Air France").count(), 1);

        assert_eq!(price_bounds(&flights), Some((129, 1540)));
        assert_eq!(price_bounds(&[]), None);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("Duration".parse::<SortKey>().unwrap(), SortKey::Duration);
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Cabin classes offered on the search form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CabinClass {
    #[default]
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown cabin class: {0}")]
pub struct UnknownCabinClass(pub String);

impl FromStr for CabinClass {
    type Err = UnknownCabinClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "economy" => Ok(CabinClass::Economy),
            "premium economy" => Ok(CabinClass::PremiumEconomy),
            "business" => Ok(CabinClass::Business),
            "first" => Ok(CabinClass::First),
            _ => Err(UnknownCabinClass(s.to_string())),
        }
    }
}

/// A scheduled flight in the catalog. Never mutated once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightRecord {
    pub id: u32,
    pub airline: String,
    #[serde(default)]
    pub airline_logo: Option<String>,
    pub flight_number: String,
    pub departure_city: String,
    pub departure_code: String,
    pub departure_time: NaiveDateTime,
    pub arrival_city: String,
    pub arrival_code: String,
    pub arrival_time: NaiveDateTime,
    pub duration_minutes: u32,
    pub stops: u32,
    /// Per-passenger fare in whole currency units
    pub price: u32,
    #[serde(default)]
    pub cabin_class: CabinClass,
    #[serde(default)]
    pub aircraft: Option<String>,
}

impl FlightRecord {
    /// Route label such as `NYC-CDG`
    pub fn route(&self) -> String {
        format!("{}-{}", self.departure_code, self.arrival_code)
    }

    pub fn is_nonstop(&self) -> bool {
        self.stops == 0
    }

    /// Record-level invariants that the type system does not already cover.
    pub fn check(&self) -> Result<(), String> {
        if self.arrival_time <= self.departure_time {
            return Err(format!(
                "arrival {} is not after departure {}",
                self.arrival_time, self.departure_time
            ));
        }
        if self.departure_code.trim().is_empty() || self.arrival_code.trim().is_empty() {
            return Err("airport code is empty".to_string());
        }
        if self.flight_number.trim().is_empty() {
            return Err("flight number is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlightRecord {
        FlightRecord {
            id: 1,
            airline: "Air France".to_string(),
            airline_logo: None,
            flight_number: "AF007".to_string(),
            departure_city: "New York".to_string(),
            departure_code: "NYC".to_string(),
            departure_time: "2026-11-14T19:30:00".parse().unwrap(),
            arrival_city: "Paris".to_string(),
            arrival_code: "CDG".to_string(),
            arrival_time: "2026-11-15T08:55:00".parse().unwrap(),
            duration_minutes: 445,
            stops: 0,
            price: 449,
            cabin_class: CabinClass::Economy,
            aircraft: Some("Boeing 777-300ER".to_string()),
        }
    }

    #[test]
    fn test_cabin_class_parsing() {
        assert_eq!("economy".parse::<CabinClass>().unwrap(), CabinClass::Economy);
        assert_eq!("Premium Economy".parse::<CabinClass>().unwrap(), CabinClass::PremiumEconomy);
        assert_eq!("premium-economy".parse::<CabinClass>().unwrap(), CabinClass::PremiumEconomy);
        assert_eq!("FIRST".parse::<CabinClass>().unwrap(), CabinClass::First);
        assert!("steerage".parse::<CabinClass>().is_err());
    }

    #[test]
    fn test_cabin_class_serde_uses_display_names() {
        let json = serde_json::to_string(&CabinClass::PremiumEconomy).unwrap();
        assert_eq!(json, "\"Premium Economy\"");
        for cabin in CabinClass::ALL {
            let back: CabinClass = serde_json::from_str(&format!("\"{}\"", cabin)).unwrap();
            assert_eq!(back, cabin);
        }
    }

    #[test]
    fn test_flight_check() {
        let flight = sample();
        assert!(flight.check().is_ok());
        assert_eq!(flight.route(), "NYC-CDG");
        assert!(flight.is_nonstop());

        let mut backwards = sample();
        backwards.arrival_time = backwards.departure_time;
        assert!(backwards.check().is_err());
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use skyvoyage_catalog::FlightRecord;
use std::borrow::Borrow;
use std::fmt;

use crate::passenger::PassengerDraft;

/// Human-readable booking reference such as `SV-042917`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for BookingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by BookingId be queried with a plain &str
impl Borrow<str> for BookingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Finalized reservation. The flight is captured by value, so later catalog
/// changes never reach an existing booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub flight: FlightRecord,
    pub passengers: Vec<PassengerDraft>,
    /// flight.price * passengers.len()
    pub total_price: u64,
    pub created_at: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    /// Snapshot a confirmed booking
    pub fn confirmed(
        id: BookingId,
        flight: FlightRecord,
        passengers: Vec<PassengerDraft>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total_price = u64::from(flight.price) * passengers.len() as u64;
        Self {
            id,
            flight,
            passengers,
            total_price,
            created_at,
            status: BookingStatus::Confirmed,
        }
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn primary_contact(&self) -> Option<&PassengerDraft> {
        self.passengers.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::blank_drafts;
    use skyvoyage_catalog::FlightCatalog;

    #[test]
    fn test_confirmed_booking_totals() {
        let flight = FlightCatalog::bundled().unwrap().get(1).cloned().unwrap();
        let booking = Booking::confirmed(BookingId::from("SV-000001"), flight, blank_drafts(2), Utc::now());

        assert_eq!(booking.total_price, 898);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.passenger_count(), 2);
        assert!(booking.primary_contact().unwrap().is_primary_contact());
    }

    #[test]
    fn test_booking_id_serializes_as_string() {
        let id = BookingId::new("SV-123456");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SV-123456\"");
        assert_eq!(id.to_string(), "SV-123456");
    }
}

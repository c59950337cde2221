use skyvoyage_catalog::{FareBreakdown, FlightRecord};
use skyvoyage_core::format::{format_duration, format_stops};
use skyvoyage_core::{Booking, SearchCriteria};
use std::fmt::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FlightRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Airline")]
    airline: String,
    #[tabled(rename = "Flight")]
    flight_number: String,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Departs")]
    departs: String,
    #[tabled(rename = "Arrives")]
    arrives: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Stops")]
    stops: String,
    #[tabled(rename = "Cabin")]
    cabin: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&FlightRecord> for FlightRow {
    fn from(flight: &FlightRecord) -> Self {
        Self {
            id: flight.id,
            airline: flight.airline.clone(),
            flight_number: flight.flight_number.clone(),
            route: format!(
                "{} ({}) -> {} ({})",
                flight.departure_city, flight.departure_code, flight.arrival_city, flight.arrival_code
            ),
            departs: flight.departure_time.format("%b %-d, %H:%M").to_string(),
            arrives: flight.arrival_time.format("%b %-d, %H:%M").to_string(),
            duration: format_duration(flight.duration_minutes),
            stops: format_stops(flight.stops),
            cabin: flight.cabin_class.to_string(),
            price: format!("${}", flight.price),
        }
    }
}

pub(crate) fn flights_table(flights: &[&FlightRecord]) -> String {
    let rows: Vec<FlightRow> = flights.iter().map(|f| FlightRow::from(*f)).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// One-line recap of the search, e.g. `new york to CDG • Nov 14, 2026 - Nov 21, 2026 • 2 Passengers • Economy`
pub(crate) fn criteria_line(criteria: &SearchCriteria) -> String {
    let from = non_empty_or(&criteria.origin, "Any Origin");
    let to = non_empty_or(&criteria.destination, "Any Destination");

    let mut dates = criteria.depart_date.format("%b %-d, %Y").to_string();
    if let Some(return_date) = criteria.return_date {
        let _ = write!(dates, " - {}", return_date.format("%b %-d, %Y"));
    }

    let travellers = if criteria.passengers == 1 { "Passenger" } else { "Passengers" };
    format!(
        "{} to {} • {} • {} {} • {}",
        from, to, dates, criteria.passengers, travellers, criteria.cabin_class
    )
}

pub(crate) fn confirmation(booking: &Booking, fare: Option<&FareBreakdown>) -> String {
    let flight = &booking.flight;
    let mut out = String::new();

    let _ = writeln!(out, "Booking {} is {}", booking.id, booking.status);
    let _ = writeln!(out, "Booked at {}", booking.created_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(
        out,
        "{} {}  {} ({}) -> {} ({})",
        flight.airline,
        flight.flight_number,
        flight.departure_city,
        flight.departure_code,
        flight.arrival_city,
        flight.arrival_code
    );
    let _ = writeln!(
        out,
        "{} - {}  {}, {}",
        flight.departure_time.format("%a %b %-d, %Y %H:%M"),
        flight.arrival_time.format("%H:%M"),
        format_duration(flight.duration_minutes),
        format_stops(flight.stops)
    );

    let _ = writeln!(out, "Passengers:");
    for (position, passenger) in booking.passengers.iter().enumerate() {
        let mut line = format!("  {}. {}", position + 1, passenger.full_name());
        if let Some(passport) = &passenger.passport_number {
            let _ = write!(line, "  passport {}", passport.hint());
        }
        let _ = write!(line, "  meal {}", passenger.meal_preference);
        if passenger.special_assistance {
            line.push_str("  (special assistance)");
        }
        let _ = writeln!(out, "{}", line);
    }

    if let Some(contact) = booking.primary_contact() {
        let email = contact.email.as_deref().unwrap_or("-");
        let phone = contact.phone.as_deref().unwrap_or("-");
        let _ = writeln!(out, "Contact: {} / {}", email, phone);
    }

    match fare {
        Some(fare) => {
            let _ = writeln!(out, "Base fare ({} x ${}): ${}", fare.passengers, fare.per_passenger, fare.base);
            let _ = writeln!(out, "Taxes and fees: ${}", fare.taxes);
            let _ = write!(out, "Total: ${}", fare.grand_total);
        }
        None => {
            let _ = write!(out, "Total: ${}", booking.total_price);
        }
    }

    out
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use skyvoyage_catalog::{FlightCatalog, DEFAULT_TAX_RATE};
    use skyvoyage_core::{BookingId, PassengerDraft, PassengerField};

    #[test]
    fn test_flights_table_lists_rows() {
        let catalog = FlightCatalog::bundled().unwrap();
        let flights: Vec<&FlightRecord> = catalog.iter().take(2).collect();
        let table = flights_table(&flights);
        assert!(table.contains("AF007"));
        assert!(table.contains("DL264"));
        assert!(table.contains("7h 25m"));
        assert!(table.contains("Nonstop"));
    }

    #[test]
    fn test_criteria_line() {
        let criteria = SearchCriteria::starting(NaiveDate::from_ymd_opt(2026, 11, 14).unwrap(), 7)
            .with_passengers(2);
        assert_eq!(
            criteria_line(&criteria),
            "Any Origin to Any Destination • Nov 14, 2026 - Nov 21, 2026 • 2 Passengers • Economy"
        );
    }

    #[test]
    fn test_confirmation_masks_passport() {
        let flight = FlightCatalog::bundled().unwrap().get(1).cloned().unwrap();
        let mut primary = PassengerDraft::blank(0);
        primary.apply(PassengerField::FirstName("Amara".to_string()));
        primary.apply(PassengerField::LastName("Okafor".to_string()));
        primary.apply(PassengerField::PassportNumber(Some("X1234567".to_string())));
        primary.apply(PassengerField::Email("amara@example.com".to_string()));

        let booking = Booking::confirmed(BookingId::from("SV-004211"), flight, vec![primary], Utc::now());
        let fare = FareBreakdown::compute(449, 1, DEFAULT_TAX_RATE);
        let text = confirmation(&booking, Some(&fare));

        assert!(text.contains("Booking SV-004211 is Confirmed"));
        assert!(text.contains("1. Amara Okafor"));
        assert!(text.contains("******67"));
        assert!(!text.contains("X1234567"));
        assert!(text.contains("Contact: amara@example.com"));
        assert!(text.ends_with("Total: $516"));
    }
}

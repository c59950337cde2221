use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyvoyage_core::BookingId;

/// Size of the numeric part of a booking id, `000000..=999999`
pub const BOOKING_NUMBER_SPACE: u32 = 1_000_000;

/// Source of booking identifiers.
///
/// Implementations are not required to be collision-free; the store checks
/// for an existing binding before inserting.
pub trait BookingIdGenerator: Send {
    fn generate(&mut self) -> BookingId;
}

/// `PREFIX-NNNNNN` with the number drawn uniformly from [`BOOKING_NUMBER_SPACE`]
pub struct RandomBookingIds {
    prefix: String,
    rng: StdRng,
}

impl RandomBookingIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for tests and demos
    pub fn seeded(prefix: impl Into<String>, seed: u64) -> Self {
        Self {
            prefix: prefix.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BookingIdGenerator for RandomBookingIds {
    fn generate(&mut self) -> BookingId {
        let number = self.rng.gen_range(0..BOOKING_NUMBER_SPACE);
        format_booking_id(&self.prefix, number)
    }
}

pub fn format_booking_id(prefix: &str, number: u32) -> BookingId {
    BookingId::new(format!("{}-{:06}", prefix, number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_zero_padded() {
        assert_eq!(format_booking_id("SV", 42).as_str(), "SV-000042");
        assert_eq!(format_booking_id("SV", 0).as_str(), "SV-000000");
        assert_eq!(format_booking_id("SV", 999_999).as_str(), "SV-999999");
    }

    #[test]
    fn test_random_ids_have_expected_shape() {
        let mut ids = RandomBookingIds::new("SV");
        for _ in 0..200 {
            let id = ids.generate();
            let (prefix, number) = id.as_str().split_once('-').unwrap();
            assert_eq!(prefix, "SV");
            assert_eq!(number.len(), 6);
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_seeded_sequence_repeats() {
        let mut a = RandomBookingIds::seeded("SV", 7);
        let mut b = RandomBookingIds::seeded("SV", 7);
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }
}

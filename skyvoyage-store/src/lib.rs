pub mod app_config;
pub mod booking_id;
pub mod session;

pub use booking_id::{BookingIdGenerator, RandomBookingIds};
pub use session::BookingStore;

use skyvoyage_catalog::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Cannot create booking: {0}")]
    Precondition(&'static str),

    #[error("Flight not found: {0}")]
    FlightNotFound(u32),

    #[error("No passenger at position {index} (have {count})")]
    PassengerOutOfRange {
        index: usize,
        count: usize,
    },

    #[error("Could not allocate an unused booking id after {0} attempts")]
    IdSpaceExhausted(u32),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub mod search;
pub mod refine;
pub mod passenger;
pub mod validation;
pub mod booking;
pub mod format;

pub use booking::{Booking, BookingId, BookingStatus};
pub use passenger::{Gender, MealPreference, PassengerDraft, PassengerField};
pub use refine::{ResultsFilter, SortKey};
pub use search::{search, SearchCriteria};
pub use validation::{validate, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {}", join_errors(.0))]
    ValidationFailed(Vec<ValidationError>),
    #[error("Unknown {kind}: {value}")]
    UnknownValue {
        kind: &'static str,
        value: String,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub mod flight;
pub mod catalog;
pub mod pricing;

pub use flight::{CabinClass, FlightRecord};
pub use catalog::{CatalogError, FlightCatalog};
pub use pricing::{FareBreakdown, DEFAULT_TAX_RATE};

use crate::flight::FlightRecord;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const BUNDLED_FLIGHTS: &str = include_str!("../data/flights.json");

/// Read-only flight catalog used as the search universe
///
/// Records keep their load order; search results are reported in that order.
#[derive(Debug, Clone)]
pub struct FlightCatalog {
    flights: Vec<FlightRecord>,
}

impl FlightCatalog {
    /// Build a catalog, rejecting records that break their invariants or reuse an id
    pub fn from_records(flights: Vec<FlightRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(flights.len());

        for flight in &flights {
            flight.check().map_err(|reason| CatalogError::InvalidRecord {
                id: flight.id,
                reason,
            })?;

            if !seen.insert(flight.id) {
                return Err(CatalogError::DuplicateId(flight.id));
            }
        }

        Ok(Self { flights })
    }

    /// The dataset shipped with the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_FLIGHTS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let flights: Vec<FlightRecord> = serde_json::from_str(json)?;
        Self::from_records(flights)
    }

    /// Load a replacement dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} flights from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: u32) -> Option<&FlightRecord> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlightRecord> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid flight record {id}: {reason}")]
    InvalidRecord {
        id: u32,
        reason: String,
    },

    #[error("Duplicate flight id: {0}")]
    DuplicateId(u32),

    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

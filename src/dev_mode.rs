/// Development mode utilities for working with canned data.
///
/// When the live AirKorea API is unavailable (no service key, no network,
/// portal maintenance), use this module to replay a captured API response
/// from disk for testing and development. The fixture goes through the
/// exact parse path live data does, so everything downstream behaves
/// identically.

use std::path::{Path, PathBuf};

use crate::ingest::airkorea::{self, DnstyItem};
use crate::logging;
use crate::model::AirKoreaError;

/// Configuration for development mode data replay.
pub struct DevMode {
    /// Path to a captured `getMsrstnAcctoRltmMesureDnsty` JSON response.
    pub fixture_path: PathBuf,
}

impl DevMode {
    /// Create a new dev mode configuration for a fixture file.
    pub fn new(fixture_path: impl AsRef<Path>) -> Self {
        Self {
            fixture_path: fixture_path.as_ref().to_path_buf(),
        }
    }

    /// Load the fixture's rows as if they had just been fetched.
    ///
    /// `station` names the station the fixture stands in for; it only
    /// feeds error reporting, the fixture content is returned verbatim.
    pub fn load_items(&self, station: &str) -> Result<Vec<DnstyItem>, AirKoreaError> {
        let json = std::fs::read_to_string(&self.fixture_path).map_err(|e| {
            AirKoreaError::RequestError(format!(
                "failed to read fixture {}: {}",
                self.fixture_path.display(),
                e
            ))
        })?;

        let items = airkorea::parse_response(&json, station)?;

        logging::info(
            logging::DataSource::Fixture,
            Some(station),
            &format!(
                "Replayed {} rows from {}",
                items.len(),
                self.fixture_path.display()
            ),
        );

        Ok(items)
    }
}

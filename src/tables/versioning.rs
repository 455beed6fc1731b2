use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{dataset, StaticTables};
use crate::types::{CalendarError, Result};

/// Content hash identifying one revision of the embedded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetVersion(String);

impl DatasetVersion {
    /// The version this build was verified against.
    pub fn pinned() -> Self {
        DatasetVersion(dataset::DATASET_SHA256.to_string())
    }

    pub fn new(version: impl Into<String>) -> Self {
        DatasetVersion(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StaticTables {
    /// Hash of the year masks (little-endian `u32`), the term days and the
    /// trailing 小寒 of 2101.
    pub fn fingerprint(&self) -> DatasetVersion {
        let mut hasher = Sha256::new();
        for info in self.raw_year_info() {
            hasher.update(info.to_le_bytes());
        }
        for days in self.raw_solar_term_days() {
            hasher.update(days);
        }
        hasher.update([self.raw_next_xiao_han_day()]);

        let hex = hex::encode(hasher.finalize());
        DatasetVersion(format!("sha256:{hex}"))
    }

    /// Recompute the fingerprint and compare it to `expected`.
    pub fn verify(&self, expected: &DatasetVersion) -> Result<DatasetVersion> {
        let actual = self.fingerprint();
        if &actual != expected {
            return Err(CalendarError::InvariantViolation(format!(
                "dataset version mismatch: expected {}, tables hash to {}",
                expected.as_str(),
                actual.as_str(),
            )));
        }
        Ok(actual)
    }
}

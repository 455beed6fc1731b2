use serde::{Deserialize, Serialize};

use crate::tables::DatasetVersion;
use crate::types::{CalendarError, Gender, Result};

/// Calculator settings.
///
/// Every field is explicit so two deployments with equal configs produce
/// identical charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartConfig {
    /// Fingerprint the embedded tables must hash to.
    pub dataset_version: DatasetVersion,
    /// Used when the input carries no gender.
    #[serde(default)]
    pub default_gender: Gender,
}

impl ChartConfig {
    pub fn v0() -> Self {
        Self {
            dataset_version: DatasetVersion::pinned(),
            default_gender: Gender::Male,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CalendarError::malformed("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The dataset version must name a SHA-256 digest.
    pub fn validate(&self) -> Result<()> {
        if !self.dataset_version.as_str().starts_with("sha256:") {
            return Err(CalendarError::malformed(
                "datasetVersion",
                self.dataset_version.as_str(),
            ));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::v0()
    }
}

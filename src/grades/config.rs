use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

use super::{GradeCatalog, GradeScale, GradeTable};

pub const GRADE_CATALOG_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Serializable catalog setup: built-in data plus per-scale overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCatalogConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub overrides: IndexMap<GradeScale, GradeTable>,
}

fn default_schema_version() -> u32 {
    GRADE_CATALOG_CONFIG_JSON_SCHEMA_V1
}

impl Default for GradeCatalogConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            overrides: IndexMap::new(),
        }
    }
}

impl GradeCatalogConfig {
    #[must_use]
    pub fn with_override(mut self, scale: GradeScale, table: GradeTable) -> Self {
        self.overrides.insert(scale, table);
        self
    }

    /// Applies overrides, in declaration order, on top of the built-in catalog.
    pub fn build(&self) -> StatsResult<GradeCatalog> {
        self.overrides
            .iter()
            .try_fold(GradeCatalog::builtin(), |catalog, (&scale, table)| {
                catalog.with_table(scale, table.clone())
            })
    }

    pub fn from_json_str(input: &str) -> StatsResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            StatsError::InvalidData(format!("failed to parse grade catalog config: {e}"))
        })?;
        if config.schema_version != GRADE_CATALOG_CONFIG_JSON_SCHEMA_V1 {
            return Err(StatsError::InvalidData(format!(
                "unsupported grade catalog config schema version: {}",
                config.schema_version
            )));
        }
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> StatsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            StatsError::InvalidData(format!("failed to serialize grade catalog config: {e}"))
        })
    }
}

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::{BarChartGeometry, LineChartGeometry};
use crate::error::{StatsError, StatsResult};

use super::{BarChartConfig, LineChartConfig};

fn to_json_pretty<T: Serialize>(value: &T, what: &str) -> StatsResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| StatsError::InvalidData(format!("failed to serialize {what}: {e}")))
}

fn from_json_str<T: DeserializeOwned>(input: &str, what: &str) -> StatsResult<T> {
    serde_json::from_str(input)
        .map_err(|e| StatsError::InvalidData(format!("failed to parse {what}: {e}")))
}

impl BarChartConfig {
    pub fn to_json_pretty(&self) -> StatsResult<String> {
        to_json_pretty(self, "bar chart config")
    }

    /// Parses and validates a config; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> StatsResult<Self> {
        let config: Self = from_json_str(input, "bar chart config")?;
        config.validate()?;
        Ok(config)
    }
}

impl LineChartConfig {
    pub fn to_json_pretty(&self) -> StatsResult<String> {
        to_json_pretty(self, "line chart config")
    }

    /// Parses and validates a config; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> StatsResult<Self> {
        let config: Self = from_json_str(input, "line chart config")?;
        config.validate()?;
        Ok(config)
    }
}

impl BarChartGeometry {
    pub fn to_json_pretty(&self) -> StatsResult<String> {
        to_json_pretty(self, "bar chart geometry")
    }

    pub fn from_json_str(input: &str) -> StatsResult<Self> {
        from_json_str(input, "bar chart geometry")
    }
}

impl LineChartGeometry {
    pub fn to_json_pretty(&self) -> StatsResult<String> {
        to_json_pretty(self, "line chart geometry")
    }

    pub fn from_json_str(input: &str) -> StatsResult<Self> {
        from_json_str(input, "line chart geometry")
    }
}

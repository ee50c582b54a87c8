use chrono::NaiveDate;

use crate::error::{StatsError, StatsResult};

pub fn ensure_finite(value: f64, field_name: &str) -> StatsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::InvalidData(format!(
            "{field_name} must be finite"
        )))
    }
}

pub fn ensure_non_negative(value: f64, field_name: &str) -> StatsResult<f64> {
    let value = ensure_finite(value, field_name)?;
    if value < 0.0 {
        return Err(StatsError::InvalidData(format!(
            "{field_name} must be >= 0"
        )));
    }
    Ok(value)
}

/// Days since 1970-01-01, so session dates plot on a linear x axis.
#[must_use]
pub fn date_to_day_number(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    date.signed_duration_since(epoch).num_days() as f64
}

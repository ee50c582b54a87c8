use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StatsError, StatsResult};

use super::{Grade, GradeCatalog, GradeScale};

/// Climb counts per normalized grade bucket of one scale.
///
/// Buckets follow the order in which they first appear in the scale's
/// normalized labels, so counts line up with increasing difficulty and can be
/// fed straight into a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeHistogram {
    pub scale: GradeScale,
    pub buckets: Vec<String>,
    pub counts: Vec<u32>,
}

impl GradeHistogram {
    /// Counts `grades`; every grade must belong to `scale`.
    pub fn from_grades<I>(catalog: &GradeCatalog, scale: GradeScale, grades: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = Grade>,
    {
        let normalized = catalog.normalized_labels(scale);
        let mut counts: IndexMap<&str, u32> = IndexMap::new();
        for bucket in normalized {
            counts.entry(bucket.as_str()).or_insert(0);
        }

        let mut total = 0_usize;
        for grade in grades {
            if grade.scale != scale {
                return Err(StatsError::InvalidData(format!(
                    "grade of {} scale cannot be counted in a {scale} histogram",
                    grade.scale
                )));
            }
            let bucket = normalized.get(grade.index).ok_or_else(|| {
                StatsError::InvalidData(format!(
                    "grade index {} out of range for {scale} scale",
                    grade.index
                ))
            })?;
            if let Some(count) = counts.get_mut(bucket.as_str()) {
                *count += 1;
            }
            total += 1;
        }

        debug!(%scale, total, bucket_count = counts.len(), "build grade histogram");
        Ok(Self {
            scale,
            buckets: counts.keys().map(|bucket| (*bucket).to_owned()).collect(),
            counts: counts.into_values().collect(),
        })
    }

    /// Counts grades given by label, resolving duplicates to the first occurrence.
    pub fn from_labels<'a, I>(
        catalog: &GradeCatalog,
        scale: GradeScale,
        labels: I,
    ) -> StatsResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let grades = labels
            .into_iter()
            .map(|label| Grade::from_label(catalog, scale, label))
            .collect::<StatsResult<Vec<_>>>()?;
        Self::from_grades(catalog, scale, grades)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Drops empty buckets before the first and after the last climbed one.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let first = self.counts.iter().position(|&count| count > 0);
        let last = self.counts.iter().rposition(|&count| count > 0);
        match (first, last) {
            (Some(first), Some(last)) => Self {
                scale: self.scale,
                buckets: self.buckets[first..=last].to_vec(),
                counts: self.counts[first..=last].to_vec(),
            },
            _ => Self {
                scale: self.scale,
                buckets: Vec::new(),
                counts: Vec::new(),
            },
        }
    }

    /// Lowest and highest bucket labels, used as bar chart corner labels.
    #[must_use]
    pub fn endpoint_labels(&self) -> Option<(&str, &str)> {
        Some((self.buckets.first()?.as_str(), self.buckets.last()?.as_str()))
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

use super::{GradeCatalog, GradeScale};

/// A grade as stored by the persistence layer: raw scale code plus index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradeRef {
    pub scale_code: i64,
    pub grade_index: i64,
}

impl GradeRef {
    #[must_use]
    pub fn new(grade: Grade) -> Self {
        Self {
            scale_code: i64::from(grade.scale.code()),
            grade_index: i64::try_from(grade.index).unwrap_or(i64::MAX),
        }
    }

    /// Resolves the stored codes against `catalog`.
    pub fn decode(self, catalog: &GradeCatalog) -> StatsResult<Grade> {
        let scale = GradeScale::try_from(self.scale_code)?;
        let index = usize::try_from(self.grade_index)
            .ok()
            .filter(|&index| index < catalog.labels(scale).len())
            .ok_or_else(|| {
                StatsError::InvalidData(format!(
                    "grade index {} out of range for {scale} scale",
                    self.grade_index
                ))
            })?;
        Ok(Grade { scale, index })
    }
}

/// A validated grade: a scale and an index into its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grade {
    pub scale: GradeScale,
    pub index: usize,
}

impl Grade {
    /// Looks a grade up by label; duplicated labels resolve to the first one.
    pub fn from_label(catalog: &GradeCatalog, scale: GradeScale, label: &str) -> StatsResult<Self> {
        Ok(Self {
            scale,
            index: catalog.index_of(scale, label)?,
        })
    }

    #[must_use]
    pub fn label(self, catalog: &GradeCatalog) -> Option<&str> {
        catalog.labels(self.scale).get(self.index).map(String::as_str)
    }

    #[must_use]
    pub fn bucket(self, catalog: &GradeCatalog) -> Option<&str> {
        catalog
            .normalized_labels(self.scale)
            .get(self.index)
            .map(String::as_str)
    }
}

impl From<Grade> for GradeRef {
    fn from(grade: Grade) -> Self {
        GradeRef::new(grade)
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StatsError, StatsResult};

use super::tables::{builtin_alignment, builtin_labels};
use super::{GradeCategory, GradeScale};

/// Grade vocabulary of one scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeTable {
    labels: Vec<String>,
    normalized_labels: Vec<String>,
    #[serde(default)]
    alignment: Vec<String>,
}

impl GradeTable {
    /// Creates a table without a cross-scale alignment row.
    #[must_use]
    pub fn new(labels: Vec<String>, normalized_labels: Vec<String>) -> Self {
        Self {
            labels,
            normalized_labels,
            alignment: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Vec<String>) -> Self {
        self.alignment = alignment;
        self
    }

    /// Derives normalized labels from alignment rows.
    ///
    /// The bucket of a label is the `reference` row's entry at the first column
    /// where `alignment` holds that label. Labels missing from `alignment` are
    /// their own bucket.
    #[must_use]
    pub fn from_alignment(labels: Vec<String>, alignment: Vec<String>, reference: &[String]) -> Self {
        let normalized_labels = labels
            .iter()
            .map(|label| {
                alignment
                    .iter()
                    .position(|entry| entry == label)
                    .and_then(|column| reference.get(column))
                    .unwrap_or(label)
                    .clone()
            })
            .collect();
        Self {
            labels,
            normalized_labels,
            alignment,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn normalized_labels(&self) -> &[String] {
        &self.normalized_labels
    }

    #[must_use]
    pub fn alignment(&self) -> &[String] {
        &self.alignment
    }

    pub fn validate(&self, scale: GradeScale) -> StatsResult<()> {
        if self.labels.is_empty() {
            return Err(StatsError::InvalidGradeTable {
                scale,
                reason: "labels must not be empty".to_owned(),
            });
        }
        if self.labels.len() != self.normalized_labels.len() {
            return Err(StatsError::InvalidGradeTable {
                scale,
                reason: format!(
                    "normalized label count {} does not match label count {}",
                    self.normalized_labels.len(),
                    self.labels.len()
                ),
            });
        }
        Ok(())
    }
}

/// Immutable lookup tables for every grade scale.
///
/// Catalogs are plain values: the built-in data comes from
/// [`GradeCatalog::builtin`], and tests or hosts can substitute any scale's
/// table with [`GradeCatalog::with_table`]. A catalog always covers every
/// scale, so only label lookups can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeCatalog {
    tables: Vec<GradeTable>,
}

impl Default for GradeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GradeCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        let tables = GradeScale::ALL
            .iter()
            .map(|&scale| {
                let reference = to_owned_labels(builtin_alignment(scale.category().default_scale()));
                GradeTable::from_alignment(
                    to_owned_labels(builtin_labels(scale)),
                    to_owned_labels(builtin_alignment(scale)),
                    &reference,
                )
            })
            .collect();
        Self { tables }
    }

    /// Builds a catalog from explicit tables; every scale must be present.
    pub fn from_tables(mut tables: IndexMap<GradeScale, GradeTable>) -> StatsResult<Self> {
        let mut ordered = Vec::with_capacity(GradeScale::ALL.len());
        for scale in GradeScale::ALL {
            let table = tables.swap_remove(&scale).ok_or_else(|| StatsError::InvalidGradeTable {
                scale,
                reason: "missing table".to_owned(),
            })?;
            table.validate(scale)?;
            ordered.push(table);
        }
        Ok(Self { tables: ordered })
    }

    /// Replaces one scale's table.
    pub fn with_table(mut self, scale: GradeScale, table: GradeTable) -> StatsResult<Self> {
        table.validate(scale)?;
        debug!(
            %scale,
            label_count = table.labels.len(),
            "substitute grade table"
        );
        self.tables[scale.index()] = table;
        Ok(self)
    }

    #[must_use]
    pub fn table(&self, scale: GradeScale) -> &GradeTable {
        &self.tables[scale.index()]
    }

    #[must_use]
    pub fn labels(&self, scale: GradeScale) -> &[String] {
        self.table(scale).labels()
    }

    #[must_use]
    pub fn normalized_labels(&self, scale: GradeScale) -> &[String] {
        self.table(scale).normalized_labels()
    }

    #[must_use]
    pub fn alignment(&self, scale: GradeScale) -> &[String] {
        self.table(scale).alignment()
    }

    /// Index of the first occurrence of `label` among the scale's labels.
    ///
    /// Duplicated labels (USA lists "5.8" twice) always resolve to the first
    /// occurrence; later occurrences are reachable by index only. The built-in
    /// USA "5.8" resolves to index 8, after "5.7" at index 7.
    pub fn index_of(&self, scale: GradeScale, label: &str) -> StatsResult<usize> {
        self.labels(scale)
            .iter()
            .position(|entry| entry == label)
            .ok_or_else(|| not_found(scale, label))
    }

    /// Normalized bucket label of `label`.
    pub fn bucket_of(&self, scale: GradeScale, label: &str) -> StatsResult<&str> {
        let index = self.index_of(scale, label)?;
        Ok(self.normalized_labels(scale)[index].as_str())
    }

    /// First alignment column holding `label`.
    pub fn normalized_index(&self, scale: GradeScale, label: &str) -> StatsResult<usize> {
        self.alignment(scale)
            .iter()
            .position(|entry| entry == label)
            .ok_or_else(|| not_found(scale, label))
    }

    /// Expresses `label` of scale `from` in scale `to` through the alignment rows.
    pub fn convert(&self, from: GradeScale, label: &str, to: GradeScale) -> StatsResult<&str> {
        if from.category() != to.category() {
            return Err(StatsError::IncompatibleScales { from, to });
        }
        let column = self.normalized_index(from, label)?;
        self.alignment(to)
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| not_found(from, label))
    }

    /// Short preview of a scale such as `"V0, V1, V2, V3, V4, V5..."`.
    #[must_use]
    pub fn examples(&self, scale: GradeScale) -> String {
        let preview: Vec<&str> = self
            .labels(scale)
            .iter()
            .take(6)
            .map(String::as_str)
            .collect();
        format!("{}...", preview.join(", "))
    }

    #[must_use]
    pub fn category_of(&self, scale: GradeScale) -> GradeCategory {
        scale.category()
    }

    #[must_use]
    pub fn scales_in(&self, category: GradeCategory) -> &'static [GradeScale] {
        category.scales()
    }
}

fn to_owned_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}

fn not_found(scale: GradeScale, label: &str) -> StatsError {
    StatsError::GradeNotFound {
        scale,
        label: label.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::GradeTable;

    fn owned(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| (*label).to_owned()).collect()
    }

    #[test]
    fn from_alignment_reads_reference_at_first_matching_column() {
        let table = GradeTable::from_alignment(
            owned(&["a", "b", "c"]),
            owned(&["a", "a", "b", "c"]),
            &owned(&["X", "Y", "Y", "Z"]),
        );
        assert_eq!(table.normalized_labels(), owned(&["X", "Y", "Z"]).as_slice());
    }

    #[test]
    fn from_alignment_keeps_unaligned_labels_as_their_own_bucket() {
        let table = GradeTable::from_alignment(
            owned(&["a", "odd"]),
            owned(&["a", "b"]),
            &owned(&["X", "Y"]),
        );
        assert_eq!(table.normalized_labels(), owned(&["X", "odd"]).as_slice());
    }
}

//! Climbing grade scales and their lookup tables.

mod catalog;
mod config;
mod grade_ref;
mod histogram;
mod scale;
mod tables;

pub use catalog::{GradeCatalog, GradeTable};
pub use config::{GRADE_CATALOG_CONFIG_JSON_SCHEMA_V1, GradeCatalogConfig};
pub use grade_ref::{Grade, GradeRef};
pub use histogram::GradeHistogram;
pub use scale::{Discipline, GradeCategory, GradeScale};

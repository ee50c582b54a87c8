//! climb-stats: grade catalog and chart layout core of a climbing log.
//!
//! The crate is split into grade data ([`grades`]), pure layout math
//! ([`core`]), stateful chart engines ([`api`]) and backend-agnostic draw
//! commands ([`render`]). Nothing here performs I/O.

pub mod api;
pub mod core;
pub mod error;
pub mod grades;
pub mod render;
pub mod telemetry;

pub use api::{BarChartEngine, LineChartEngine};
pub use error::{StatsError, StatsResult};
pub use grades::{GradeCatalog, GradeCategory, GradeScale};

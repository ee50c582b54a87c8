use thiserror::Error;

use crate::grades::GradeScale;

pub type StatsResult<T> = Result<T, StatsError>;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("grade `{label}` not found in {scale} scale")]
    GradeNotFound { scale: GradeScale, label: String },

    #[error("unknown grade scale code: {0}")]
    UnknownGradeScale(i64),

    #[error("cannot convert grades between {from} and {to}: scales belong to different categories")]
    IncompatibleScales { from: GradeScale, to: GradeScale },

    #[error("invalid grade table for {scale}: {reason}")]
    InvalidGradeTable { scale: GradeScale, reason: String },
}

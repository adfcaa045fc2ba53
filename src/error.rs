use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AxisError {
    #[error("invalid range: lower={lower}, upper={upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("autoscale threshold must be in [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

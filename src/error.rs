//! Error types for arcball construction

use thiserror::Error;

/// Arcball error type
///
/// Only construction and viewport changes can fail. Pointer, wheel and
/// keyboard handlers degrade to no-ops instead of returning errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArcballError {
    #[error("Invalid arcball configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid viewport size {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

pub type ArcballResult<T> = Result<T, ArcballError>;

/// Errors produced by the projection engine and the session state machine
use crate::shape::ShapeKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TiltError {
    /// A dimension, angle or height outside its allowed range
    #[error("invalid {name}: {value} is out of range")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("{0} is a solid and has no projected-value formula")]
    UnsupportedShapeForProjection(ShapeKind),

    #[error("invalid shape descriptor: {0}")]
    InvalidDescriptor(String),
}

pub type TiltResult<T> = Result<T, TiltError>;

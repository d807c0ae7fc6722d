use thiserror::Error;

use crate::core::{LengthConstraintKind, RectangleConstraint};

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// The arranger has no algorithm for this width/height kind pairing.
    ///
    /// Callers are expected to avoid producing such constraints; the error is
    /// not recoverable inside the layout pass.
    #[error("{context}: unsupported constraint shape: width={width:?}, height={height:?}")]
    UnsupportedConstraintShape {
        context: &'static str,
        width: LengthConstraintKind,
        height: LengthConstraintKind,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl LayoutError {
    #[must_use]
    pub fn unsupported_shape(context: &'static str, constraint: &RectangleConstraint) -> Self {
        let (width, height) = constraint.shape();
        Self::UnsupportedConstraintShape {
            context,
            width,
            height,
        }
    }
}

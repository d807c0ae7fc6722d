pub mod constraint;
pub mod geometry;
pub mod types;

pub use constraint::{LengthConstraint, LengthConstraintKind, Range, RectangleConstraint};
pub use geometry::{Rect, RectangleEdge, RectangleInsets, Size2D};
pub use types::{ArrangeResult, Viewport};

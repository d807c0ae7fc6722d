use serde::{Deserialize, Serialize};

use crate::core::{RectangleInsets, Size2D};
use crate::error::{LayoutError, LayoutResult};

/// Closed numeric interval with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    pub fn new(lower: f64, upper: f64) -> LayoutResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(LayoutError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        if lower > upper {
            return Err(LayoutError::InvalidData(format!(
                "range lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// `0..=upper`, with a negative `upper` collapsed to zero.
    ///
    /// Layout passes build these from interior extents that may have gone
    /// negative; the range stays well-formed while the caller keeps the raw
    /// extent for positioning.
    #[must_use]
    pub fn up_to(upper: f64) -> Self {
        Self {
            lower: 0.0,
            upper: upper.max(0.0),
        }
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns the value in range closest to `value`.
    #[must_use]
    pub fn constrain(self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    fn trimmed(self, amount: f64) -> Self {
        let upper = (self.upper - amount).max(0.0);
        let lower = (self.lower - amount).max(0.0).min(upper);
        Self { lower, upper }
    }
}

/// Discriminant of [`LengthConstraint`], used to describe constraint shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthConstraintKind {
    None,
    Fixed,
    Range,
}

/// Resolution rule for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthConstraint {
    #[default]
    None,
    Fixed(f64),
    Range(Range),
}

impl LengthConstraint {
    #[must_use]
    pub fn kind(self) -> LengthConstraintKind {
        match self {
            Self::None => LengthConstraintKind::None,
            Self::Fixed(_) => LengthConstraintKind::Fixed,
            Self::Range(_) => LengthConstraintKind::Range,
        }
    }

    /// Resolves a preferred length against this rule.
    #[must_use]
    pub fn resolve(self, preferred: f64) -> f64 {
        match self {
            Self::None => preferred,
            Self::Fixed(value) => value,
            Self::Range(range) => range.constrain(preferred),
        }
    }

    fn trimmed(self, amount: f64) -> Self {
        match self {
            Self::None => Self::None,
            Self::Fixed(value) => Self::Fixed(value - amount),
            Self::Range(range) => Self::Range(range.trimmed(amount)),
        }
    }
}

/// Width and height rules applied when arranging a block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectangleConstraint {
    pub width: LengthConstraint,
    pub height: LengthConstraint,
}

impl RectangleConstraint {
    #[must_use]
    pub const fn new(width: LengthConstraint, height: LengthConstraint) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self::new(LengthConstraint::None, LengthConstraint::None)
    }

    #[must_use]
    pub const fn fixed(width: f64, height: f64) -> Self {
        Self::new(LengthConstraint::Fixed(width), LengthConstraint::Fixed(height))
    }

    #[must_use]
    pub fn shape(&self) -> (LengthConstraintKind, LengthConstraintKind) {
        (self.width.kind(), self.height.kind())
    }

    #[must_use]
    pub fn to_unconstrained(&self) -> Self {
        Self::none()
    }

    #[must_use]
    pub fn to_fixed_width(&self, width: f64) -> Self {
        Self::new(LengthConstraint::Fixed(width), self.height)
    }

    #[must_use]
    pub fn to_fixed_height(&self, height: f64) -> Self {
        Self::new(self.width, LengthConstraint::Fixed(height))
    }

    #[must_use]
    pub fn to_range_width(&self, range: Range) -> Self {
        Self::new(LengthConstraint::Range(range), self.height)
    }

    #[must_use]
    pub fn to_range_height(&self, range: Range) -> Self {
        Self::new(self.width, LengthConstraint::Range(range))
    }

    /// Resolves a preferred size against both axis rules.
    #[must_use]
    pub fn calculate_constrained_size(&self, preferred: Size2D) -> Size2D {
        Size2D::new(
            self.width.resolve(preferred.width),
            self.height.resolve(preferred.height),
        )
    }

    /// Constraint left for the content once `insets` are taken off each axis.
    ///
    /// Fixed lengths are trimmed without clamping; range bounds are floored at
    /// zero.
    #[must_use]
    pub fn shrink(&self, insets: RectangleInsets) -> Self {
        Self::new(
            self.width.trimmed(insets.horizontal()),
            self.height.trimmed(insets.vertical()),
        )
    }
}

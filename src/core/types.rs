use std::any::Any;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{Rect, Size2D};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Outcome of one arrangement call.
///
/// Besides the measured size, a block may attach an opaque payload that outer
/// arrangers pass through untouched.
#[derive(Clone, Default)]
pub struct ArrangeResult {
    pub width: f64,
    pub height: f64,
    extra: Option<Rc<dyn Any>>,
}

impl ArrangeResult {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            extra: None,
        }
    }

    #[must_use]
    pub fn from_size(size: Size2D) -> Self {
        Self::new(size.width, size.height)
    }

    #[must_use]
    pub fn with_extra(mut self, extra: Rc<dyn Any>) -> Self {
        self.extra = Some(extra);
        self
    }

    #[must_use]
    pub fn size(&self) -> Size2D {
        Size2D::new(self.width, self.height)
    }

    #[must_use]
    pub fn extra(&self) -> Option<&Rc<dyn Any>> {
        self.extra.as_ref()
    }

    /// Borrows the payload when it holds a `T`.
    #[must_use]
    pub fn extra_as<T: 'static>(&self) -> Option<&T> {
        self.extra.as_deref().and_then(|extra| extra.downcast_ref::<T>())
    }
}

impl fmt::Debug for ArrangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrangeResult")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_extra", &self.extra.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{ArrangeResult, Viewport};
    use crate::core::Rect;

    #[test]
    fn extra_payload_downcasts_to_original_type() {
        let result = ArrangeResult::new(3.0, 4.0).with_extra(Rc::new(7_u32));
        assert_eq!(result.extra_as::<u32>(), Some(&7));
        assert!(result.extra_as::<String>().is_none());
        assert!(ArrangeResult::new(1.0, 1.0).extra().is_none());
    }

    #[test]
    fn viewport_rect_starts_at_origin() {
        assert_eq!(
            Viewport::new(640, 480).to_rect(),
            Rect::new(0.0, 0.0, 640.0, 480.0)
        );
        assert!(!Viewport::new(0, 480).is_valid());
    }
}

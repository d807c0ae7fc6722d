use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in layout space.
///
/// Width and height are not clamped: an over-committed layout may produce
/// negative extents, which later positioning arithmetic carries through.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the rectangle spanning `(x0, y0)`..`(x1, y1)`.
    #[must_use]
    pub fn from_edges(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Width/height pair produced by measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Four-sided inset values used for margins, borders and padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectangleInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl RectangleInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    #[must_use]
    pub fn trim_width(self, width: f64) -> f64 {
        width - self.horizontal()
    }

    #[must_use]
    pub fn trim_height(self, height: f64) -> f64 {
        height - self.vertical()
    }

    #[must_use]
    pub fn extend_width(self, width: f64) -> f64 {
        width + self.horizontal()
    }

    #[must_use]
    pub fn extend_height(self, height: f64) -> f64 {
        height + self.vertical()
    }

    /// Returns `rect` shrunk by these insets on every side.
    #[must_use]
    pub fn inset_rect(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.left,
            rect.y + self.top,
            self.trim_width(rect.width),
            self.trim_height(rect.height),
        )
    }

    /// Side-wise sum, used to fold margin, border and padding into one inset.
    #[must_use]
    pub fn sum(self, other: Self) -> Self {
        Self::new(
            self.top + other.top,
            self.left + other.left,
            self.bottom + other.bottom,
            self.right + other.right,
        )
    }
}

/// Side of a container a block can be docked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectangleEdge {
    Left,
    Right,
    Top,
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::{Rect, RectangleInsets};

    #[test]
    fn from_edges_keeps_negative_extent() {
        let rect = Rect::from_edges(40.0, 10.0, 30.0, 20.0);
        assert_eq!(rect, Rect::new(40.0, 10.0, -10.0, 10.0));
        assert_eq!(rect.right(), 30.0);
    }

    #[test]
    fn inset_rect_trims_each_side() {
        let insets = RectangleInsets::new(1.0, 2.0, 3.0, 4.0);
        let inner = insets.inset_rect(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(inner, Rect::new(2.0, 1.0, 94.0, 46.0));
        assert_eq!(insets.extend_width(inner.width), 100.0);
        assert_eq!(insets.extend_height(inner.height), 50.0);
    }

    #[test]
    fn insets_sum_side_wise() {
        let total = RectangleInsets::uniform(1.0).sum(RectangleInsets::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(total, RectangleInsets::new(3.0, 4.0, 5.0, 6.0));
    }
}

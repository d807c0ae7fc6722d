use serde::{Deserialize, Serialize};

use crate::core::RectangleInsets;

/// Inset source for arrangers: the three layers between a container's outer
/// bounds and the area its blocks are laid out in.
pub trait LayoutContainer {
    fn margin(&self) -> RectangleInsets;
    fn border_insets(&self) -> RectangleInsets;
    fn padding(&self) -> RectangleInsets;

    /// Margin, border and padding folded into one inset.
    fn total_insets(&self) -> RectangleInsets {
        self.margin()
            .sum(self.border_insets())
            .sum(self.padding())
    }

    fn trim_width(&self, width: f64) -> f64 {
        self.total_insets().trim_width(width)
    }

    fn trim_height(&self, height: f64) -> f64 {
        self.total_insets().trim_height(height)
    }

    fn extend_width(&self, width: f64) -> f64 {
        self.total_insets().extend_width(width)
    }

    fn extend_height(&self, height: f64) -> f64 {
        self.total_insets().extend_height(height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockFrame {
    #[serde(default)]
    pub margin: RectangleInsets,
    #[serde(default)]
    pub border: RectangleInsets,
    #[serde(default)]
    pub padding: RectangleInsets,
}

impl BlockFrame {
    #[must_use]
    pub const fn new(
        margin: RectangleInsets,
        border: RectangleInsets,
        padding: RectangleInsets,
    ) -> Self {
        Self {
            margin,
            border,
            padding,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: RectangleInsets) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_border(mut self, border: RectangleInsets) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: RectangleInsets) -> Self {
        self.padding = padding;
        self
    }
}

impl LayoutContainer for BlockFrame {
    fn margin(&self) -> RectangleInsets {
        self.margin
    }

    fn border_insets(&self) -> RectangleInsets {
        self.border
    }

    fn padding(&self) -> RectangleInsets {
        self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockFrame, LayoutContainer};
    use crate::core::RectangleInsets;

    #[test]
    fn trim_and_extend_cover_all_three_layers() {
        let frame = BlockFrame::default()
            .with_margin(RectangleInsets::uniform(1.0))
            .with_border(RectangleInsets::new(0.0, 2.0, 0.0, 2.0))
            .with_padding(RectangleInsets::new(3.0, 0.0, 3.0, 0.0));

        assert_eq!(frame.trim_width(100.0), 94.0);
        assert_eq!(frame.trim_height(100.0), 92.0);
        assert_eq!(frame.extend_width(94.0), 100.0);
        assert_eq!(frame.extend_height(92.0), 100.0);
    }
}

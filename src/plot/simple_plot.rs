use crate::block::{BlockFrame, LayoutContainer};
use crate::core::{Rect, RectangleConstraint};
use crate::error::LayoutResult;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame};

use super::ContentPlot;

/// Minimal plot surface: a framed data area with a background and outline.
///
/// Series painting is left to the host; this plot only contributes its frame
/// insets, an optional intrinsic size and background primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePlot {
    id: Option<String>,
    frame: BlockFrame,
    default_width: f64,
    default_height: f64,
    background: Option<Color>,
    outline: Option<Color>,
    revision: u64,
}

impl Default for SimplePlot {
    fn default() -> Self {
        Self {
            id: None,
            frame: BlockFrame::default(),
            default_width: -1.0,
            default_height: -1.0,
            background: None,
            outline: None,
            revision: 0,
        }
    }
}

impl SimplePlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: BlockFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Intrinsic content size; negative values leave the axis unset.
    #[must_use]
    pub fn with_default_size(mut self, width: f64, height: f64) -> Self {
        self.default_width = width;
        self.default_height = height;
        self
    }

    #[must_use]
    pub fn with_background(mut self, paint: Color) -> Self {
        self.background = Some(paint);
        self
    }

    #[must_use]
    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    #[must_use]
    pub fn frame(&self) -> BlockFrame {
        self.frame
    }

    /// Bumped by every notifying change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl ContentPlot for SimplePlot {
    fn to_content_constraint(&self, constraint: &RectangleConstraint) -> RectangleConstraint {
        constraint.shrink(self.frame.total_insets())
    }

    fn calculate_total_width(&self, content_width: f64) -> f64 {
        self.frame.extend_width(content_width)
    }

    fn calculate_total_height(&self, content_height: f64) -> f64 {
        self.frame.extend_height(content_height)
    }

    fn default_width(&self) -> f64 {
        self.default_width
    }

    fn default_height(&self) -> f64 {
        self.default_height
    }

    fn background_paint(&self) -> Option<Color> {
        self.background
    }

    fn set_background_paint(&mut self, paint: Option<Color>, notify: bool) {
        self.background = paint;
        if notify {
            self.revision = self.revision.saturating_add(1);
        }
    }

    fn draw(&mut self, ctx: &mut RenderFrame, area: Rect) -> LayoutResult<()> {
        let data_area = self.frame.total_insets().inset_rect(area);
        if let Some(paint) = self.background {
            ctx.push_rect(RectPrimitive::from_rect(data_area, paint));
        }
        if let Some(color) = self.outline {
            let (left, top) = (data_area.x, data_area.y);
            let (right, bottom) = (data_area.right(), data_area.bottom());
            for (x1, y1, x2, y2) in [
                (left, top, right, top),
                (right, top, right, bottom),
                (right, bottom, left, bottom),
                (left, bottom, left, top),
            ] {
                ctx.push_line(LinePrimitive::new(x1, y1, x2, y2, 1.0, color));
            }
        }
        Ok(())
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
        self.revision = self.revision.saturating_add(1);
    }
}

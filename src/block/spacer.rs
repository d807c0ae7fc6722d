use crate::block::Block;
use crate::core::{ArrangeResult, Rect, RectangleConstraint, Size2D};
use crate::error::LayoutResult;
use crate::render::{Color, RectPrimitive, RenderFrame};

/// Block with a preferred size, resolvable under every constraint shape.
///
/// Stands in for axes and legends whose real measurement lives outside the
/// layout engine: fixed lengths win, ranges clamp the preference, and an
/// unconstrained axis keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacerBlock {
    id: Option<String>,
    preferred: Size2D,
    bounds: Rect,
    background: Option<Color>,
}

impl SpacerBlock {
    #[must_use]
    pub fn new(preferred_width: f64, preferred_height: f64) -> Self {
        Self {
            id: None,
            preferred: Size2D::new(preferred_width, preferred_height),
            bounds: Rect::default(),
            background: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_background(mut self, fill: Color) -> Self {
        self.background = Some(fill);
        self
    }

    #[must_use]
    pub fn preferred_size(&self) -> Size2D {
        self.preferred
    }
}

impl Block for SpacerBlock {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn background(&self) -> Option<Color> {
        self.background
    }

    fn set_background(&mut self, fill: Option<Color>) {
        self.background = fill;
    }

    fn arrange(
        &mut self,
        _ctx: &RenderFrame,
        constraint: &RectangleConstraint,
    ) -> LayoutResult<ArrangeResult> {
        Ok(ArrangeResult::from_size(
            constraint.calculate_constrained_size(self.preferred),
        ))
    }

    fn draw(&mut self, ctx: &mut RenderFrame, area: Rect) -> LayoutResult<()> {
        if let Some(fill) = self.background {
            ctx.push_rect(RectPrimitive::from_rect(area, fill));
        }
        Ok(())
    }
}

use crate::block::{Block, BlockFrame, SharedBlock};
use crate::core::{ArrangeResult, Rect, RectangleConstraint, RectangleEdge};
use crate::error::LayoutResult;
use crate::layout::{Arrangement, EdgeDockArrangement};
use crate::render::{Color, RectPrimitive, RenderFrame};

/// Block that lays out child blocks through an [`Arrangement`].
///
/// Child bounds are relative to the container's origin; `draw` offsets them by
/// the area the container itself is drawn in.
#[derive(Debug)]
pub struct BlockContainer {
    id: Option<String>,
    frame: BlockFrame,
    arrangement: Box<dyn Arrangement>,
    bounds: Rect,
    background: Option<Color>,
}

impl Default for BlockContainer {
    fn default() -> Self {
        Self::new(EdgeDockArrangement::new())
    }
}

impl BlockContainer {
    #[must_use]
    pub fn new(arrangement: impl Arrangement + 'static) -> Self {
        Self {
            id: None,
            frame: BlockFrame::default(),
            arrangement: Box::new(arrangement),
            bounds: Rect::default(),
            background: None,
        }
    }

    #[must_use]
    pub fn with_frame(mut self, frame: BlockFrame) -> Self {
        self.frame = frame;
        self
    }

    #[must_use]
    pub fn frame(&self) -> BlockFrame {
        self.frame
    }

    pub fn set_frame(&mut self, frame: BlockFrame) {
        self.frame = frame;
    }

    pub fn add(&mut self, block: SharedBlock, key: Option<RectangleEdge>) {
        self.arrangement.add(block, key);
    }

    #[must_use]
    pub fn blocks(&self) -> Vec<SharedBlock> {
        self.arrangement.blocks()
    }

    /// Arranges at the viewport size and draws into `ctx`.
    pub fn arrange_and_draw(&mut self, ctx: &mut RenderFrame) -> LayoutResult<()> {
        let area = ctx.viewport.to_rect();
        self.arrange(ctx, &RectangleConstraint::fixed(area.width, area.height))?;
        self.set_bounds(area);
        self.draw(ctx, area)
    }
}

impl Block for BlockContainer {
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
        ctx: &RenderFrame,
        constraint: &RectangleConstraint,
    ) -> LayoutResult<ArrangeResult> {
        self.arrangement.arrange(&self.frame, ctx, constraint)
    }

    fn draw(&mut self, ctx: &mut RenderFrame, area: Rect) -> LayoutResult<()> {
        if let Some(fill) = self.background {
            ctx.push_rect(RectPrimitive::from_rect(area, fill));
        }
        for block in self.arrangement.blocks() {
            let child_area = block.borrow().bounds().translated(area.x, area.y);
            block.borrow_mut().draw(ctx, child_area)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BlockContainer;
    use crate::block::{Block, SpacerBlock, shared};
    use crate::core::{Rect, RectangleConstraint, RectangleEdge, Viewport};
    use crate::render::{Color, RenderFrame};

    #[test]
    fn draw_offsets_children_by_container_area() {
        let ctx = RenderFrame::new(Viewport::new(100, 50));
        let mut container = BlockContainer::default();
        let axis = shared(SpacerBlock::new(10.0, 0.0).with_background(Color::BLACK));
        container.add(axis.clone(), Some(RectangleEdge::Left));

        container
            .arrange(&ctx, &RectangleConstraint::fixed(100.0, 50.0))
            .expect("arrange");
        assert_eq!(axis.borrow().bounds(), Rect::new(0.0, 0.0, 10.0, 50.0));

        let mut ctx = ctx;
        container
            .draw(&mut ctx, Rect::new(5.0, 7.0, 100.0, 50.0))
            .expect("draw");
        assert_eq!(ctx.rects.len(), 1);
        assert_eq!((ctx.rects[0].x, ctx.rects[0].y), (5.0, 7.0));
    }
}

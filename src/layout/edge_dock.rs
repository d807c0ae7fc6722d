use std::rc::Rc;

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::block::{LayoutContainer, SharedBlock};
use crate::config::{LayoutConfig, UnconstrainedEdges};
use crate::core::{
    ArrangeResult, LengthConstraint, Range, Rect, RectangleConstraint, RectangleEdge,
};
use crate::error::{LayoutError, LayoutResult};
use crate::render::RenderFrame;

use super::Arrangement;

const CONTEXT: &str = "edge dock arrangement";

type EdgeBlocks = SmallVec<[SharedBlock; 2]>;

/// Content boundary left after edge blocks took their space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentArea {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ContentArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::from_edges(self.x0, self.y0, self.x1, self.y1)
    }
}

/// Docks blocks against the four edges of a container around one center block.
///
/// Each edge keeps its blocks newest first: the most recently added block is
/// arranged first and sits flush against the container edge, older blocks
/// stack inward toward the center.
///
/// Only the `(None, None)` and `(Fixed, Fixed)` constraint shapes are
/// supported. Edge blocks wider or taller than the interior are not detected
/// and leave a negative content extent behind.
#[derive(Debug, Default)]
pub struct EdgeDockArrangement {
    center: Option<SharedBlock>,
    left: EdgeBlocks,
    right: EdgeBlocks,
    top: EdgeBlocks,
    bottom: EdgeBlocks,
    unconstrained_edges: UnconstrainedEdges,
    content_area: ContentArea,
}

impl EdgeDockArrangement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &LayoutConfig) -> Self {
        Self::default().with_unconstrained_edges(config.unconstrained_edges)
    }

    #[must_use]
    pub fn with_unconstrained_edges(mut self, mode: UnconstrainedEdges) -> Self {
        self.unconstrained_edges = mode;
        self
    }

    #[must_use]
    pub fn center(&self) -> Option<&SharedBlock> {
        self.center.as_ref()
    }

    /// Blocks docked at `edge`, in arrangement order.
    #[must_use]
    pub fn edge_blocks(&self, edge: RectangleEdge) -> &[SharedBlock] {
        match edge {
            RectangleEdge::Left => &self.left,
            RectangleEdge::Right => &self.right,
            RectangleEdge::Top => &self.top,
            RectangleEdge::Bottom => &self.bottom,
        }
    }

    /// Boundary computed by the last fixed arrangement.
    #[must_use]
    pub fn content_area(&self) -> ContentArea {
        self.content_area
    }

    fn edge_blocks_mut(&mut self, edge: RectangleEdge) -> &mut EdgeBlocks {
        match edge {
            RectangleEdge::Left => &mut self.left,
            RectangleEdge::Right => &mut self.right,
            RectangleEdge::Top => &mut self.top,
            RectangleEdge::Bottom => &mut self.bottom,
        }
    }

    fn arrange_unconstrained(
        &mut self,
        container: &dyn LayoutContainer,
        ctx: &RenderFrame,
    ) -> LayoutResult<ArrangeResult> {
        let unconstrained = RectangleConstraint::none();
        let center = match &self.center {
            Some(block) => block.borrow_mut().arrange(ctx, &unconstrained)?,
            None => ArrangeResult::default(),
        };
        if self.unconstrained_edges == UnconstrainedEdges::CenterOnly {
            debug!(
                width = center.width,
                height = center.height,
                "edge dock sized by center block only"
            );
            return Ok(center);
        }

        let mut middle_width = center.width;
        let mut middle_height = center.height;
        for block in self.left.iter().chain(&self.right) {
            let size = block.borrow_mut().arrange(ctx, &unconstrained)?;
            middle_width += size.width;
            middle_height = middle_height.max(size.height);
        }

        let mut width = middle_width;
        let mut height = middle_height;
        for block in self.top.iter().chain(&self.bottom) {
            let size = block.borrow_mut().arrange(ctx, &unconstrained)?;
            width = width.max(size.width);
            height += size.height;
        }

        let width = container.extend_width(width);
        let height = container.extend_height(height);
        debug!(width, height, "edge dock measured with edge blocks");
        let mut result = ArrangeResult::new(width, height);
        if let Some(extra) = center.extra() {
            result = result.with_extra(Rc::clone(extra));
        }
        Ok(result)
    }

    fn arrange_fixed(
        &mut self,
        container: &dyn LayoutContainer,
        ctx: &RenderFrame,
        width: f64,
        height: f64,
    ) -> LayoutResult<ArrangeResult> {
        let insets = container.total_insets();
        let mut area = ContentArea {
            x0: insets.left,
            y0: insets.top,
            x1: width - insets.right,
            y1: height - insets.bottom,
        };

        // Bounds are committed only after every block measured successfully.
        let side_constraint = RectangleConstraint::new(
            LengthConstraint::Range(Range::up_to(area.width())),
            LengthConstraint::Fixed(area.height()),
        );
        let mut sides: SmallVec<[(SharedBlock, Rect); 4]> = SmallVec::new();
        for block in &self.left {
            let size = block.borrow_mut().arrange(ctx, &side_constraint)?;
            let bounds = Rect::new(area.x0, area.y0, size.width, size.height);
            trace!(edge = "left", x = bounds.x, width = bounds.width, "place edge block");
            area.x0 += size.width;
            sides.push((Rc::clone(block), bounds));
        }
        for block in &self.right {
            let size = block.borrow_mut().arrange(ctx, &side_constraint)?;
            area.x1 -= size.width;
            let bounds = Rect::new(area.x1, area.y0, size.width, size.height);
            trace!(edge = "right", x = bounds.x, width = bounds.width, "place edge block");
            sides.push((Rc::clone(block), bounds));
        }

        let band_constraint = RectangleConstraint::new(
            LengthConstraint::Fixed(area.width()),
            LengthConstraint::Range(Range::up_to(area.height())),
        );
        let mut bands: SmallVec<[(SharedBlock, Rect); 4]> = SmallVec::new();
        for block in &self.top {
            let size = block.borrow_mut().arrange(ctx, &band_constraint)?;
            let bounds = Rect::new(area.x0, area.y0, size.width, size.height);
            trace!(edge = "top", y = bounds.y, height = bounds.height, "place edge block");
            area.y0 += size.height;
            bands.push((Rc::clone(block), bounds));
        }
        for block in &self.bottom {
            let size = block.borrow_mut().arrange(ctx, &band_constraint)?;
            area.y1 -= size.height;
            let bounds = Rect::new(area.x0, area.y1, size.width, size.height);
            trace!(edge = "bottom", y = bounds.y, height = bounds.height, "place edge block");
            bands.push((Rc::clone(block), bounds));
        }

        // Side blocks were measured against the full interior height.
        for (block, bounds) in &sides {
            block.borrow_mut().set_bounds(Rect::new(
                bounds.x,
                area.y0,
                bounds.width,
                area.height(),
            ));
        }
        for (block, bounds) in &bands {
            block.borrow_mut().set_bounds(*bounds);
        }
        if let Some(center) = &self.center {
            center.borrow_mut().set_bounds(area.to_rect());
        }

        self.content_area = area;
        debug!(
            width,
            height,
            content_width = area.width(),
            content_height = area.height(),
            "edge dock arranged at fixed size"
        );
        Ok(ArrangeResult::new(width, height))
    }
}

impl Arrangement for EdgeDockArrangement {
    fn add(&mut self, block: SharedBlock, key: Option<RectangleEdge>) {
        match key {
            Some(edge) => self.edge_blocks_mut(edge).insert(0, block),
            None => self.center = Some(block),
        }
    }

    fn arrange(
        &mut self,
        container: &dyn LayoutContainer,
        ctx: &RenderFrame,
        constraint: &RectangleConstraint,
    ) -> LayoutResult<ArrangeResult> {
        match (constraint.width, constraint.height) {
            (LengthConstraint::None, LengthConstraint::None) => {
                self.arrange_unconstrained(container, ctx)
            }
            (LengthConstraint::Fixed(width), LengthConstraint::Fixed(height)) => {
                self.arrange_fixed(container, ctx, width, height)
            }
            (LengthConstraint::None, LengthConstraint::Fixed(_) | LengthConstraint::Range(_))
            | (LengthConstraint::Fixed(_), LengthConstraint::None | LengthConstraint::Range(_))
            | (
                LengthConstraint::Range(_),
                LengthConstraint::None | LengthConstraint::Fixed(_) | LengthConstraint::Range(_),
            ) => {
                let err = LayoutError::unsupported_shape(CONTEXT, constraint);
                warn!(error = %err, "rejecting edge dock arrangement");
                Err(err)
            }
        }
    }

    /// Nothing is cached between passes; every `arrange` recomputes.
    fn clear(&mut self) {}

    fn blocks(&self) -> Vec<SharedBlock> {
        self.center
            .iter()
            .chain(&self.left)
            .chain(&self.right)
            .chain(&self.top)
            .chain(&self.bottom)
            .map(Rc::clone)
            .collect()
    }
}

/// Arrangers compare by type only; their block lists are not inspected.
impl PartialEq for EdgeDockArrangement {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

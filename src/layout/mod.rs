mod edge_dock;

use std::fmt;

pub use edge_dock::{ContentArea, EdgeDockArrangement};

use crate::block::{LayoutContainer, SharedBlock};
use crate::core::{ArrangeResult, RectangleConstraint, RectangleEdge};
use crate::error::LayoutResult;
use crate::render::RenderFrame;

/// Strategy that positions a container's blocks.
///
/// Arrangers keep shared handles to the blocks they place; the container owns
/// the insets that are passed back in on every `arrange` call.
pub trait Arrangement: fmt::Debug {
    /// Registers `block`; `None` targets the center slot.
    fn add(&mut self, block: SharedBlock, key: Option<RectangleEdge>);

    fn arrange(
        &mut self,
        container: &dyn LayoutContainer,
        ctx: &RenderFrame,
        constraint: &RectangleConstraint,
    ) -> LayoutResult<ArrangeResult>;

    fn clear(&mut self);

    /// Every registered block, center first.
    fn blocks(&self) -> Vec<SharedBlock>;
}

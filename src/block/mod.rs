mod container;
mod frame;
mod spacer;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub use container::BlockContainer;
pub use frame::{BlockFrame, LayoutContainer};
pub use spacer::SpacerBlock;

use crate::core::{ArrangeResult, Rect, RectangleConstraint};
use crate::error::LayoutResult;
use crate::render::{Color, RenderFrame};

/// Rectangular layout unit: measurable under a constraint, drawable in an area.
///
/// Bounds are plain values. `set_bounds` copies the rectangle in and `bounds`
/// hands a copy out, so callers never alias a block's internal state.
pub trait Block: fmt::Debug {
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: Option<String>);

    fn bounds(&self) -> Rect;
    fn set_bounds(&mut self, bounds: Rect);

    fn background(&self) -> Option<Color>;
    fn set_background(&mut self, fill: Option<Color>);

    /// Measures the block under `constraint`.
    ///
    /// `ctx` is passed through to nested blocks and never inspected here.
    fn arrange(
        &mut self,
        ctx: &RenderFrame,
        constraint: &RectangleConstraint,
    ) -> LayoutResult<ArrangeResult>;

    fn draw(&mut self, ctx: &mut RenderFrame, area: Rect) -> LayoutResult<()>;
}

/// Handle through which arrangers reach blocks they position but do not own.
pub type SharedBlock = Rc<RefCell<dyn Block>>;

/// Wraps a block for registration with an arrangement.
///
/// The typed handle coerces to [`SharedBlock`] while the caller keeps concrete
/// access to the block.
#[must_use]
pub fn shared<B: Block + 'static>(block: B) -> Rc<RefCell<B>> {
    Rc::new(RefCell::new(block))
}

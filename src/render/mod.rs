mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive};

use crate::error::LayoutResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` after blocks have been
/// arranged and drawn, so painting code never sees layout state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> LayoutResult<()>;
}

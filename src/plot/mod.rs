mod content_block;
mod height_calculators;
mod simple_plot;

use std::fmt;
use std::sync::Arc;

pub use content_block::{ContentTrim, PlotContentBlock};
pub use height_calculators::HeightCalculatorRegistry;
pub use simple_plot::SimplePlot;

use crate::block::Block;
use crate::config::LayoutConfig;
use crate::core::{Rect, RectangleConstraint};
use crate::error::LayoutResult;
use crate::render::{Color, RenderFrame};

/// Capabilities a plot exposes to [`PlotContentBlock`].
///
/// A plot knows how much margin, border and padding surrounds its data area,
/// and may have an intrinsic content size. Negative default sizes mean unset.
pub trait ContentPlot: fmt::Debug {
    fn to_content_constraint(&self, constraint: &RectangleConstraint) -> RectangleConstraint;

    fn calculate_total_width(&self, content_width: f64) -> f64;
    fn calculate_total_height(&self, content_height: f64) -> f64;

    fn default_width(&self) -> f64;
    fn default_height(&self) -> f64;

    /// Only consulted by wrappers built with [`ContentTrim::TrimToContent`].
    fn trim_to_content_width(&self, width: f64) -> f64 {
        width
    }

    fn trim_to_content_height(&self, height: f64) -> f64 {
        height
    }

    fn background_paint(&self) -> Option<Color>;

    /// `notify` controls whether the plot announces the change to its listeners.
    fn set_background_paint(&mut self, paint: Option<Color>, notify: bool);

    fn draw(&mut self, ctx: &mut RenderFrame, area: Rect) -> LayoutResult<()>;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: Option<String>);
}

/// Computes a content height from the block being measured.
pub type HeightCalculatorFn = Arc<dyn Fn(&dyn Block) -> f64 + Send + Sync + 'static>;

/// Locates a height calculator for a plot without an intrinsic height.
pub trait HeightCalculatorLookup: fmt::Debug {
    fn height_calculator(
        &self,
        config: &LayoutConfig,
        plot_id: Option<&str>,
    ) -> Option<HeightCalculatorFn>;
}

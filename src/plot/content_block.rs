use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use tracing::{trace, warn};

use crate::block::Block;
use crate::config::LayoutConfig;
use crate::core::{ArrangeResult, LengthConstraint, Rect, RectangleConstraint};
use crate::error::{LayoutError, LayoutResult};
use crate::render::{Color, RenderFrame};

use super::{ContentPlot, HeightCalculatorFn, HeightCalculatorLookup};

const CONTEXT: &str = "plot content block";

/// Whether measured content sizes pass through the plot's trim functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTrim {
    #[default]
    Passthrough,
    TrimToContent,
}

/// Presents a plot's data area as one block, leaving its axes to the container.
///
/// Only the unconstrained shape is measurable: the plot's default size is
/// used, falling back to a height calculator and then to the configured
/// default plot size.
pub struct PlotContentBlock<P: ContentPlot> {
    plot: P,
    bounds: Rect,
    background: Option<Color>,
    trim: ContentTrim,
    config: LayoutConfig,
    height_lookup: Option<Rc<dyn HeightCalculatorLookup>>,
}

impl<P: ContentPlot> PlotContentBlock<P> {
    #[must_use]
    pub fn new(plot: P) -> Self {
        Self {
            plot,
            bounds: Rect::default(),
            background: None,
            trim: ContentTrim::default(),
            config: LayoutConfig::default(),
            height_lookup: None,
        }
    }

    #[must_use]
    pub fn with_content_trim(mut self, trim: ContentTrim) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_height_lookup(mut self, lookup: Rc<dyn HeightCalculatorLookup>) -> Self {
        self.height_lookup = Some(lookup);
        self
    }

    #[must_use]
    pub fn with_background(mut self, fill: Color) -> Self {
        self.background = Some(fill);
        self
    }

    #[must_use]
    pub fn content_trim(&self) -> ContentTrim {
        self.trim
    }

    #[must_use]
    pub fn plot(&self) -> &P {
        &self.plot
    }

    pub fn plot_mut(&mut self) -> &mut P {
        &mut self.plot
    }

    #[must_use]
    pub fn into_plot(self) -> P {
        self.plot
    }

    fn height_calculator(&self) -> Option<HeightCalculatorFn> {
        self.height_lookup
            .as_ref()
            .and_then(|lookup| lookup.height_calculator(&self.config, self.plot.id()))
    }

    fn arrange_unconstrained(&self) -> ArrangeResult {
        let mut width = self.plot.default_width();
        if width < 0.0 {
            width = self.config.default_plot_width;
        }
        let mut height = self.plot.default_height();
        if height < 0.0 {
            height = match self.height_calculator() {
                Some(calculate) => calculate(self),
                None => self.config.default_plot_height,
            };
        }
        if self.trim == ContentTrim::TrimToContent {
            width = self.plot.trim_to_content_width(width);
            height = self.plot.trim_to_content_height(height);
        }

        let total_width = self.plot.calculate_total_width(width);
        let total_height = self.plot.calculate_total_height(height);
        trace!(
            plot_id = self.plot.id(),
            content_width = width,
            content_height = height,
            total_width,
            total_height,
            "measured plot content"
        );
        ArrangeResult::new(total_width, total_height)
    }
}

impl<P: ContentPlot> Block for PlotContentBlock<P> {
    fn id(&self) -> Option<&str> {
        self.plot.id()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.plot.set_id(id);
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
        let content = self.plot.to_content_constraint(constraint);
        match (content.width, content.height) {
            (LengthConstraint::None, LengthConstraint::None) => Ok(self.arrange_unconstrained()),
            (LengthConstraint::None, LengthConstraint::Fixed(_) | LengthConstraint::Range(_))
            | (
                LengthConstraint::Fixed(_),
                LengthConstraint::None | LengthConstraint::Fixed(_) | LengthConstraint::Range(_),
            )
            | (
                LengthConstraint::Range(_),
                LengthConstraint::None | LengthConstraint::Fixed(_) | LengthConstraint::Range(_),
            ) => {
                let err = LayoutError::unsupported_shape(CONTEXT, &content);
                warn!(plot_id = self.plot.id(), error = %err, "rejecting plot content arrangement");
                Err(err)
            }
        }
    }

    /// Draws the plot with this block's background in place of the plot's own.
    fn draw(&mut self, ctx: &mut RenderFrame, area: Rect) -> LayoutResult<()> {
        let mut plot = BackgroundSwap::install(&mut self.plot, self.background);
        plot.draw(ctx, area)
    }
}

impl<P: ContentPlot> fmt::Debug for PlotContentBlock<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotContentBlock")
            .field("plot", &self.plot)
            .field("bounds", &self.bounds)
            .field("background", &self.background)
            .field("trim", &self.trim)
            .field("config", &self.config)
            .field("height_lookup", &self.height_lookup)
            .finish()
    }
}

/// Holds a plot with a substituted background paint; the original paint is
/// restored on drop, including during unwinding.
struct BackgroundSwap<'a, P: ContentPlot> {
    plot: &'a mut P,
    original: Option<Color>,
}

impl<'a, P: ContentPlot> BackgroundSwap<'a, P> {
    fn install(plot: &'a mut P, paint: Option<Color>) -> Self {
        let original = plot.background_paint();
        plot.set_background_paint(paint, false);
        Self { plot, original }
    }
}

impl<P: ContentPlot> Deref for BackgroundSwap<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.plot
    }
}

impl<P: ContentPlot> DerefMut for BackgroundSwap<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.plot
    }
}

impl<P: ContentPlot> Drop for BackgroundSwap<'_, P> {
    fn drop(&mut self) {
        self.plot.set_background_paint(self.original, false);
    }
}

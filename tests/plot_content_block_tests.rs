use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use approx::assert_relative_eq;
use chart_blocks::block::{Block, BlockFrame, LayoutContainer};
use chart_blocks::config::LayoutConfig;
use chart_blocks::core::{
    LengthConstraint, LengthConstraintKind, Range, Rect, RectangleConstraint, RectangleInsets,
    Viewport,
};
use chart_blocks::error::{LayoutError, LayoutResult};
use chart_blocks::plot::{
    ContentPlot, ContentTrim, HeightCalculatorRegistry, PlotContentBlock, SimplePlot,
};
use chart_blocks::render::{Color, RenderFrame};

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
enum DrawOutcome {
    Succeed,
    Fail,
    Panic,
}

/// Plot that trims a fixed amount off its content and records what it saw while drawing.
#[derive(Debug)]
struct ProbePlot {
    frame: BlockFrame,
    default_width: f64,
    default_height: f64,
    trim: f64,
    background: Option<Color>,
    background_seen_in_draw: Option<Option<Color>>,
    notifications: usize,
    outcome: DrawOutcome,
}

impl ProbePlot {
    fn new() -> Self {
        Self {
            frame: BlockFrame::default(),
            default_width: -1.0,
            default_height: -1.0,
            trim: 0.0,
            background: Some(BLUE),
            background_seen_in_draw: None,
            notifications: 0,
            outcome: DrawOutcome::Succeed,
        }
    }
}

impl ContentPlot for ProbePlot {
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

    fn trim_to_content_width(&self, width: f64) -> f64 {
        width - self.trim
    }

    fn trim_to_content_height(&self, height: f64) -> f64 {
        height - self.trim
    }

    fn background_paint(&self) -> Option<Color> {
        self.background
    }

    fn set_background_paint(&mut self, paint: Option<Color>, notify: bool) {
        self.background = paint;
        if notify {
            self.notifications += 1;
        }
    }

    fn draw(&mut self, _ctx: &mut RenderFrame, _area: Rect) -> LayoutResult<()> {
        self.background_seen_in_draw = Some(self.background);
        match self.outcome {
            DrawOutcome::Succeed => Ok(()),
            DrawOutcome::Fail => Err(LayoutError::InvalidData("plot draw failed".to_owned())),
            DrawOutcome::Panic => panic!("plot draw panicked"),
        }
    }

    fn id(&self) -> Option<&str> {
        Some("probe")
    }

    fn set_id(&mut self, _id: Option<String>) {}
}

fn ctx() -> RenderFrame {
    RenderFrame::new(Viewport::new(640, 480))
}

#[test]
fn unset_default_size_falls_back_to_300_by_200() {
    let mut block = PlotContentBlock::new(SimplePlot::new());

    let result = block
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");

    assert_relative_eq!(result.width, 300.0);
    assert_relative_eq!(result.height, 200.0);
}

#[test]
fn measured_size_includes_plot_frame() {
    let plot = SimplePlot::new()
        .with_default_size(120.0, -1.0)
        .with_frame(
            BlockFrame::default()
                .with_margin(RectangleInsets::uniform(5.0))
                .with_border(RectangleInsets::new(0.0, 1.0, 0.0, 1.0)),
        );
    let mut block = PlotContentBlock::new(plot);

    let result = block
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");

    assert_relative_eq!(result.width, 132.0);
    assert_relative_eq!(result.height, 210.0);
}

#[test]
fn configured_default_size_replaces_builtin_fallback() {
    let config = LayoutConfig::default().with_default_plot_size(640.0, 360.0);
    let mut block = PlotContentBlock::new(SimplePlot::new()).with_config(config);

    let result = block
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");

    assert_relative_eq!(result.width, 640.0);
    assert_relative_eq!(result.height, 360.0);
}

#[test]
fn height_calculator_measures_the_wrapper_itself() {
    let mut registry = HeightCalculatorRegistry::new();
    registry.register("volume", |block: &dyn Block| block.bounds().width * 0.5);
    let plot = SimplePlot::new().with_id("volume").with_default_size(80.0, -1.0);
    let mut block = PlotContentBlock::new(plot).with_height_lookup(Rc::new(registry));
    block.set_bounds(Rect::new(0.0, 0.0, 500.0, 10.0));

    let result = block
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");

    assert_relative_eq!(result.width, 80.0);
    assert_relative_eq!(result.height, 250.0);
}

#[test]
fn height_lookup_without_match_uses_default_height() {
    let mut registry = HeightCalculatorRegistry::new();
    registry.register("price", |_: &dyn Block| 999.0);
    let plot = SimplePlot::new().with_id("volume");
    let mut block = PlotContentBlock::new(plot).with_height_lookup(Rc::new(registry));

    let result = block
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");

    assert_relative_eq!(result.height, 200.0);
}

#[test]
fn intrinsic_height_wins_over_height_calculator() {
    let mut registry = HeightCalculatorRegistry::new();
    registry.set_fallback(|_: &dyn Block| 999.0);
    let plot = SimplePlot::new().with_default_size(-1.0, 42.0);
    let mut block = PlotContentBlock::new(plot).with_height_lookup(Rc::new(registry));

    let result = block
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");

    assert_relative_eq!(result.height, 42.0);
}

#[test]
fn trim_variant_passes_content_size_through_plot_trim() {
    let mut plot = ProbePlot::new();
    plot.trim = 20.0;
    plot.frame = BlockFrame::default().with_padding(RectangleInsets::uniform(2.0));

    let mut passthrough = PlotContentBlock::new(plot);
    let result = passthrough
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");
    assert_relative_eq!(result.width, 304.0);
    assert_relative_eq!(result.height, 204.0);

    let mut trimmed = PlotContentBlock::new(passthrough.into_plot())
        .with_content_trim(ContentTrim::TrimToContent);
    let result = trimmed
        .arrange(&ctx(), &RectangleConstraint::none())
        .expect("arrange");
    assert_relative_eq!(result.width, 284.0);
    assert_relative_eq!(result.height, 184.0);
}

#[test]
fn every_constrained_shape_is_rejected_without_touching_bounds() {
    let original = Rect::new(1.0, 2.0, 3.0, 4.0);
    let mut block = PlotContentBlock::new(SimplePlot::new());
    block.set_bounds(original);

    let range = LengthConstraint::Range(Range::new(10.0, 50.0).expect("valid range"));
    let fixed = LengthConstraint::Fixed(50.0);
    let none = LengthConstraint::None;
    for (width, height) in [
        (none, fixed),
        (none, range),
        (fixed, none),
        (fixed, fixed),
        (fixed, range),
        (range, none),
        (range, fixed),
        (range, range),
    ] {
        let constraint = RectangleConstraint::new(width, height);
        let err = block
            .arrange(&ctx(), &constraint)
            .expect_err("constrained shape must be rejected");
        assert!(matches!(err, LayoutError::UnsupportedConstraintShape { .. }));
        assert_eq!(block.bounds(), original);
    }
}

#[test]
fn rejection_reports_the_translated_content_shape() {
    let mut block = PlotContentBlock::new(SimplePlot::new());

    let err = block
        .arrange(&ctx(), &RectangleConstraint::fixed(100.0, 100.0))
        .expect_err("fixed shape must be rejected");

    assert!(matches!(
        err,
        LayoutError::UnsupportedConstraintShape {
            width: LengthConstraintKind::Fixed,
            height: LengthConstraintKind::Fixed,
            ..
        }
    ));
}

#[test]
fn bounds_are_copied_in_and_out() {
    let mut block = PlotContentBlock::new(SimplePlot::new());
    let mut rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    block.set_bounds(rect);
    rect.x = 500.0;

    let mut read = block.bounds();
    assert_eq!(read, Rect::new(10.0, 20.0, 30.0, 40.0));
    read.width = -1.0;

    assert_eq!(block.bounds(), Rect::new(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn id_is_delegated_to_the_plot() {
    let mut block = PlotContentBlock::new(SimplePlot::new().with_id("price"));
    assert_eq!(block.id(), Some("price"));

    block.set_id(Some("volume".to_owned()));

    assert_eq!(block.plot().id(), Some("volume"));
}

#[test]
fn draw_swaps_background_and_restores_it() {
    let mut block = PlotContentBlock::new(ProbePlot::new()).with_background(RED);

    block
        .draw(&mut ctx(), Rect::new(0.0, 0.0, 100.0, 100.0))
        .expect("draw");

    assert_eq!(block.plot().background_seen_in_draw, Some(Some(RED)));
    assert_eq!(block.plot().background, Some(BLUE));
    assert_eq!(block.plot().notifications, 0);
}

#[test]
fn draw_without_override_clears_background_during_draw() {
    let mut block = PlotContentBlock::new(ProbePlot::new());

    block
        .draw(&mut ctx(), Rect::new(0.0, 0.0, 100.0, 100.0))
        .expect("draw");

    assert_eq!(block.plot().background_seen_in_draw, Some(None));
    assert_eq!(block.plot().background, Some(BLUE));
}

#[test]
fn failing_draw_still_restores_background() {
    let mut plot = ProbePlot::new();
    plot.outcome = DrawOutcome::Fail;
    let mut block = PlotContentBlock::new(plot).with_background(RED);

    let err = block
        .draw(&mut ctx(), Rect::new(0.0, 0.0, 100.0, 100.0))
        .expect_err("draw must fail");

    assert!(matches!(err, LayoutError::InvalidData(_)));
    assert_eq!(block.plot().background, Some(BLUE));
}

#[test]
fn panicking_draw_still_restores_background() {
    let mut plot = ProbePlot::new();
    plot.outcome = DrawOutcome::Panic;
    let mut block = PlotContentBlock::new(plot).with_background(RED);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        block.draw(&mut ctx(), Rect::new(0.0, 0.0, 100.0, 100.0))
    }));

    assert!(outcome.is_err());
    assert_eq!(block.plot().background, Some(BLUE));
}

#[test]
fn simple_plot_draws_with_wrapper_background() {
    let plot = SimplePlot::new().with_background(BLUE);
    let mut block = PlotContentBlock::new(plot).with_background(RED);
    let mut frame = ctx();

    block
        .draw(&mut frame, Rect::new(0.0, 0.0, 50.0, 50.0))
        .expect("draw");

    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.rects[0].fill_color, RED);
    assert_eq!(block.plot().background_paint(), Some(BLUE));
    assert_eq!(block.plot().revision(), 0);
}

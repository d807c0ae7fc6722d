//! chart-blocks: constraint-based block layout for chart containers.
//!
//! Containers dock axis blocks against their edges and hand the remaining
//! content area to a plot body. Arrangement is a pure measuring pass over
//! shared block handles; drawing appends primitives to a [`render::RenderFrame`]
//! that any [`render::Renderer`] backend can consume.

pub mod block;
pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod plot;
pub mod render;
pub mod telemetry;

pub use block::{Block, BlockContainer, SharedBlock};
pub use config::{LayoutConfig, UnconstrainedEdges};
pub use error::{LayoutError, LayoutResult};
pub use layout::{Arrangement, EdgeDockArrangement};
pub use plot::{ContentPlot, PlotContentBlock};

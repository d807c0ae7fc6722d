use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

pub const DEFAULT_PLOT_WIDTH: f64 = 300.0;
pub const DEFAULT_PLOT_HEIGHT: f64 = 200.0;

/// How an edge-dock arrangement sizes itself when neither axis is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnconstrainedEdges {
    /// Report the center block's own size; edge blocks are not measured.
    #[default]
    CenterOnly,
    /// Measure edge blocks too and add their extents and the container insets.
    Measure,
}

/// Layout parameters shared by arrangers and plot content blocks.
///
/// Serializable so hosts can persist layout defaults next to their chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_plot_width")]
    pub default_plot_width: f64,
    #[serde(default = "default_plot_height")]
    pub default_plot_height: f64,
    #[serde(default)]
    pub unconstrained_edges: UnconstrainedEdges,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_plot_width: default_plot_width(),
            default_plot_height: default_plot_height(),
            unconstrained_edges: UnconstrainedEdges::default(),
        }
    }
}

impl LayoutConfig {
    /// Sets the content size used for plots without an intrinsic size.
    #[must_use]
    pub fn with_default_plot_size(mut self, width: f64, height: f64) -> Self {
        self.default_plot_width = width;
        self.default_plot_height = height;
        self
    }

    #[must_use]
    pub fn with_unconstrained_edges(mut self, mode: UnconstrainedEdges) -> Self {
        self.unconstrained_edges = mode;
        self
    }

    pub fn validate(self) -> LayoutResult<Self> {
        for (field, value) in [
            ("default_plot_width", self.default_plot_width),
            ("default_plot_height", self.default_plot_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "`{field}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> LayoutResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            LayoutError::InvalidConfig(format!("failed to parse layout config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> LayoutResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            LayoutError::InvalidConfig(format!("failed to serialize layout config: {e}"))
        })
    }
}

fn default_plot_width() -> f64 {
    DEFAULT_PLOT_WIDTH
}

fn default_plot_height() -> f64 {
    DEFAULT_PLOT_HEIGHT
}

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::block::Block;
use crate::config::LayoutConfig;

use super::{HeightCalculatorFn, HeightCalculatorLookup};

/// Height calculators keyed by plot id, with an optional catch-all.
#[derive(Clone, Default)]
pub struct HeightCalculatorRegistry {
    by_plot_id: IndexMap<String, HeightCalculatorFn>,
    fallback: Option<HeightCalculatorFn>,
}

impl HeightCalculatorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `calculator` for the plot with `plot_id`, replacing any previous one.
    pub fn register<F>(&mut self, plot_id: impl Into<String>, calculator: F)
    where
        F: Fn(&dyn Block) -> f64 + Send + Sync + 'static,
    {
        self.by_plot_id.insert(plot_id.into(), Arc::new(calculator));
    }

    /// Used for plots without a registered calculator, including unnamed ones.
    pub fn set_fallback<F>(&mut self, calculator: F)
    where
        F: Fn(&dyn Block) -> f64 + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(calculator));
    }

    pub fn remove(&mut self, plot_id: &str) -> bool {
        self.by_plot_id.shift_remove(plot_id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_plot_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_plot_id.is_empty() && self.fallback.is_none()
    }
}

impl HeightCalculatorLookup for HeightCalculatorRegistry {
    fn height_calculator(
        &self,
        _config: &LayoutConfig,
        plot_id: Option<&str>,
    ) -> Option<HeightCalculatorFn> {
        plot_id
            .and_then(|id| self.by_plot_id.get(id))
            .or(self.fallback.as_ref())
            .cloned()
    }
}

impl fmt::Debug for HeightCalculatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeightCalculatorRegistry")
            .field("plot_ids", &self.by_plot_id.keys().collect::<Vec<_>>())
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

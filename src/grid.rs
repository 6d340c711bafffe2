//! The fixed α–lf parameter grid for the Simon-task sweep.
//!
//! Both axes are derived from integer counters divided by 100.0 so every
//! value has an exact two-decimal rendering in filenames and scripts.

/// One point of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub alpha: f64,
    pub lf: f64,
}

/// The two swept axes (single source of truth for the run).
#[derive(Debug, Clone)]
pub struct ParamGrid {
    pub alpha_vals: Vec<f64>,
    pub lf_vals: Vec<f64>,
}

impl Default for ParamGrid {
    fn default() -> Self {
        Self {
            alpha_vals: (1..=5).map(|i| (10 * i) as f64 / 100.0).collect(),  // 0.10 … 0.50
            lf_vals:    (0..=4).map(|i| (25 * i) as f64 / 100.0).collect(),  // 0.00 … 1.00
        }
    }
}

impl ParamGrid {
    /// Number of points in the Cartesian product.
    pub fn len(&self) -> usize {
        self.alpha_vals.len() * self.lf_vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha_vals.is_empty() || self.lf_vals.is_empty()
    }

    /// All (alpha, lf) pairs, outer loop over alpha, inner over lf,
    /// ascending on both axes.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.alpha_vals.iter().flat_map(move |&alpha| {
            self.lf_vals.iter().map(move |&lf| GridPoint { alpha, lf })
        })
    }
}

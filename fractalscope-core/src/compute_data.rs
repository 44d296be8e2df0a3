// fractalscope-core/src/compute_data.rs

use serde::{Deserialize, Serialize};

/// Terminal state of an escape-time iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Left the escape radius (or, for Newton, converged) after `iterations` steps.
    Escaped { iterations: u32 },
    /// Iteration budget exhausted: treated as inside the set.
    Bounded,
}

/// Data computed for an escape-time pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeTimeData {
    /// Number of iterations before escape (or max_iterations if didn't escape)
    pub iterations: u32,
    /// Maximum iterations used for this computation (for colorizer normalization)
    pub max_iterations: u32,
    /// Whether the point reached a terminal state before the budget ran out
    pub escaped: bool,
}

impl EscapeTimeData {
    pub fn escaped(iterations: u32, max_iterations: u32) -> Self {
        Self {
            iterations,
            max_iterations,
            escaped: true,
        }
    }

    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            max_iterations,
            escaped: false,
        }
    }

    pub fn classification(&self) -> Classification {
        if self.escaped {
            Classification::Escaped {
                iterations: self.iterations,
            }
        } else {
            Classification::Bounded
        }
    }

    /// `iterations / max_iterations`, in `[0, 1]`.
    pub fn normalized(&self) -> f64 {
        if self.max_iterations == 0 {
            return 0.0;
        }
        (self.iterations as f64 / self.max_iterations as f64).clamp(0.0, 1.0)
    }
}

/// Unified enum for all compute results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputeData {
    /// Per-pixel escape-time classification.
    EscapeTime(EscapeTimeData),
    /// Geometric and stochastic kinds only know whether a pixel was painted.
    Painted(bool),
}

// ============================================================================
// Staircase Configuration
// Descent depth, digit precision, and convergence reporting
// ============================================================================

use crate::numeric::DEFAULT_PRECISION;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default descent depth; deep enough for every surveyed staircase to settle.
pub const DEFAULT_DEPTH: usize = 100;

/// Default tolerance below which successive staircase values count as
/// converged.
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// Configuration for a staircase descent.
///
/// Passed by value everywhere it is needed; there is no process-wide
/// precision state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaircaseConfig {
    /// Number of fractional digits retained when expanding the starting
    /// number (truncated, never rounded)
    pub precision: usize,

    /// Number of reweighting iterations; the sole termination bound
    pub depth: usize,

    /// Tolerance used when reporting convergence between successive values
    pub convergence_tolerance: f64,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            depth: DEFAULT_DEPTH,
            convergence_tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
        }
    }
}

impl StaircaseConfig {
    /// Create a configuration with explicit precision and depth.
    pub fn new(precision: usize, depth: usize) -> Self {
        Self {
            precision,
            depth,
            convergence_tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
        }
    }

    /// Builder method: set the fractional-digit precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: set the descent depth
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Builder method: set the convergence-reporting tolerance
    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.convergence_tolerance.is_finite() || self.convergence_tolerance <= 0.0 {
            return Err("Convergence tolerance must be positive and finite".to_string());
        }

        // f64 carries ~17 significant decimal digits; anything past that is
        // noise from the binary representation, not from the input value.
        if self.precision > 17 {
            return Err("Precision beyond 17 digits exceeds f64 significance".to_string());
        }

        Ok(())
    }

    /// Shallow preset for quick interactive probing
    pub fn shallow() -> Self {
        Self::default().with_depth(16)
    }
}

// ============================================================================
// Staircase
// The materialized descent sequence of a dungeon number
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The finite sequence of reweighted values produced by a descent.
///
/// Element `i` is the starting number reweighted under element `i - 1` as
/// base; element 0 used the starting number as its own base. The sequence is
/// fully materialized in iteration order — downstream code reads the last
/// element as the converged value and may inspect the whole sequence for
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Staircase {
    number: f64,
    values: Vec<f64>,
}

impl Staircase {
    /// Assemble a staircase from a starting number and its descent values.
    pub fn from_values(number: f64, values: Vec<f64>) -> Self {
        Self { number, values }
    }

    /// The fixed starting number the descent reweighted at every step.
    #[inline]
    pub fn number(&self) -> f64 {
        self.number
    }

    /// All descent values in iteration order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the staircase, returning the raw sequence.
    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Number of descent steps taken.
    #[inline]
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    /// The final descent value, if any steps were taken.
    #[inline]
    pub fn converged(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Index of the first step whose value lies within `tolerance` of its
    /// predecessor, or `None` if the sequence never settled.
    pub fn convergence_step(&self, tolerance: f64) -> Option<usize> {
        self.values
            .windows(2)
            .position(|pair| (pair[1] - pair[0]).abs() <= tolerance)
            .map(|i| i + 1)
    }

    /// Whether the last two values lie within `tolerance` of each other.
    pub fn is_stable(&self, tolerance: f64) -> bool {
        match self.values.as_slice() {
            [.., a, b] => (b - a).abs() <= tolerance,
            _ => false,
        }
    }
}

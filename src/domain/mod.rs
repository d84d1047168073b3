// ============================================================================
// Domain Module
// Value objects and configuration for staircase descents
// ============================================================================

pub mod config;
pub mod staircase;

pub use config::{StaircaseConfig, DEFAULT_CONVERGENCE_TOLERANCE, DEFAULT_DEPTH};
pub use staircase::Staircase;

// ============================================================================
// Dungeon Numbers Library
// Iterated mixed-radix digit reweighting for locating metallic-mean constants
// ============================================================================

//! # Dungeon Numbers
//!
//! A pure computational engine for "dungeon numbers": sequences produced by
//! recursively reinterpreting a number's own decimal digits under an evolving
//! positional base.
//!
//! Each descent step takes the fixed digit expansion of a starting number and
//! reweights it with the previous step's output as the base. For many
//! starting values the resulting staircase converges, and the fixed points it
//! lands on are the metallic means — the golden ratio and its generalizations.
//!
//! ## Features
//!
//! - **Explicit digit extraction** — digits come from arithmetic on the
//!   fractional remainder, never from platform float formatting
//! - **Depth-bounded descents** with per-step observation hooks
//! - **Exhaustive grid sweeps**, sequential or fanned out across scoped
//!   threads, with endpoint classification against the metallic means
//! - **No ambient state** — precision and depth travel by value in
//!   configuration structs
//!
//! ## Example
//!
//! ```rust
//! use dungeon_numbers::prelude::*;
//!
//! // Descend 1.1 to depth 100.
//! let engine = StaircaseEngine::with_config(StaircaseConfig::default());
//! let descent = engine.descend(1.1).unwrap();
//!
//! // The staircase settles on the golden ratio.
//! let endpoint = descent.converged().unwrap();
//! assert!((endpoint - metallic_mean(1)).abs() < 0.01);
//!
//! // Sweep a grid of starting values and see where they land.
//! let report = run_sweep(&SweepConfig::metallic_survey()).unwrap();
//! assert_eq!(report.points()[1].metallic_index, Some(1));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Staircase, StaircaseConfig};
    pub use crate::engine::{
        run_sweep, run_sweep_parallel, staircase, StaircaseEngine, SweepConfig, SweepPoint,
        SweepReport,
    };
    pub use crate::interfaces::{LoggingStepHandler, NoOpStepHandler, StepEvent, StepHandler};
    pub use crate::numeric::{
        metallic_mean, nearest_metallic_mean, reweight, DecimalExpansion, NumericError,
        NumericResult,
    };
}

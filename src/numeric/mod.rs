// ============================================================================
// Numeric Module
// Digit extraction and mixed-radix reweighting primitives
// ============================================================================
//
// This module provides:
// - DecimalExpansion: a positive real split into its decimal digits
// - reweight: digit reinterpretation under an arbitrary real base
// - metallic_mean: closed-form reference constants
// - NumericError: error types for expansion extraction
//
// Design principles:
// - Digits come from arithmetic, never from float-to-string formatting
// - Fallible extraction returns Result (no panics)
// - All computation stays in f64; IEEE-754 semantics propagate

mod errors;
mod expansion;
mod metallic;

pub use errors::{NumericError, NumericResult};
pub use expansion::{reweight, DecimalExpansion, DEFAULT_PRECISION};
pub use metallic::{metallic_mean, nearest_metallic_mean};

// ============================================================================
// Grid Sweep
// Exhaustive descent over a grid of starting values with endpoint
// classification against the metallic means
// ============================================================================

use super::descent::StaircaseEngine;
use crate::domain::StaircaseConfig;
use crate::numeric::{nearest_metallic_mean, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a sweep over starting values.
///
/// The grid is specified in `Decimal` so that steps like 0.1 accumulate
/// exactly; each grid point is converted to `f64` only when the descent runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepConfig {
    /// First grid value
    pub start: Decimal,

    /// Grid increment
    pub step: Decimal,

    /// Number of grid points
    pub points: usize,

    /// Per-point descent configuration
    pub staircase: StaircaseConfig,

    /// Absolute tolerance when matching endpoints against metallic means
    pub mean_tolerance: f64,

    /// Highest metallic-mean index scanned during classification
    pub max_mean_index: u32,
}

impl SweepConfig {
    /// Create a sweep over `points` values starting at `start`, stepping by
    /// `step`, with default descent and classification settings.
    pub fn new(start: Decimal, step: Decimal, points: usize) -> Self {
        Self {
            start,
            step,
            points,
            staircase: StaircaseConfig::default(),
            mean_tolerance: 0.01,
            max_mean_index: 9,
        }
    }

    /// Builder method: set the per-point descent configuration
    pub fn with_staircase(mut self, staircase: StaircaseConfig) -> Self {
        self.staircase = staircase;
        self
    }

    /// Builder method: set the metallic-mean matching tolerance
    pub fn with_mean_tolerance(mut self, tolerance: f64) -> Self {
        self.mean_tolerance = tolerance;
        self
    }

    /// Builder method: set the highest metallic-mean index to scan
    pub fn with_max_mean_index(mut self, max_n: u32) -> Self {
        self.max_mean_index = max_n;
        self
    }

    /// The standard survey: 90 points from 1.0 in steps of 0.1, descent
    /// depth 100, endpoints matched against metallic means 1..=9 within
    /// 0.01.
    pub fn metallic_survey() -> Self {
        Self::new(Decimal::ONE, Decimal::new(1, 1), 90)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.start <= Decimal::ZERO {
            return Err("Sweep start must be positive".to_string());
        }
        if self.step <= Decimal::ZERO {
            return Err("Sweep step must be positive".to_string());
        }
        if !self.mean_tolerance.is_finite() || self.mean_tolerance <= 0.0 {
            return Err("Mean tolerance must be positive and finite".to_string());
        }
        self.staircase.validate()
    }

    /// Grid values as `f64`, stepped exactly in decimal before conversion.
    pub fn grid(&self) -> Vec<f64> {
        (0..self.points)
            .map(|i| {
                let value = self.start + self.step * Decimal::from(i as u64);
                // A decimal outside f64 range converts to NaN and is rejected
                // by digit extraction when the descent runs.
                value.to_f64().unwrap_or(f64::NAN)
            })
            .collect()
    }
}

// ============================================================================
// Results
// ============================================================================

/// Outcome of a single grid point
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepPoint {
    /// The starting value this descent ran from
    pub input: f64,

    /// The final descent value (the starting value itself at depth 0)
    pub endpoint: f64,

    /// Index of the metallic mean the endpoint landed on, if any
    pub metallic_index: Option<u32>,
}

/// Collected output of a sweep, in grid order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepReport {
    points: Vec<SweepPoint>,
}

impl SweepReport {
    /// All grid points in order.
    #[inline]
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Number of grid points swept.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sweep covered no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid points whose endpoint landed on the `n`-th metallic mean.
    pub fn hits(&self, n: u32) -> impl Iterator<Item = &SweepPoint> {
        self.points
            .iter()
            .filter(move |point| point.metallic_index == Some(n))
    }
}

// ============================================================================
// Execution
// ============================================================================

fn sweep_point(
    engine: &StaircaseEngine,
    config: &SweepConfig,
    value: f64,
) -> NumericResult<SweepPoint> {
    let descent = engine.descend(value)?;
    let endpoint = descent.converged().unwrap_or(value);
    Ok(SweepPoint {
        input: value,
        endpoint,
        metallic_index: nearest_metallic_mean(
            endpoint,
            config.max_mean_index,
            config.mean_tolerance,
        ),
    })
}

/// Run the sweep sequentially.
///
/// The sweep is exhaustive: the first failing grid point aborts the whole
/// run. Skipping points silently would corrupt any downstream comparison
/// against the metallic means.
///
/// # Errors
/// Propagates the first digit-extraction failure, in grid order.
pub fn run_sweep(config: &SweepConfig) -> NumericResult<SweepReport> {
    let engine = StaircaseEngine::with_config(config.staircase.clone());
    let mut points = Vec::with_capacity(config.points);
    for value in config.grid() {
        points.push(sweep_point(&engine, config, value)?);
    }

    tracing::debug!("sweep of {} grid points complete", points.len());
    Ok(SweepReport { points })
}

/// Run the sweep across `workers` scoped threads.
///
/// Grid points are independent, so the sweep fans out per chunk and the
/// report is reassembled in grid order regardless of completion order. The
/// contract matches [`run_sweep`] exactly: identical report, and the first
/// failing point (in grid order) aborts the run.
///
/// # Errors
/// Propagates the first digit-extraction failure, in grid order.
pub fn run_sweep_parallel(config: &SweepConfig, workers: usize) -> NumericResult<SweepReport> {
    let grid = config.grid();
    if grid.is_empty() {
        return Ok(SweepReport { points: Vec::new() });
    }

    let workers = workers.clamp(1, grid.len());
    let chunk_size = grid.len().div_ceil(workers);
    let indexed: Vec<(usize, f64)> = grid.iter().copied().enumerate().collect();

    let (tx, rx) = crossbeam::channel::unbounded();
    crossbeam::thread::scope(|scope| {
        for chunk in indexed.chunks(chunk_size) {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let engine = StaircaseEngine::with_config(config.staircase.clone());
                for &(index, value) in chunk {
                    let _ = tx.send((index, sweep_point(&engine, config, value)));
                }
            });
        }
    })
    .expect("sweep worker panicked");
    drop(tx);

    let mut collected: Vec<(usize, NumericResult<SweepPoint>)> = rx.iter().collect();
    collected.sort_by_key(|&(index, _)| index);

    let points = collected
        .into_iter()
        .map(|(_, point)| point)
        .collect::<NumericResult<Vec<SweepPoint>>>()?;

    tracing::debug!(
        "parallel sweep of {} grid points complete across {} workers",
        points.len(),
        workers
    );
    Ok(SweepReport { points })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::metallic_mean;

    #[test]
    fn test_grid_steps_exactly() {
        let config = SweepConfig::metallic_survey();
        let grid = config.grid();

        assert_eq!(grid.len(), 90);
        assert_eq!(grid[0], 1.0);
        // Decimal stepping: index 1 is exactly the f64 nearest to 1.1, not
        // 1.0 + 0.1 accumulated in binary.
        assert_eq!(grid[1], 1.1);
        assert_eq!(grid[89], 9.9);
    }

    #[test]
    fn test_survey_classifies_golden_start() {
        let report = run_sweep(&SweepConfig::metallic_survey()).unwrap();
        assert_eq!(report.len(), 90);

        let golden = &report.points()[1];
        assert_eq!(golden.input, 1.1);
        assert!((golden.endpoint - metallic_mean(1)).abs() < 0.01);
        assert_eq!(golden.metallic_index, Some(1));
    }

    #[test]
    fn test_whole_number_grid_point_stays_flat() {
        let report = run_sweep(&SweepConfig::metallic_survey()).unwrap();

        // 1.0 has no fractional digits, so it reweights to itself forever
        // and lands on no metallic mean.
        let flat = &report.points()[0];
        assert_eq!(flat.endpoint, 1.0);
        assert_eq!(flat.metallic_index, None);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = SweepConfig::new(Decimal::ONE, Decimal::new(1, 1), 24);
        let sequential = run_sweep(&config).unwrap();
        for workers in [1, 3, 8] {
            let parallel = run_sweep_parallel(&config, workers).unwrap();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_empty_sweep() {
        let config = SweepConfig::new(Decimal::ONE, Decimal::new(1, 1), 0);
        assert!(run_sweep(&config).unwrap().is_empty());
        assert!(run_sweep_parallel(&config, 4).unwrap().is_empty());
    }

    #[test]
    fn test_depth_zero_endpoint_is_input() {
        let config = SweepConfig::new(Decimal::new(11, 1), Decimal::new(1, 1), 3)
            .with_staircase(StaircaseConfig::default().with_depth(0));
        let report = run_sweep(&config).unwrap();
        for point in report.points() {
            assert_eq!(point.endpoint, point.input);
        }
    }

    #[test]
    fn test_validation() {
        assert!(SweepConfig::metallic_survey().validate().is_ok());

        let bad_step = SweepConfig::new(Decimal::ONE, Decimal::ZERO, 10);
        assert!(bad_step.validate().is_err());

        let bad_start = SweepConfig::new(Decimal::ZERO, Decimal::ONE, 10);
        assert!(bad_start.validate().is_err());

        let bad_tolerance = SweepConfig::metallic_survey().with_mean_tolerance(-0.5);
        assert!(bad_tolerance.validate().is_err());
    }

    #[test]
    fn test_hits_iterator() {
        let report = run_sweep(&SweepConfig::metallic_survey()).unwrap();
        assert!(report.hits(1).any(|point| point.input == 1.1));
        for point in report.hits(2) {
            assert!((point.endpoint - metallic_mean(2)).abs() <= 0.01);
        }
    }
}

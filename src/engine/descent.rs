// ============================================================================
// Staircase Engine
// Runs depth-bounded descents and reports step events
// ============================================================================

use crate::domain::{Staircase, StaircaseConfig};
use crate::interfaces::{NoOpStepHandler, StepEvent, StepHandler};
use crate::numeric::{DecimalExpansion, NumericResult};
use std::sync::Arc;

/// Depth-bounded descent runner.
///
/// Holds the descent configuration and a [`StepHandler`] that observes each
/// iteration. The engine itself is stateless between descents; it can be
/// shared freely across threads.
pub struct StaircaseEngine {
    config: StaircaseConfig,
    handler: Arc<dyn StepHandler>,
}

impl StaircaseEngine {
    /// Create an engine with an explicit step handler.
    pub fn new(config: StaircaseConfig, handler: Arc<dyn StepHandler>) -> Self {
        Self { config, handler }
    }

    /// Create an engine that reports no events.
    pub fn with_config(config: StaircaseConfig) -> Self {
        Self::new(config, Arc::new(NoOpStepHandler))
    }

    /// The descent configuration this engine runs with.
    #[inline]
    pub fn config(&self) -> &StaircaseConfig {
        &self.config
    }

    /// Descend `number` to the configured depth.
    ///
    /// The digit expansion of `number` is extracted once; every iteration
    /// reweights that same expansion under the evolving base, starting from
    /// `number` itself. A `Converged` event fires the first time successive
    /// values come within the configured tolerance; iteration always runs to
    /// the full depth regardless.
    ///
    /// # Errors
    /// Propagates extraction failures from [`DecimalExpansion::from_value`]
    /// without recovery.
    pub fn descend(&self, number: f64) -> NumericResult<Staircase> {
        let expansion = DecimalExpansion::from_value(number, self.config.precision)?;

        let mut values = Vec::with_capacity(self.config.depth);
        let mut base = number;
        let mut converged = false;

        for index in 0..self.config.depth {
            let previous = base;
            base = expansion.reweight(base);
            values.push(base);
            self.handler.on_event(StepEvent::Step { index, value: base });

            if !converged && index > 0 {
                let delta = (base - previous).abs();
                if delta <= self.config.convergence_tolerance {
                    converged = true;
                    self.handler.on_event(StepEvent::Converged {
                        index,
                        value: base,
                        delta,
                    });
                }
            }
        }

        tracing::trace!(
            "descent of {} complete: depth {}, endpoint {:?}",
            number,
            self.config.depth,
            values.last()
        );

        Ok(Staircase::from_values(number, values))
    }
}

/// Descend `number` to `depth` with the default configuration and return the
/// raw sequence.
///
/// # Errors
/// Propagates extraction failures from [`DecimalExpansion::from_value`].
pub fn staircase(number: f64, depth: usize) -> NumericResult<Vec<f64>> {
    let engine = StaircaseEngine::with_config(StaircaseConfig::default().with_depth(depth));
    Ok(engine.descend(number)?.into_values())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{metallic_mean, reweight, NumericError};
    use std::sync::Mutex;

    struct RecordingHandler {
        events: Mutex<Vec<StepEvent>>,
    }

    impl RecordingHandler {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    impl StepHandler for RecordingHandler {
        fn on_event(&self, event: StepEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_length_contract() {
        for depth in [0, 1, 7, 100] {
            let s = staircase(1.1, depth).unwrap();
            assert_eq!(s.len(), depth);
        }
    }

    #[test]
    fn test_determinism() {
        let a = staircase(1.3, 64).unwrap();
        let b = staircase(1.3, 64).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_golden_ratio_descent() {
        // 1.1 expands to digits [1].[1 0 0 ...], so each step computes
        // 1 + 1/base, whose fixed point is the golden ratio.
        let s = staircase(1.1, 100).unwrap();
        let endpoint = *s.last().unwrap();
        assert!((endpoint - metallic_mean(1)).abs() < 0.01);
    }

    #[test]
    fn test_fixed_point_idempotence() {
        let engine = StaircaseEngine::with_config(StaircaseConfig::default());
        let descent = engine.descend(1.1).unwrap();
        assert!(descent.is_stable(1e-6));

        let fixed_point = descent.converged().unwrap();
        let next = reweight(1.1, fixed_point, 10).unwrap();
        assert!((next - fixed_point).abs() < 1e-6);
    }

    #[test]
    fn test_whole_number_descends_flat() {
        // Empty fractional digits: 2 reweights to 2 under every base.
        let s = staircase(2.0, 10).unwrap();
        assert!(s.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_error_propagation() {
        let engine = StaircaseEngine::with_config(StaircaseConfig::default());
        assert_eq!(engine.descend(0.0).unwrap_err(), NumericError::NonPositiveInput);
        assert_eq!(engine.descend(-1.1).unwrap_err(), NumericError::NonPositiveInput);
        assert_eq!(engine.descend(f64::NAN).unwrap_err(), NumericError::NotFinite);
    }

    #[test]
    fn test_step_events() {
        let handler = Arc::new(RecordingHandler::new());
        let engine = StaircaseEngine::new(
            StaircaseConfig::default().with_depth(40),
            Arc::clone(&handler) as Arc<dyn StepHandler>,
        );
        engine.descend(1.1).unwrap();

        let events = handler.events.lock().unwrap();
        let steps = events
            .iter()
            .filter(|e| matches!(e, StepEvent::Step { .. }))
            .count();
        assert_eq!(steps, 40);

        // 1 + 1/x contracts fast enough to converge within 40 steps.
        assert!(events
            .iter()
            .any(|e| matches!(e, StepEvent::Converged { .. })));
    }
}

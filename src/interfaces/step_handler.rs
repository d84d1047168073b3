// ============================================================================
// Step Handler Interface
// Defines the contract for observing descent progress
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while a staircase descent runs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepEvent {
    /// A reweighting step produced the next staircase value
    Step { index: usize, value: f64 },

    /// Successive values first came within the convergence tolerance
    Converged {
        index: usize,
        value: f64,
        delta: f64,
    },
}

/// Handler trait for processing descent events
/// Implementations can handle logging, progress reporting, diagnostics, etc.
pub trait StepHandler: Send + Sync {
    /// Handle a descent event
    fn on_event(&self, event: StepEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<StepEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op handler for testing and plain descents
pub struct NoOpStepHandler;

impl StepHandler for NoOpStepHandler {
    fn on_event(&self, _event: StepEvent) {
        // Do nothing
    }
}

/// Logging handler
pub struct LoggingStepHandler;

impl StepHandler for LoggingStepHandler {
    fn on_event(&self, event: StepEvent) {
        tracing::debug!("Staircase event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpStepHandler;
        handler.on_event(StepEvent::Step {
            index: 0,
            value: 1.618,
        });
        // Should not panic
    }

    #[test]
    fn test_batch_dispatch() {
        let handler = NoOpStepHandler;
        handler.on_events(vec![
            StepEvent::Step {
                index: 0,
                value: 1.9,
            },
            StepEvent::Converged {
                index: 1,
                value: 1.62,
                delta: 1e-7,
            },
        ]);
    }
}

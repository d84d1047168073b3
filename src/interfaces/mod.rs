// ============================================================================
// Interfaces Module
// Contracts between the engine and its external collaborators
// ============================================================================

mod step_handler;

pub use step_handler::{LoggingStepHandler, NoOpStepHandler, StepEvent, StepHandler};

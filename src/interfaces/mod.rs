// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod rounding_policy;

pub use event_handler::{CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
pub use rounding_policy::RoundingPolicy;

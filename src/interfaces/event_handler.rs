// ============================================================================
// Event Handler Interface
// Defines the contract for handling calculator events
// ============================================================================

use crate::domain::Fraction;
use crate::engine::Action;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// Action accepted and state advanced
    ActionApplied {
        action: Action,
        timestamp: DateTime<Utc>,
    },

    /// Action rejected with reason, state unchanged
    ActionRejected {
        action: Action,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// A new exact result is showing
    ResultComputed {
        result: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// The result was re-expressed over the rounding denominator
    ResultRounded {
        exact: Fraction,
        rounded: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Memory register changed
    MemoryChanged {
        memory: Option<Fraction>,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history tapes, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

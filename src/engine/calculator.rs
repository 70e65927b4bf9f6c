// ============================================================================
// Calculator
// Session wrapper threading state, configuration and events
// ============================================================================

use super::calculator_state::{Action, CalculatorState};
use crate::domain::{CalculatorConfig, Fraction};
use crate::interfaces::{CalculatorEvent, EventHandler};
use crate::numeric::{NumericError, NumericResult};
use chrono::Utc;
use std::sync::Arc;

/// Calculator session: owns the current state and reports every transition
/// to its event handler.
pub struct Calculator {
    /// Current session state
    state: CalculatorState,

    /// Settings in effect
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator with an empty state
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
            event_handler,
        }
    }

    /// Apply an action and return the events it produced.
    ///
    /// A rejected action leaves the state untouched and yields an
    /// `ActionRejected` event.
    pub fn dispatch(&mut self, action: Action) -> Vec<CalculatorEvent> {
        let events = match self.step(action) {
            Ok(events) => events,
            Err(e) => vec![Self::rejected(action, e)],
        };

        // Emit events
        self.event_handler.on_events(events.clone());

        events
    }

    /// Apply a sequence of actions, stopping at the first rejection.
    ///
    /// Every applied action reports its events to the handler, and the
    /// rejected one reports `ActionRejected` before the error is returned.
    pub fn dispatch_all(&mut self, actions: &[Action]) -> NumericResult<()> {
        for action in actions {
            match self.step(*action) {
                Ok(events) => self.event_handler.on_events(events),
                Err(e) => {
                    self.event_handler
                        .on_events(vec![Self::rejected(*action, e)]);
                    return Err(e);
                },
            }
        }
        tracing::trace!("Applied {} actions", actions.len());
        Ok(())
    }

    /// Transition to the next state and collect the events describing it
    fn step(&mut self, action: Action) -> NumericResult<Vec<CalculatorEvent>> {
        let next = self.state.apply(&action, &self.config)?;
        let mut events = vec![CalculatorEvent::ActionApplied {
            action,
            timestamp: Utc::now(),
        }];

        // `=` always reports its result, even when it repeats the last one
        let computed = matches!(action, Action::Equals);

        if let Some(result) = next
            .result
            .filter(|r| computed || Some(*r) != self.state.result)
        {
            events.push(CalculatorEvent::ResultComputed {
                result,
                timestamp: Utc::now(),
            });
        }

        if let Some(rounded) = next
            .rounded_result
            .filter(|r| computed || Some(*r) != self.state.rounded_result)
        {
            events.push(CalculatorEvent::ResultRounded {
                exact: next.result.unwrap_or(next.curr_operand),
                rounded,
                timestamp: Utc::now(),
            });
        }

        if next.memory != self.state.memory {
            events.push(CalculatorEvent::MemoryChanged {
                memory: next.memory,
                timestamp: Utc::now(),
            });
        }

        self.state = next;
        Ok(events)
    }

    fn rejected(action: Action, error: NumericError) -> CalculatorEvent {
        tracing::warn!("Rejected calculator action {:?}: {}", action, error);
        CalculatorEvent::ActionRejected {
            action,
            reason: error.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Replace the configuration
    pub fn set_config(&mut self, config: CalculatorConfig) -> Result<(), String> {
        config.validate()?;
        tracing::debug!("Calculator configuration changed: {:?}", config);
        self.config = config;
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Get the current state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Value to show on the display
    pub fn display_value(&self) -> Fraction {
        self.state.display_value()
    }
}

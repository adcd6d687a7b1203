//! Stamina event system for decoupled notification of the UI layer.
//!
//! The engine emits events, the host drains them at its own pace to drive
//! bars, toasts, countdown refreshes, etc. without tight coupling.

/// Events the engine can emit while settling or consuming stamina
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaminaEvent {
    /// Completed regen cycles were applied
    Regenerated {
        /// Stamina actually gained (after clamping to max)
        amount: u32,
        /// Stamina after the gain
        current: u32,
    },
    /// A stamina-costed action was paid for
    Consumed {
        amount: u32,
        remaining: u32,
    },
    /// A consumption attempt was rejected; no state changed
    ConsumeDenied {
        requested: u32,
        available: u32,
    },
    /// The stamina ceiling was raised
    MaxIncreased {
        amount: u32,
        new_max: u32,
    },
}

/// Simple event queue - events are pushed during mutation, drained by the host
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<StaminaEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: StaminaEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = StaminaEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.push(StaminaEvent::Consumed {
            amount: 10,
            remaining: 250,
        });
        queue.push(StaminaEvent::Regenerated {
            amount: 1,
            current: 251,
        });
        assert!(!queue.is_empty());

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(
            drained[0],
            StaminaEvent::Consumed {
                amount: 10,
                remaining: 250
            }
        );
        assert!(queue.is_empty());
    }
}

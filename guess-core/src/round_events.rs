use guess_types::{DismissReason, GuessMode, HistoryEntry, Notification, NotificationId, RoundResult};

#[derive(Debug, Clone, PartialEq)]
pub enum RoundEvent {
    RoundPlayed {
        result: RoundResult,
        entry: HistoryEntry,
        notification: Notification,
    },
    ModeSelected {
        mode: GuessMode,
    },
    ThresholdSelected {
        threshold: u8,
    },
    NotificationDismissed {
        id: NotificationId,
        reason: DismissReason,
    },
    CooldownReleased,
}

impl RoundEvent {
    /// Whether the event changes what the history table shows.
    pub fn touches_history(&self) -> bool {
        matches!(self, RoundEvent::RoundPlayed { .. })
    }
}

/// Event handler trait for reacting to controller state changes
pub trait RoundEventHandler: Send {
    fn handle_event(&mut self, event: RoundEvent);
}

/// Fan-out of controller events to every registered handler
pub struct RoundEventBus {
    handlers: Vec<Box<dyn RoundEventHandler>>,
}

impl RoundEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: RoundEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for RoundEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RoundEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

use guess_types::{
    DEFAULT_DISPLAYED_RESULT, DismissReason, GuessError, GuessMode, HistoryEntry, Notification,
    NotificationId, RoundConfig, RoundResult, SessionView,
};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    CooldownGate, CooldownGeneration, HistoryLedger, NotificationQueue, OutcomeGenerator,
    RoundEvaluator, RoundEvent, RoundEventBus, RoundTimings, UniformGenerator,
};

/// Everything one accepted play produced. The notification and the history
/// entry are built from the same `RoundResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlayed {
    pub result: RoundResult,
    pub entry: HistoryEntry,
    pub notification: Notification,
    pub cooldown: CooldownGeneration,
    pub notification_expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayOutcome {
    Played(RoundPlayed),
    /// Still cooling down; nothing changed.
    Rejected,
}

impl PlayOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PlayOutcome::Rejected)
    }

    pub fn played(&self) -> Option<&RoundPlayed> {
        match self {
            PlayOutcome::Played(round) => Some(round),
            PlayOutcome::Rejected => None,
        }
    }
}

/// Owns the whole per-session state: current selection, last displayed
/// result, history, live notifications and the cooldown gate.
pub struct RoundController<G = UniformGenerator> {
    config: RoundConfig,
    current_result: u8,
    ledger: HistoryLedger,
    notifications: NotificationQueue,
    cooldown: CooldownGate,
    timings: RoundTimings,
    generator: G,
    pub event_bus: RoundEventBus,
}

impl RoundController<UniformGenerator> {
    pub fn new(timings: RoundTimings) -> Self {
        Self::with_generator(UniformGenerator, timings)
    }
}

impl Default for RoundController<UniformGenerator> {
    fn default() -> Self {
        Self::new(RoundTimings::default())
    }
}

impl<G: OutcomeGenerator> RoundController<G> {
    pub fn with_generator(generator: G, timings: RoundTimings) -> Self {
        Self {
            config: RoundConfig::default(),
            current_result: DEFAULT_DISPLAYED_RESULT,
            ledger: HistoryLedger::new(),
            notifications: NotificationQueue::new(),
            cooldown: CooldownGate::new(timings.cooldown),
            timings,
            generator,
            event_bus: RoundEventBus::new(),
        }
    }

    pub fn select_mode(&mut self, mode: GuessMode) {
        self.config.mode = mode;
        self.event_bus.publish(RoundEvent::ModeSelected { mode });
    }

    pub fn select_threshold(&mut self, threshold: u8) -> Result<(), GuessError> {
        let config = RoundConfig::new(self.config.mode, threshold).inspect_err(|e| {
            warn!("Rejected threshold selection: {}", e);
        })?;

        self.config = config;
        self.event_bus
            .publish(RoundEvent::ThresholdSelected { threshold });
        Ok(())
    }

    /// Plays the current selection.
    pub fn play(&mut self, now: Instant) -> Result<PlayOutcome, GuessError> {
        self.play_with(self.config, now)
    }

    /// Plays `config` without changing the stored selection. The threshold is
    /// checked before the gate so a bad config never arms the cooldown.
    pub fn play_with(&mut self, config: RoundConfig, now: Instant) -> Result<PlayOutcome, GuessError> {
        config.validate()?;

        let Some(cooldown) = self.cooldown.try_enter(now) else {
            debug!("Play rejected, cooling down");
            return Ok(PlayOutcome::Rejected);
        };

        let drawn_value = self.generator.draw();
        let result = RoundEvaluator::evaluate(config.mode, config.threshold, drawn_value);

        self.current_result = result.drawn_value;

        let notification = Notification {
            id: Uuid::new_v4(),
            win: result.win,
            loss_detail: result.loss_detail.clone(),
        };
        let notification_expires_at = now + self.timings.notification_ttl;
        self.notifications
            .push(notification.clone(), notification_expires_at);

        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            time: chrono::Local::now().format("%H:%M:%S").to_string(),
            mode: config.mode,
            threshold: config.threshold,
            drawn_value: result.drawn_value,
            win: result.win,
        };
        self.ledger.record(entry.clone());

        info!(
            "Round played: {} {} drew {} ({})",
            config.mode,
            config.threshold,
            result.drawn_value,
            if result.win { "win" } else { "loss" }
        );

        self.event_bus.publish(RoundEvent::RoundPlayed {
            result: result.clone(),
            entry: entry.clone(),
            notification: notification.clone(),
        });

        Ok(PlayOutcome::Played(RoundPlayed {
            result,
            entry,
            notification,
            cooldown,
            notification_expires_at,
        }))
    }

    /// User dismissal. Returns false if the notification was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove_notification(id, DismissReason::User)
    }

    /// Auto-expiry timer firing for one notification.
    pub fn expire_notification(&mut self, id: NotificationId) -> bool {
        self.remove_notification(id, DismissReason::Expired)
    }

    fn remove_notification(&mut self, id: NotificationId, reason: DismissReason) -> bool {
        if !self.notifications.dismiss(id) {
            return false;
        }

        debug!("Notification {} removed ({:?})", id, reason);
        self.event_bus
            .publish(RoundEvent::NotificationDismissed { id, reason });
        true
    }

    /// Cooldown timer firing. Ignored if the gate was re-armed since.
    pub fn release_cooldown(&mut self, generation: CooldownGeneration) -> bool {
        if !self.cooldown.release(generation) {
            return false;
        }

        debug!("Cooldown {} released", generation);
        self.event_bus.publish(RoundEvent::CooldownReleased);
        true
    }

    /// Applies every deadline that has passed by `now`, for callers that
    /// poll instead of running timers.
    pub fn tick(&mut self, now: Instant) {
        if self.cooldown.release_if_elapsed(now) {
            self.event_bus.publish(RoundEvent::CooldownReleased);
        }

        for id in self.notifications.expire_due(now) {
            self.event_bus.publish(RoundEvent::NotificationDismissed {
                id,
                reason: DismissReason::Expired,
            });
        }
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn mode(&self) -> GuessMode {
        self.config.mode
    }

    pub fn threshold(&self) -> u8 {
        self.config.threshold
    }

    pub fn current_result(&self) -> u8 {
        self.current_result
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.ledger.snapshot()
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn is_cooling_down(&self, now: Instant) -> bool {
        self.cooldown.is_active(now)
    }

    pub fn timings(&self) -> RoundTimings {
        self.timings
    }

    pub fn view(&self, now: Instant) -> SessionView {
        SessionView {
            current_result: self.current_result,
            mode: self.config.mode,
            threshold: self.config.threshold,
            history: self.ledger.snapshot(),
            notifications: self.notifications.snapshot(),
            cooling_down: self.cooldown.is_active(now),
        }
    }
}

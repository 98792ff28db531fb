use guess_core::{
    CooldownGeneration, OutcomeGenerator, PlayOutcome, RoundController, RoundEvent,
    RoundEventHandler, RoundTimings, UniformGenerator,
};
use guess_types::{ClientAction, GuessError, GuessMode, NotificationId, SessionView};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Forwards controller events to the presentation layer.
struct EventForwarder {
    sender: mpsc::UnboundedSender<RoundEvent>,
}

impl RoundEventHandler for EventForwarder {
    fn handle_event(&mut self, event: RoundEvent) {
        if self.sender.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

/// Pending timer tasks, kept next to the state they mutate.
#[derive(Debug, Default)]
struct SessionTimers {
    cooldown: Option<JoinHandle<()>>,
    notifications: HashMap<NotificationId, JoinHandle<()>>,
}

impl SessionTimers {
    fn arm_cooldown(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.cooldown.replace(handle) {
            previous.abort();
        }
    }

    fn track_notification(&mut self, id: NotificationId, handle: JoinHandle<()>) {
        self.notifications.retain(|_, timer| !timer.is_finished());
        self.notifications.insert(id, handle);
    }

    fn cancel_notification(&mut self, id: NotificationId) {
        if let Some(timer) = self.notifications.remove(&id) {
            timer.abort();
        }
    }

    fn pending(&self) -> usize {
        let cooldown = self.cooldown.iter().filter(|t| !t.is_finished()).count();
        let notifications = self
            .notifications
            .values()
            .filter(|t| !t.is_finished())
            .count();
        cooldown + notifications
    }

    fn cancel_all(&mut self) -> usize {
        let pending = self.pending();
        if let Some(timer) = self.cooldown.take() {
            timer.abort();
        }
        for (_, timer) in self.notifications.drain() {
            timer.abort();
        }
        pending
    }
}

/// One player's game: a controller plus the timers that drive its cooldown
/// and notification expiry. Dropping the session cancels every timer.
pub struct GameSession<G = UniformGenerator> {
    controller: Arc<Mutex<RoundController<G>>>,
    timers: Mutex<SessionTimers>,
}

impl GameSession<UniformGenerator> {
    pub fn new(timings: RoundTimings) -> (Self, mpsc::UnboundedReceiver<RoundEvent>) {
        Self::with_generator(UniformGenerator, timings)
    }
}

impl<G: OutcomeGenerator + Send + 'static> GameSession<G> {
    pub fn with_generator(
        generator: G,
        timings: RoundTimings,
    ) -> (Self, mpsc::UnboundedReceiver<RoundEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        let mut controller = RoundController::with_generator(generator, timings);
        controller
            .event_bus
            .add_handler(Box::new(EventForwarder { sender }));

        info!(
            "Session created (cooldown {:?}, notifications {:?})",
            timings.cooldown, timings.notification_ttl
        );

        let session = Self {
            controller: Arc::new(Mutex::new(controller)),
            timers: Mutex::new(SessionTimers::default()),
        };
        (session, receiver)
    }

    pub async fn select_mode(&self, mode: GuessMode) {
        self.controller.lock().await.select_mode(mode);
    }

    pub async fn select_threshold(&self, threshold: u8) -> Result<(), GuessError> {
        self.controller.lock().await.select_threshold(threshold)
    }

    /// Plays the current selection and schedules the cooldown release and
    /// the new notification's expiry.
    pub async fn play(&self) -> Result<PlayOutcome, GuessError> {
        let mut controller = self.controller.lock().await;
        let outcome = controller.play(now())?;

        if let PlayOutcome::Played(round) = &outcome {
            let cooldown = controller.timings().cooldown;
            let mut timers = self.timers.lock().await;
            timers.arm_cooldown(self.spawn_cooldown_release(round.cooldown, cooldown));
            timers.track_notification(
                round.notification.id,
                self.spawn_notification_expiry(
                    round.notification.id,
                    tokio::time::Instant::from_std(round.notification_expires_at),
                ),
            );
        }

        Ok(outcome)
    }

    /// User dismissal; also cancels the notification's expiry timer.
    pub async fn dismiss(&self, id: NotificationId) -> bool {
        let mut controller = self.controller.lock().await;
        self.timers.lock().await.cancel_notification(id);
        controller.dismiss(id)
    }

    /// Dismisses the notification at a 1-based position in the visible
    /// stack, returning its id.
    pub async fn dismiss_at(&self, position: usize) -> Option<NotificationId> {
        let id = {
            let controller = self.controller.lock().await;
            controller.notifications().get_by_position(position)?.id
        };
        self.dismiss(id).await.then_some(id)
    }

    pub async fn apply(&self, action: ClientAction) -> Result<Option<PlayOutcome>, GuessError> {
        match action {
            ClientAction::SelectMode { mode } => {
                self.select_mode(mode).await;
                Ok(None)
            }
            ClientAction::SelectThreshold { threshold } => {
                self.select_threshold(threshold).await?;
                Ok(None)
            }
            ClientAction::Play => self.play().await.map(Some),
            ClientAction::Dismiss { id } => {
                self.dismiss(id).await;
                Ok(None)
            }
        }
    }

    pub async fn view(&self) -> SessionView {
        let mut controller = self.controller.lock().await;
        let now = now();
        controller.tick(now);
        controller.view(now)
    }

    pub async fn pending_timers(&self) -> usize {
        self.timers.lock().await.pending()
    }

    /// Cancels every pending timer. The session stays usable.
    pub async fn shutdown(&self) {
        let cancelled = self.timers.lock().await.cancel_all();
        info!("Session shut down, cancelled {} pending timers", cancelled);
    }

    fn spawn_cooldown_release(
        &self,
        generation: CooldownGeneration,
        delay: Duration,
    ) -> JoinHandle<()> {
        let controller = self.controller.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.lock().await.release_cooldown(generation);
        })
    }

    fn spawn_notification_expiry(
        &self,
        id: NotificationId,
        deadline: tokio::time::Instant,
    ) -> JoinHandle<()> {
        let controller = self.controller.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            controller.lock().await.expire_notification(id);
        })
    }
}

impl<G> Drop for GameSession<G> {
    fn drop(&mut self) {
        self.timers.get_mut().cancel_all();
    }
}

/// Current time on tokio's clock, so a paused test clock drives the core too.
fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}

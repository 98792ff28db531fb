use std::time::Duration;

pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(500);
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimings {
    pub cooldown: Duration,         // minimum gap between plays
    pub notification_ttl: Duration, // auto-dismiss delay
}

impl Default for RoundTimings {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}

impl RoundTimings {
    pub fn new(cooldown: Duration, notification_ttl: Duration) -> Self {
        Self {
            cooldown,
            notification_ttl,
        }
    }
}

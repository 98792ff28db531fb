use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::GuessError;

pub type EntryId = Uuid;
pub type NotificationId = Uuid;

/// Closed range shared by thresholds and drawn values.
pub const VALUE_RANGE: RangeInclusive<u8> = 1..=100;

pub const DEFAULT_THRESHOLD: u8 = 20;
pub const DEFAULT_DISPLAYED_RESULT: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GuessMode {
    #[default]
    Under,
    Over,
}

impl fmt::Display for GuessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessMode::Under => write!(f, "Under"),
            GuessMode::Over => write!(f, "Over"),
        }
    }
}

impl FromStr for GuessMode {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "under" => Ok(GuessMode::Under),
            "over" => Ok(GuessMode::Over),
            _ => Err(GuessError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

/// The player's current selection, read at the moment a round is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundConfig {
    pub mode: GuessMode,
    pub threshold: u8,
}

impl RoundConfig {
    pub fn new(mode: GuessMode, threshold: u8) -> Result<Self, GuessError> {
        let config = Self { mode, threshold };
        config.validate()?;
        Ok(config)
    }

    /// Fields are public, so a config built by hand (or deserialized) can
    /// still carry an out-of-range threshold.
    pub fn validate(&self) -> Result<(), GuessError> {
        if VALUE_RANGE.contains(&self.threshold) {
            Ok(())
        } else {
            Err(GuessError::ThresholdOutOfRange {
                threshold: self.threshold.into(),
            })
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            mode: GuessMode::Under,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundResult {
    pub drawn_value: u8,
    pub win: bool,
    pub loss_detail: String, // empty on a win
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub time: String, // HH:MM:SS, local
    pub mode: GuessMode,
    pub threshold: u8,
    pub drawn_value: u8,
    pub win: bool,
}

impl HistoryEntry {
    /// Guess column text, e.g. `Under 20`.
    pub fn guess_label(&self) -> String {
        format!("{} {}", self.mode, self.threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub id: NotificationId,
    pub win: bool,
    pub loss_detail: String,
}

impl Notification {
    pub fn title(&self) -> &'static str {
        if self.win { "You won" } else { "You lost" }
    }

    /// Body text; a win has none.
    pub fn detail(&self) -> Option<&str> {
        if self.win {
            None
        } else {
            Some(self.loss_detail.as_str())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DismissReason {
    User,
    Expired,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GuessMode, HistoryEntry, Notification, NotificationId};

/// Shown in place of the history table before the first round.
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No games yet";

/// Input the presentation layer feeds back into a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ClientAction {
    SelectMode { mode: GuessMode },
    SelectThreshold { threshold: u8 },
    Play,
    Dismiss { id: NotificationId },
}

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionView {
    pub current_result: u8,
    pub mode: GuessMode,
    pub threshold: u8,
    pub history: Vec<HistoryEntry>,         // most recent first
    pub notifications: Vec<Notification>, // newest first
    pub cooling_down: bool,
}

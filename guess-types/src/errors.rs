use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessError {
    #[error("threshold {threshold} is outside 1..=100")]
    ThresholdOutOfRange { threshold: u32 },
    #[error("unknown guess mode: {value}")]
    InvalidMode { value: String },
    #[error("unknown command: {input}")]
    UnknownCommand { input: String },
}

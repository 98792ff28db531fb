use guess_types::{GuessMode, RoundResult};

pub const LOSS_DETAIL_HIGHER: &str = "Number was higher";
pub const LOSS_DETAIL_LOWER: &str = "Number was lower";

pub struct RoundEvaluator;

impl RoundEvaluator {
    /// Decide a round. A draw equal to the threshold loses in both modes and
    /// gets the ordinary wrong-side wording.
    pub fn evaluate(mode: GuessMode, threshold: u8, drawn_value: u8) -> RoundResult {
        let win = match mode {
            GuessMode::Under => drawn_value < threshold,
            GuessMode::Over => drawn_value > threshold,
        };

        let loss_detail = if win {
            String::new()
        } else {
            match mode {
                GuessMode::Under => LOSS_DETAIL_HIGHER.to_string(),
                GuessMode::Over => LOSS_DETAIL_LOWER.to_string(),
            }
        };

        RoundResult {
            drawn_value,
            win,
            loss_detail,
        }
    }
}

use guess_types::{ClientAction, GuessError, GuessMode};
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  under | over        pick the guess mode
  t <1-100>           set the threshold (also: threshold <n>)
  p                   play a round (also: play)
  d <n>               dismiss the n-th notification (also: dismiss <n>)
  state               print the session as JSON
  help                show this text
  quit                leave";

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(ClientAction),
    DismissPosition(usize),
    ShowState,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GuessError::UnknownCommand {
            input: s.trim().to_string(),
        };

        let mut parts = s.split_whitespace();
        let head = parts.next().ok_or_else(unknown)?.to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(unknown());
        }

        match (head.as_str(), arg) {
            ("under" | "over", None) => Ok(Command::Action(ClientAction::SelectMode {
                mode: head.parse::<GuessMode>()?,
            })),
            ("t" | "threshold", Some(value)) => {
                let wide = value.parse::<u32>().map_err(|_| unknown())?;
                let threshold = u8::try_from(wide)
                    .map_err(|_| GuessError::ThresholdOutOfRange { threshold: wide })?;
                Ok(Command::Action(ClientAction::SelectThreshold { threshold }))
            }
            ("p" | "play", None) => Ok(Command::Action(ClientAction::Play)),
            ("d" | "dismiss", Some(value)) => value
                .parse::<usize>()
                .map(Command::DismissPosition)
                .map_err(|_| unknown()),
            ("state", None) => Ok(Command::ShowState),
            ("help" | "?", None) => Ok(Command::Help),
            ("quit" | "q" | "exit", None) => Ok(Command::Quit),
            _ => Err(unknown()),
        }
    }
}

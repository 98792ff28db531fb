pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{Command, HELP};
pub use config::{Config, ConfigError};
pub use render::render;
pub use session::GameSession;

pub mod controller;
pub mod cooldown;
pub mod evaluator;
pub mod generator;
pub mod ledger;
pub mod notifications;
pub mod round_events;
pub mod timing;

// Re-export main components
pub use controller::*;
pub use cooldown::*;
pub use evaluator::*;
pub use generator::*;
pub use ledger::*;
pub use notifications::*;
pub use round_events::*;
pub use timing::*;

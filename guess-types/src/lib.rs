pub mod round;
pub mod messages;
pub mod errors;

// Re-export all types
pub use round::*;
pub use messages::*;
pub use errors::*;

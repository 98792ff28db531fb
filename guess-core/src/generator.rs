use guess_types::VALUE_RANGE;
use rand::Rng;

/// Source of drawn values for the round controller.
pub trait OutcomeGenerator {
    /// Returns a value in `VALUE_RANGE`. Must never fail.
    fn draw(&mut self) -> u8;
}

/// Uniform draw over 1..=100 from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformGenerator;

impl OutcomeGenerator for UniformGenerator {
    fn draw(&mut self) -> u8 {
        rand::rng().random_range(VALUE_RANGE)
    }
}

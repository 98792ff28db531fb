#![allow(dead_code)]

use guess_core::{OutcomeGenerator, RoundController, RoundEvent, RoundEventHandler, RoundTimings};
use guess_types::{GuessMode, RoundConfig};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Generator that replays a fixed script, then repeats its last value
pub struct FixedDraws {
    values: VecDeque<u8>,
    last: u8,
}

impl FixedDraws {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            last: values.last().copied().unwrap_or(50),
        }
    }
}

impl OutcomeGenerator for FixedDraws {
    fn draw(&mut self) -> u8 {
        self.values.pop_front().unwrap_or(self.last)
    }
}

/// Creates a controller with default timings and scripted draws
pub fn create_test_controller(draws: &[u8]) -> RoundController<FixedDraws> {
    RoundController::with_generator(FixedDraws::new(draws), RoundTimings::default())
}

/// Creates a controller whose events are captured by the returned collector
pub fn create_observed_controller(draws: &[u8]) -> (RoundController<FixedDraws>, EventCollector) {
    let mut controller = create_test_controller(draws);
    let collector = EventCollector::new();
    controller.event_bus.add_handler(Box::new(collector.clone()));
    (controller, collector)
}

pub fn config(mode: GuessMode, threshold: u8) -> RoundConfig {
    RoundConfig::new(mode, threshold).unwrap()
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<RoundEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn last_event(&self) -> Option<RoundEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&RoundEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl RoundEventHandler for EventCollector {
    fn handle_event(&mut self, event: RoundEvent) {
        self.events.lock().unwrap().push(event);
    }
}

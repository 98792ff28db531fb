mod common;

use common::*;
use guess_core::{PlayOutcome, RoundEvent};
use guess_types::{DismissReason, GuessMode};
use std::time::{Duration, Instant};

const COOLDOWN: Duration = Duration::from_millis(500);

#[test]
fn test_under_fifty_draws_thirty_wins() {
    let mut controller = create_test_controller(&[30]);
    let outcome = controller
        .play_with(config(GuessMode::Under, 50), Instant::now())
        .unwrap();

    let round = outcome.played().expect("round should be played");
    assert!(round.result.win);
    assert_eq!(round.result.loss_detail, "");
    assert_eq!(round.result.drawn_value, 30);

    let history = controller.history();
    assert_eq!(history.len(), 1);
    assert!(history[0].win);
    assert_eq!(history[0].drawn_value, 30);
    assert_eq!(history[0].guess_label(), "Under 50");
}

#[test]
fn test_over_fifty_draws_thirty_loses() {
    let mut controller = create_test_controller(&[30]);
    let outcome = controller
        .play_with(config(GuessMode::Over, 50), Instant::now())
        .unwrap();

    let round = outcome.played().unwrap();
    assert!(!round.result.win);
    assert_eq!(round.result.loss_detail, "Number was lower");
    assert_eq!(round.notification.title(), "You lost");
    assert_eq!(round.notification.detail(), Some("Number was lower"));
}

#[test]
fn test_under_fifty_draws_fifty_loses() {
    let mut controller = create_test_controller(&[50]);
    let outcome = controller
        .play_with(config(GuessMode::Under, 50), Instant::now())
        .unwrap();

    let round = outcome.played().unwrap();
    assert!(!round.result.win);
    assert_eq!(round.result.loss_detail, "Number was higher");
}

#[test]
fn test_second_play_inside_cooldown_rejected() {
    let mut controller = create_test_controller(&[30, 90]);
    let start = Instant::now();

    let first = controller.play_with(config(GuessMode::Under, 50), start).unwrap();
    assert!(!first.is_rejected());

    let history_before = controller.history();
    let notifications_before = controller.notifications().snapshot();

    let second = controller
        .play_with(config(GuessMode::Over, 10), start + Duration::from_millis(200))
        .unwrap();
    assert_eq!(second, PlayOutcome::Rejected);

    assert_eq!(controller.current_result(), 30);
    assert_eq!(controller.history(), history_before);
    assert_eq!(controller.notifications().snapshot(), notifications_before);
}

#[test]
fn test_play_accepted_again_after_cooldown() {
    let mut controller = create_test_controller(&[30, 90]);
    let start = Instant::now();

    controller.play(start).unwrap();
    assert!(controller.is_cooling_down(start));
    assert!(!controller.is_cooling_down(start + COOLDOWN));

    let outcome = controller.play(start + COOLDOWN).unwrap();
    assert!(!outcome.is_rejected());
    assert_eq!(controller.current_result(), 90);
}

#[test]
fn test_fifteen_plays_keep_last_ten() {
    let draws: Vec<u8> = (1..=15).collect();
    let mut controller = create_test_controller(&draws);
    let start = Instant::now();

    for round in 0..15u32 {
        let now = start + COOLDOWN * round;
        assert!(!controller.play(now).unwrap().is_rejected());
        assert!(controller.history().len() <= 10);
    }

    let drawn: Vec<u8> = controller.history().iter().map(|e| e.drawn_value).collect();
    assert_eq!(drawn, vec![15, 14, 13, 12, 11, 10, 9, 8, 7, 6]);
}

#[test]
fn test_notifications_stack_without_cap() {
    let draws: Vec<u8> = (1..=15).collect();
    let mut controller = create_test_controller(&draws);
    let start = Instant::now();

    for round in 0..15u32 {
        controller.play(start + COOLDOWN * round).unwrap();
    }

    // Nothing has swept the queue yet.
    assert_eq!(controller.notifications().len(), 15);
    let newest = controller.notifications().get_by_position(1).unwrap();
    assert_eq!(newest.id, controller.notifications().snapshot()[0].id);
}

#[test]
fn test_notification_and_entry_share_result() {
    let mut controller = create_test_controller(&[77]);
    let outcome = controller
        .play_with(config(GuessMode::Over, 60), Instant::now())
        .unwrap();
    let round = outcome.played().unwrap();

    assert_eq!(round.notification.win, round.result.win);
    assert_eq!(round.entry.win, round.result.win);
    assert_eq!(round.notification.loss_detail, round.result.loss_detail);
    assert_eq!(round.entry.drawn_value, round.result.drawn_value);
    assert_ne!(round.notification.id, round.entry.id);
}

#[test]
fn test_history_time_format() {
    let mut controller = create_test_controller(&[5]);
    controller.play(Instant::now()).unwrap();

    let time = &controller.history()[0].time;
    assert_eq!(time.len(), 8);
    let parts: Vec<&str> = time.split(':').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts[0].parse::<u8>().unwrap() < 24);
    assert!(parts[1].parse::<u8>().unwrap() < 60);
    assert!(parts[2].parse::<u8>().unwrap() < 61);
}

#[test]
fn test_dismiss_twice_is_noop() {
    let (mut controller, events) = create_observed_controller(&[5]);
    let outcome = controller.play(Instant::now()).unwrap();
    let id = outcome.played().unwrap().notification.id;

    assert!(controller.dismiss(id));
    assert!(!controller.dismiss(id));
    assert!(controller.notifications().is_empty());

    let dismissals = events
        .get_events()
        .into_iter()
        .filter(|e| matches!(e, RoundEvent::NotificationDismissed { .. }))
        .count();
    assert_eq!(dismissals, 1);
}

#[test]
fn test_dismiss_after_expiry_is_noop() {
    let (mut controller, events) = create_observed_controller(&[5]);
    let start = Instant::now();
    let outcome = controller.play(start).unwrap();
    let id = outcome.played().unwrap().notification.id;

    assert!(controller.expire_notification(id));
    assert!(!controller.dismiss(id));
    assert_eq!(
        events.last_event(),
        Some(RoundEvent::NotificationDismissed {
            id,
            reason: DismissReason::Expired
        })
    );
}

#[test]
fn test_selection_events() {
    let (mut controller, events) = create_observed_controller(&[]);

    controller.select_mode(GuessMode::Over);
    controller.select_threshold(75).unwrap();
    assert!(controller.select_threshold(101).is_err());

    assert_eq!(
        events.get_events(),
        vec![
            RoundEvent::ModeSelected {
                mode: GuessMode::Over
            },
            RoundEvent::ThresholdSelected { threshold: 75 },
        ]
    );
    assert_eq!(controller.threshold(), 75);
}

#[test]
fn test_rejected_play_publishes_nothing() {
    let (mut controller, events) = create_observed_controller(&[10, 20]);
    let start = Instant::now();

    controller.play(start).unwrap();
    events.clear();

    let outcome = controller.play(start + Duration::from_millis(10)).unwrap();
    assert!(outcome.is_rejected());
    assert_eq!(events.event_count(), 0);
}

#[test]
fn test_round_played_event_published() {
    let (mut controller, events) = create_observed_controller(&[42]);
    controller.play(Instant::now()).unwrap();

    assert!(events.has_event_type(|e| e.touches_history()));
    match events.last_event() {
        Some(RoundEvent::RoundPlayed { result, entry, .. }) => {
            assert_eq!(result.drawn_value, 42);
            assert_eq!(entry.drawn_value, 42);
        }
        other => panic!("Expected RoundPlayed, got {:?}", other),
    }
}

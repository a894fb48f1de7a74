// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving the scheduler and slot together with
//! synthetic instants, the way the tick subscription would at runtime.

use iced_toaster::{DisplayDuration, Settings, Toaster};
use std::time::{Duration, Instant};

const DISPLAY: Duration = Duration::from_secs(3);
const GAP: Duration = Duration::from_millis(500);

fn toaster() -> Toaster<String> {
    Toaster::new(
        Settings::default()
            .with_display_duration(DisplayDuration::Finite(DISPLAY))
            .with_inter_toast_delay(GAP),
    )
}

/// Drives ticks at a fixed cadence from `from` to `until`, mimicking the
/// 100 ms subscription.
fn run_ticks(toaster: &mut Toaster<String>, from: Instant, until: Instant) {
    let step = Duration::from_millis(100);
    let mut now = from;
    while now <= until {
        toaster.tick_at(now);
        now += step;
    }
}

#[test]
fn a_full_batch_plays_out_in_fifo_order_with_spacing() {
    let mut toaster = toaster();
    let t0 = Instant::now();

    toaster.enqueue_all_at(["first", "second", "third"].map(String::from), t0);

    // First is immediate.
    assert_eq!(toaster.current().map(String::as_str), Some("first"));

    let mut seen = vec!["first".to_owned()];
    let mut now = t0;
    // Generous horizon: three full display+gap cycles.
    let horizon = t0 + 3 * (DISPLAY + GAP) + DISPLAY;
    while now <= horizon {
        toaster.tick_at(now);
        if let Some(current) = toaster.current() {
            if seen.last() != Some(current) {
                seen.push(current.clone());
            }
        }
        now += Duration::from_millis(100);
    }

    assert_eq!(seen, vec!["first", "second", "third"]);
    assert!(toaster.is_idle());
}

#[test]
fn mixed_dismissal_modes_keep_the_queue_moving() {
    let mut toaster = toaster();
    let t0 = Instant::now();
    toaster.enqueue_all_at(["a", "b", "c"].map(String::from), t0);

    // "a" is swiped away early.
    let swiped_at = t0 + Duration::from_secs(1);
    toaster.drag_changed(-45.0);
    toaster.drag_ended_at(-45.0, swiped_at);
    assert!(toaster.current().is_none());

    // "b" appears after the gap and is dismissed by its button.
    run_ticks(&mut toaster, swiped_at, swiped_at + GAP);
    assert_eq!(toaster.current().map(String::as_str), Some("b"));
    let token = toaster.current_token().unwrap();
    let dismissed_at = swiped_at + GAP + Duration::from_secs(1);
    toaster.dismiss_at(token, dismissed_at);

    // "c" appears after the gap and times out on its own.
    run_ticks(&mut toaster, dismissed_at, dismissed_at + GAP);
    assert_eq!(toaster.current().map(String::as_str), Some("c"));
    run_ticks(
        &mut toaster,
        dismissed_at + GAP,
        dismissed_at + GAP + DISPLAY + Duration::from_millis(100),
    );
    assert!(toaster.is_idle());
}

#[test]
fn enqueueing_during_a_presentation_never_overlaps() {
    let mut toaster = toaster();
    let t0 = Instant::now();
    toaster.enqueue_at("a".to_owned(), t0);

    // A burst of arrivals while "a" is showing.
    for (i, offset_ms) in [200_u64, 400, 600].iter().enumerate() {
        toaster.enqueue_at(format!("late-{i}"), t0 + Duration::from_millis(*offset_ms));
        assert_eq!(toaster.current().map(String::as_str), Some("a"));
    }
    assert_eq!(toaster.queued_len(), 3);

    // "late-0" only appears a full gap after "a" departs.
    let dismissed_at = t0 + DISPLAY;
    toaster.tick_at(dismissed_at);
    assert!(toaster.current().is_none());
    toaster.tick_at(dismissed_at + GAP - Duration::from_millis(1));
    assert!(toaster.current().is_none());
    toaster.tick_at(dismissed_at + GAP);
    assert_eq!(toaster.current().map(String::as_str), Some("late-0"));
}

#[test]
fn clearing_everything_mid_flight_leaves_a_reusable_toaster() {
    let mut toaster = toaster();
    let t0 = Instant::now();
    toaster.enqueue_all_at(["a", "b", "c"].map(String::from), t0);

    let cleared_at = t0 + Duration::from_secs(1);
    toaster.clear_all_at(cleared_at);
    assert!(toaster.is_idle());

    // Nothing reappears on later ticks.
    run_ticks(&mut toaster, cleared_at, cleared_at + Duration::from_secs(10));
    assert!(toaster.is_idle());

    // The attachment still works; the clear armed a cooldown, so the next
    // item waits out the gap.
    toaster.enqueue_at("fresh".to_owned(), cleared_at + GAP);
    assert_eq!(toaster.current().map(String::as_str), Some("fresh"));
}

#[test]
fn tokens_never_repeat_across_a_long_run() {
    let mut toaster = Toaster::new(
        Settings::default()
            .with_display_duration(DisplayDuration::seconds(1.0))
            .with_inter_toast_delay(Duration::ZERO),
    );
    let t0 = Instant::now();
    toaster.enqueue_all_at((0..20).map(|i| format!("toast-{i}")), t0);

    let mut tokens = Vec::new();
    let mut now = t0;
    while !toaster.is_idle() {
        if let Some(token) = toaster.current_token() {
            if tokens.last() != Some(&token) {
                tokens.push(token);
            }
        }
        now += Duration::from_millis(100);
        toaster.tick_at(now);
    }

    assert_eq!(tokens.len(), 20);
    let unique: std::collections::HashSet<_> = tokens.iter().copied().collect();
    assert_eq!(unique.len(), tokens.len());
}

#[test]
fn an_indefinite_toaster_holds_until_the_user_acts() {
    let mut toaster: Toaster<String> = Toaster::new(
        Settings::default()
            .with_display_duration(DisplayDuration::Indefinite)
            .with_inter_toast_delay(GAP),
    );
    let t0 = Instant::now();
    toaster.enqueue_all_at(["sticky", "next"].map(String::from), t0);

    run_ticks(&mut toaster, t0, t0 + Duration::from_secs(30));
    assert_eq!(toaster.current().map(String::as_str), Some("sticky"));

    let swiped_at = t0 + Duration::from_secs(31);
    toaster.drag_ended_at(-60.0, swiped_at);
    run_ticks(&mut toaster, swiped_at, swiped_at + GAP);
    assert_eq!(toaster.current().map(String::as_str), Some("next"));
}

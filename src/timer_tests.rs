//! Tests for timer

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_new_slot_has_nothing_pending() {
    let slot = TimerSlot::new();
    assert!(!slot.is_pending());
    assert!(slot.pending().is_none());
}

#[test]
fn test_poll_before_deadline_does_not_fire() {
    let start = Instant::now();
    let mut slot = TimerSlot::new();
    slot.schedule(start, ms(500));

    assert!(slot.poll(start + ms(499)).is_none());
    assert!(slot.is_pending());
}

#[test]
fn test_poll_at_deadline_fires_once() {
    let start = Instant::now();
    let mut slot = TimerSlot::new();
    let timer = slot.schedule(start, ms(500));

    assert_eq!(slot.poll(start + ms(500)), Some(timer));
    assert!(slot.poll(start + ms(600)).is_none());
    assert!(!slot.is_pending());
}

#[test]
fn test_schedule_replaces_pending_timer() {
    let start = Instant::now();
    let mut slot = TimerSlot::new();
    let first = slot.schedule(start, ms(100));
    let second = slot.schedule(start + ms(50), ms(100));

    assert_ne!(first.id, second.id);
    assert_eq!(slot.pending(), Some(second));
    // The first deadline passing must not fire anything
    assert!(slot.poll(start + ms(100)).is_none());
    assert_eq!(slot.poll(start + ms(150)), Some(second));
}

#[test]
fn test_cancel_returns_cancelled_timer() {
    let start = Instant::now();
    let mut slot = TimerSlot::new();
    let timer = slot.schedule(start, ms(10));

    assert_eq!(slot.cancel(), Some(timer));
    assert!(slot.cancel().is_none());
    assert!(slot.poll(start + ms(1000)).is_none());
}

#[test]
fn test_zero_delay_fires_immediately() {
    let start = Instant::now();
    let mut slot = TimerSlot::new();
    slot.schedule(start, Duration::ZERO);

    assert!(slot.poll(start).is_some());
}

use embassy_time::{Duration, Instant};
use flashbuzzer_composer::TriggerInput;

const DEBOUNCE: Duration = Duration::from_millis(30);

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn test_stable_press_is_one_edge() {
    let mut input = TriggerInput::new(DEBOUNCE);

    assert!(!input.update(true, at(100)));
    assert!(!input.update(true, at(120)));
    assert!(input.update(true, at(130)));
    assert!(input.is_pressed());

    // holding does not repeat
    assert!(!input.update(true, at(500)));
}

#[test]
fn test_bounce_is_ignored() {
    let mut input = TriggerInput::new(DEBOUNCE);

    assert!(!input.update(true, at(0)));
    assert!(!input.update(false, at(10)));
    assert!(!input.update(true, at(20)));
    assert!(!input.update(false, at(25)));
    assert!(!input.update(false, at(100)));
    assert!(!input.is_pressed());
}

#[test]
fn test_release_is_not_an_edge() {
    let mut input = TriggerInput::new(DEBOUNCE);

    input.update(true, at(0));
    assert!(input.update(true, at(40)));

    assert!(!input.update(false, at(50)));
    assert!(!input.update(false, at(90)));
    assert!(!input.is_pressed());

    assert!(!input.update(true, at(100)));
    assert!(input.update(true, at(140)));
}

#[test]
fn test_level_held_at_start_waits_for_release() {
    let mut input = TriggerInput::new_with_level(DEBOUNCE, true);
    assert!(input.is_pressed());

    assert!(!input.update(true, at(0)));
    assert!(!input.update(true, at(1_000)));

    assert!(!input.update(false, at(1_100)));
    assert!(!input.update(false, at(1_140)));
    assert!(!input.is_pressed());

    assert!(!input.update(true, at(1_200)));
    assert!(input.update(true, at(1_240)));
}

#[test]
fn test_released_level_at_start_matches_default() {
    let mut input = TriggerInput::new_with_level(DEBOUNCE, false);

    assert!(!input.update(true, at(0)));
    assert!(input.update(true, at(40)));
}

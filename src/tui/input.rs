// Key gate - turns raw key press events into board actions
//
// With key release reporting, a held key sends a stream of presses. Moving
// the selection should follow that stream, but picking up a card or
// submitting the form must happen once per physical press. Text typed into
// form fields never passes through here.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Hold time before Up/Down start repeating
const HOLD_DELAY: Duration = Duration::from_millis(400);
/// Gap between repeats once Up/Down are repeating
const HOLD_INTERVAL: Duration = Duration::from_millis(60);
/// A one-shot key fires again after this long, for terminals that never
/// report releases
const REFIRE_AFTER: Duration = Duration::from_millis(150);

/// Whether a key keeps firing while held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Once,
    Hold,
}

/// Only selection steps repeat. Left/Right switch lists or move the drag
/// target, so they stay one-shot like every other action key.
fn repeat_for(key: KeyCode) -> Repeat {
    match key {
        KeyCode::Up | KeyCode::Down => Repeat::Hold,
        _ => Repeat::Once,
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    fired: Instant,
}

/// Keys currently down, with when they were pressed and last acted on
#[derive(Debug, Default)]
pub struct KeyGate {
    held: HashMap<KeyCode, Held>,
}

impl KeyGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the press should run its action
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(key, Held { since: now, fired: now });
            return true;
        };

        let due = match repeat_for(key) {
            Repeat::Once => now.duration_since(held.fired) >= REFIRE_AFTER,
            Repeat::Hold => {
                now.duration_since(held.since) >= HOLD_DELAY
                    && now.duration_since(held.fired) >= HOLD_INTERVAL
            }
        };
        if due {
            held.fired = now;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pick_up_fires_once_per_press() {
        let mut gate = KeyGate::new();
        let t = Instant::now();

        assert!(gate.press_at(KeyCode::Char(' '), t));
        assert!(!gate.press_at(KeyCode::Char(' '), t + ms(30)));

        gate.release(KeyCode::Char(' '));
        assert!(gate.press_at(KeyCode::Char(' '), t + ms(40)));
    }

    #[test]
    fn one_shot_key_refires_without_release_events() {
        let mut gate = KeyGate::new();
        let t = Instant::now();

        assert!(gate.press_at(KeyCode::Enter, t));
        assert!(!gate.press_at(KeyCode::Enter, t + ms(100)));
        assert!(gate.press_at(KeyCode::Enter, t + ms(160)));
    }

    #[test]
    fn selection_repeats_after_hold_delay() {
        let mut gate = KeyGate::new();
        let t = Instant::now();

        assert!(gate.press_at(KeyCode::Down, t));
        assert!(!gate.press_at(KeyCode::Down, t + ms(200)));
        assert!(gate.press_at(KeyCode::Down, t + ms(410)));
        assert!(!gate.press_at(KeyCode::Down, t + ms(430)));
        assert!(gate.press_at(KeyCode::Down, t + ms(480)));
    }

    #[test]
    fn drag_target_keys_do_not_repeat() {
        let mut gate = KeyGate::new();
        let t = Instant::now();

        assert!(gate.press_at(KeyCode::Right, t));
        assert!(!gate.press_at(KeyCode::Right, t + ms(120)));
        assert_eq!(repeat_for(KeyCode::Left), Repeat::Once);
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut gate = KeyGate::new();
        let t = Instant::now();

        assert!(gate.press_at(KeyCode::Up, t));
        assert!(gate.press_at(KeyCode::Char('y'), t));
        gate.release(KeyCode::Up);
        assert!(!gate.press_at(KeyCode::Char('y'), t + ms(10)));
    }
}

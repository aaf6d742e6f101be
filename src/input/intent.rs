use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::platformer::PlayerIntent;

/// How long a key counts as held after its latest press. Terminals deliver
/// autorepeat as a stream of press events, so a key being physically held
/// shows up as presses no further apart than the repeat interval.
const HOLD_WINDOW: Duration = Duration::from_millis(200);

/// What a key event means to the platformer scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformAction {
    /// The event updated the held movement/jump state.
    Intent,
    Quit,
    None,
}

/// Held-key tracker for the platformer.
///
/// The original read engine-polled key booleans every frame; a terminal only
/// sends events. This keeps the last press instant per control and treats a
/// control as down while that press is fresh, folding the result into a
/// [`PlayerIntent`] once per frame. Release events (sent by some terminals)
/// clear the control immediately.
#[derive(Debug, Default)]
pub struct HeldIntent {
    left: Option<Instant>,
    right: Option<Instant>,
    jump: Option<Instant>,
}

impl HeldIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> PlatformAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PlatformAction::Quit;
        }

        let slot = match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => &mut self.left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => &mut self.right,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
                &mut self.jump
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return PlatformAction::Quit,
            _ => return PlatformAction::None,
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => *slot = Some(now),
            KeyEventKind::Release => *slot = None,
        }

        PlatformAction::Intent
    }

    /// Fold the held keys into this frame's intent. When both directions
    /// are fresh the later press wins.
    pub fn intent(&self, now: Instant) -> PlayerIntent {
        let left = self.left.filter(|t| fresh(*t, now));
        let right = self.right.filter(|t| fresh(*t, now));

        let move_x = match (left, right) {
            (Some(l), Some(r)) => {
                if r >= l {
                    1.0
                } else {
                    -1.0
                }
            }
            (Some(_), None) => -1.0,
            (None, Some(_)) => 1.0,
            (None, None) => 0.0,
        };

        PlayerIntent {
            move_x,
            jump: self.jump.is_some_and(|t| fresh(t, now)),
        }
    }
}

fn fresh(pressed: Instant, now: Instant) -> bool {
    now.duration_since(pressed) <= HOLD_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_fresh_press_reads_as_held() {
        let now = Instant::now();
        let mut held = HeldIntent::new();

        held.handle_key_event(press(KeyCode::Right), now);

        assert_eq!(held.intent(now).move_x, 1.0);
        assert_eq!(held.intent(now + Duration::from_millis(150)).move_x, 1.0);
    }

    #[test]
    fn test_stale_press_reads_as_released() {
        let now = Instant::now();
        let mut held = HeldIntent::new();

        held.handle_key_event(press(KeyCode::Left), now);

        assert_eq!(held.intent(now + Duration::from_millis(201)).move_x, 0.0);
    }

    #[test]
    fn test_later_direction_wins() {
        let now = Instant::now();
        let mut held = HeldIntent::new();

        held.handle_key_event(press(KeyCode::Left), now);
        held.handle_key_event(press(KeyCode::Right), now + Duration::from_millis(50));

        assert_eq!(held.intent(now + Duration::from_millis(60)).move_x, 1.0);
    }

    #[test]
    fn test_release_clears_immediately() {
        let now = Instant::now();
        let mut held = HeldIntent::new();

        held.handle_key_event(press(KeyCode::Right), now);
        held.handle_key_event(release(KeyCode::Right), now + Duration::from_millis(10));

        assert_eq!(held.intent(now + Duration::from_millis(20)).move_x, 0.0);
    }

    #[test]
    fn test_jump_keys() {
        let now = Instant::now();
        let mut held = HeldIntent::new();

        held.handle_key_event(press(KeyCode::Char(' ')), now);
        assert!(held.intent(now).jump);

        let mut held = HeldIntent::new();
        held.handle_key_event(press(KeyCode::Char('w')), now);
        assert!(held.intent(now).jump);

        assert!(!held.intent(now + Duration::from_millis(300)).jump);
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut held = HeldIntent::new();

        assert_eq!(
            held.handle_key_event(press(KeyCode::Char('q')), now),
            PlatformAction::Quit
        );
        assert_eq!(
            held.handle_key_event(press(KeyCode::Esc), now),
            PlatformAction::Quit
        );
        assert_eq!(
            held.handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                now
            ),
            PlatformAction::Quit
        );
    }

    #[test]
    fn test_unrelated_keys_change_nothing() {
        let now = Instant::now();
        let mut held = HeldIntent::new();

        assert_eq!(
            held.handle_key_event(press(KeyCode::Char('x')), now),
            PlatformAction::None
        );
        assert_eq!(held.intent(now), PlayerIntent::default());
    }
}

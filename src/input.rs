use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// One-shot transitions produced by the raw event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Fresh press of the fire key (not auto-repeat, not a held key).
    FireTap,
    /// Pointer click anywhere in the window.
    Click,
    Quit,
}

/// Keys whose held state matters between events.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Polls crossterm and translates raw events into game actions.
/// Unrecognized keys fall through untouched.
#[derive(Debug, Default)]
pub struct InputManager {
    held: HeldKeys,
    oneshot: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains every pending terminal event without blocking. Call once per
    /// frame, then read the results with [`take_actions`](Self::take_actions)
    /// and [`held`](Self::held).
    pub fn poll_events(&mut self) -> Result<()> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => self.handle_key_event(key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(key),
            KeyEventKind::Release => self.handle_key_release(key.code),
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent) {
        // Quit keys work in any state
        if matches!(
            key.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot.push(InputAction::Quit);
            return;
        }

        match key.code {
            KeyCode::Char(' ') => {
                if !self.held.fire {
                    self.oneshot.push(InputAction::FireTap);
                }
                self.held.fire = true;
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.held.left = true;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.held.right = true;
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => {
                self.held.fire = false;
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.held.left = false;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.held.right = false;
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            self.oneshot.push(InputAction::Click);
        }
    }

    /// One-shot actions accumulated since the last call.
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.oneshot)
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_fire_press_yields_one_tap_until_released() {
        let mut input = InputManager::new();

        input.handle_key_event(press(KeyCode::Char(' ')));
        assert!(input.held().fire);
        assert_eq!(input.take_actions(), vec![InputAction::FireTap]);

        // A second press without a release is treated as still held.
        input.handle_key_event(press(KeyCode::Char(' ')));
        assert!(input.take_actions().is_empty());

        input.handle_key_event(release(KeyCode::Char(' ')));
        assert!(!input.held().fire);

        input.handle_key_event(press(KeyCode::Char(' ')));
        assert_eq!(input.take_actions(), vec![InputAction::FireTap]);
    }

    #[test]
    fn test_movement_keys_track_held_state() {
        let mut input = InputManager::new();

        input.handle_key_event(press(KeyCode::Left));
        input.handle_key_event(press(KeyCode::Char('d')));
        let held = input.held();
        assert!(held.left);
        assert!(held.right);

        input.handle_key_event(release(KeyCode::Left));
        input.handle_key_event(release(KeyCode::Char('d')));
        let held = input.held();
        assert!(!held.left);
        assert!(!held.right);
    }

    #[test]
    fn test_mouse_down_becomes_click() {
        let mut input = InputManager::new();
        input.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(input.take_actions(), vec![InputAction::Click]);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Char('x')));
        input.handle_key_event(press(KeyCode::Tab));

        assert!(input.take_actions().is_empty());
        let held = input.held();
        assert!(!held.left && !held.right && !held.fire);
    }

    #[test]
    fn test_quit_keys() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Esc));
        assert_eq!(input.take_actions(), vec![InputAction::Quit]);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        input.handle_key_event(ctrl_c);
        assert_eq!(input.take_actions(), vec![InputAction::Quit]);
    }
}

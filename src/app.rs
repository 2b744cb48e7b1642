use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::input::{HeldKeys, InputAction, InputManager};
use crate::renderer::GameRenderer;
use crate::world::{CANVAS_HEIGHT, CANVAS_WIDTH, GameState, UNPAUSE_GRACE, World};

/// Frame pacing: ~60 ticks per second.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The main application: owns the session, the input translation, and the
/// renderer, and drives the cooperative frame loop.
pub struct App {
    running: bool,
    world: World,
    input: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`] with a fresh session.
    pub fn new() -> Self {
        Self {
            running: true,
            world: World::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            input: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Delayed callbacks run on wall-clock time, paused or not.
            self.world.pump_timers(Instant::now());

            terminal.draw(|frame| self.renderer.render(frame, &self.world))?;

            self.input.poll_events()?;
            for action in self.input.take_actions() {
                self.apply_action(action);
            }
            self.apply_held_keys(self.input.held());

            if self.world.state() == GameState::Playing {
                self.world.advance_frame();
            }

            std::thread::sleep(FRAME_INTERVAL);
        }
        Ok(())
    }

    fn apply_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.running = false,
            InputAction::FireTap => {
                if self.world.game_over {
                    self.restart();
                } else if !self.world.player.invincible && !self.world.one_shot {
                    self.world.fire_player_shot();
                    self.world.one_shot = true;
                }
            }
            InputAction::Click => {
                if !self.world.paused {
                    self.world.pause();
                } else if self.world.game_over {
                    self.restart();
                } else {
                    self.world.unpause();
                    self.world.grant_invincibility(UNPAUSE_GRACE);
                }
            }
        }
    }

    /// Held keys become world flags; the next tick consumes them.
    fn apply_held_keys(&mut self, held: HeldKeys) {
        self.world.player.moving_left = held.left;
        self.world.player.moving_right = held.right;
        self.world.shooting = held.fire;
        if !held.fire {
            self.world.one_shot = false;
        }
    }

    /// Full session reset. The old world goes away wholesale, pending
    /// timers from the previous session included.
    fn restart(&mut self) {
        self.world = World::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles_pause_with_resume_grace() {
        let mut app = App::new();
        app.apply_action(InputAction::Click);
        assert!(app.world.paused);

        app.world.player.invincible = false;
        app.apply_action(InputAction::Click);
        assert!(!app.world.paused);
        // Resuming grants the shorter grace window.
        assert!(app.world.player.invincible);
    }

    #[test]
    fn test_fire_tap_is_debounced_and_blocked_while_invincible() {
        let mut app = App::new();

        // The spawn grace window suppresses tap shots entirely.
        app.apply_action(InputAction::FireTap);
        assert_eq!(app.world.bullets.len(), 0);

        app.world.player.invincible = false;
        app.apply_action(InputAction::FireTap);
        assert_eq!(app.world.bullets.len(), 1);
        assert!(app.world.one_shot);

        // Still debounced until the key is released.
        app.apply_action(InputAction::FireTap);
        assert_eq!(app.world.bullets.len(), 1);

        app.apply_held_keys(HeldKeys::default());
        assert!(!app.world.one_shot);
        app.apply_action(InputAction::FireTap);
        assert_eq!(app.world.bullets.len(), 2);
    }

    #[test]
    fn test_restart_from_game_over_resets_session() {
        let mut app = App::new();
        app.world.score = 450;
        app.world.life = 2;
        app.world.game_over = true;
        app.world.paused = true;

        app.apply_action(InputAction::FireTap);
        assert_eq!(app.world.score, 0);
        assert_eq!(app.world.life, 0);
        assert!(!app.world.game_over);
        assert!(!app.world.paused);
        assert!(app.world.player.invincible);
    }

    #[test]
    fn test_click_on_game_over_restarts() {
        let mut app = App::new();
        app.world.game_over = true;
        app.world.paused = true;

        app.apply_action(InputAction::Click);
        assert!(!app.world.game_over);
        assert_eq!(app.world.score, 0);
    }
}

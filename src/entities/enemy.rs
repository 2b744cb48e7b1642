use crate::collision::Rect;
use crate::rng;

pub const ENEMY_WIDTH: f32 = 60.0;
pub const ENEMY_HEIGHT: f32 = 20.0;

/// A ship in the fleet: bounces between the canvas edges while slowly
/// drifting toward the player, firing on its own private cadence.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Horizontal canvas units per moving frame.
    pub speed: f32,
    /// Downward drift applied on every moving frame.
    pub drift: f32,
    pub moving_left: bool,
    /// Fires whenever the global frame counter is a multiple of this.
    pub shot_interval: u64,
    /// Ship color hue (0..360), inherited by its shots and explosion.
    pub hue: u16,
}

impl Enemy {
    /// Randomized spawn along the top of the canvas.
    pub fn spawn(canvas_width: f32) -> Self {
        Self {
            x: rng::between(0, (canvas_width - ENEMY_WIDTH) as i32) as f32,
            y: rng::between(10, 40) as f32,
            speed: rng::between(2, 4) as f32,
            drift: rng::between(1, 4) as f32 * 0.1,
            moving_left: rng::coin_flip(),
            shot_interval: rng::between(30, 80) as u64,
            hue: rng::between(0, 360) as u16,
        }
    }

    /// One frame of movement: slide horizontally while drifting down.
    /// Hitting a canvas edge only flips the direction flag; the ship does
    /// not move on the reversal frame.
    pub fn advance(&mut self, canvas_width: f32) {
        if self.moving_left {
            if self.x > 0.0 {
                self.x -= self.speed;
                self.y += self.drift;
            } else {
                self.moving_left = false;
            }
        } else if self.x + ENEMY_WIDTH < canvas_width {
            self.x += self.speed;
            self.y += self.drift;
        } else {
            self.moving_left = true;
        }
    }

    pub fn wants_to_fire(&self, frame: u64) -> bool {
        frame % self.shot_interval == 0
    }

    pub fn center_x(&self) -> f32 {
        self.x + ENEMY_WIDTH / 2.0
    }

    pub fn bottom_y(&self) -> f32 {
        self.y + ENEMY_HEIGHT
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

use crate::collision::Rect;

pub const PROJECTILE_WIDTH: f32 = 8.0;
pub const PROJECTILE_HEIGHT: f32 = 20.0;
/// Canvas units per frame, upward.
const PLAYER_SHOT_SPEED: f32 = 8.0;
/// Canvas units per frame, downward.
const ENEMY_SHOT_SPEED: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    /// Rendered white, travels upward.
    Player,
    /// Keeps the hue of the ship that fired it, travels downward.
    Enemy { hue: u16 },
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub owner: ProjectileOwner,
}

impl Projectile {
    /// Player shot: starts just above the bottom edge, centered on the
    /// paddle midpoint.
    pub fn player_shot(center_x: f32, canvas_height: f32) -> Self {
        Self {
            x: center_x - PROJECTILE_WIDTH / 2.0,
            y: canvas_height - 10.0,
            vy: -PLAYER_SHOT_SPEED,
            owner: ProjectileOwner::Player,
        }
    }

    /// Enemy shot: starts at the firing ship's bottom-center.
    pub fn enemy_shot(center_x: f32, y: f32, hue: u16) -> Self {
        Self {
            x: center_x - PROJECTILE_WIDTH / 2.0,
            y,
            vy: ENEMY_SHOT_SPEED,
            owner: ProjectileOwner::Enemy { hue },
        }
    }

    pub fn advance(&mut self) {
        self.y += self.vy;
    }

    /// True once the projectile has left the visible vertical range: above
    /// the canvas for player shots, below it for enemy shots.
    pub fn off_screen(&self, canvas_height: f32) -> bool {
        match self.owner {
            ProjectileOwner::Player => self.y < 0.0,
            ProjectileOwner::Enemy { .. } => self.y > canvas_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

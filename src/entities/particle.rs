use crate::rng;

/// Particles start as a 40-unit square and shrink multiplicatively.
pub const PARTICLE_START_SIZE: f32 = 40.0;
const SHRINK_FACTOR: f32 = 0.89;
const GRAVITY: f32 = 0.05;
/// Ticks before a particle is removed.
pub const PARTICLE_MAX_AGE: u32 = 100;

/// Explosion debris. Purely cosmetic; never collides with anything.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub age: u32,
    /// Hue inherited from the exploding ship; None renders as orange.
    pub hue: Option<u16>,
}

impl Particle {
    /// Debris flung from `(x, y)` with a random velocity in [-5, 5).
    pub fn burst(x: f32, y: f32, hue: Option<u16>) -> Self {
        Self {
            x,
            y,
            vx: rng::between(-5, 5) as f32,
            vy: rng::between(-5, 5) as f32,
            size: PARTICLE_START_SIZE,
            age: 0,
            hue,
        }
    }

    /// The single per-frame operation: integrates position, applies gravity,
    /// shrinks, and ages. Kept as one call so the physics can never advance
    /// more or less than once per rendered frame.
    pub fn tick(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += GRAVITY;
        self.size *= SHRINK_FACTOR;
        self.age += 1;
    }

    pub fn expired(&self) -> bool {
        self.age >= PARTICLE_MAX_AGE
    }
}

// Library exports for testing
pub use collision::{Rect, intersects};
pub use entities::{Enemy, Particle, Player, Projectile, ProjectileOwner};
pub use store::EntityStore;
pub use world::{GameState, World};

pub mod app;
pub mod collision;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod rng;
pub mod store;
pub mod timers;
pub mod world;

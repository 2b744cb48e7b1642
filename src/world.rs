use std::time::{Duration, Instant};

use crate::collision::intersects;
use crate::entities::{Enemy, Particle, Player, Projectile};
use crate::store::EntityStore;
use crate::timers::{TimerEvent, TimerQueue};

/// Logical canvas size; the renderer scales this onto the terminal grid.
pub const CANVAS_WIDTH: f32 = 640.0;
pub const CANVAS_HEIGHT: f32 = 480.0;

pub const MAX_LIVES: u32 = 3;
pub const MAX_ENEMIES: u32 = 6;
/// Particles spawned per destroyed ship.
pub const EXPLOSION_PARTICLES: u32 = 10;
pub const KILL_SCORE: u32 = 15;

/// Frames between shots while the fire key is held.
const AUTO_FIRE_INTERVAL: u64 = 10;
/// While invincible the paddle is hidden every other window of this many
/// frames, producing the blink effect.
pub const BLINK_WINDOW: u64 = 20;

/// Delay before a killed ship's replacement appears.
pub const RESPAWN_DELAY: Duration = Duration::from_millis(2000);
/// Grace window at session start and after a survivable hit.
pub const SPAWN_GRACE: Duration = Duration::from_millis(2000);
/// Shorter grace window after resuming from pause.
pub const UNPAUSE_GRACE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
}

/// One complete playthrough from reset to game over.
///
/// Owns every entity collection, the score/lives bookkeeping, and the timer
/// queue for the two delayed callbacks (respawn, invincibility expiry).
/// Replacing the World is a full restart; pending timers die with it.
#[derive(Debug)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub score: u32,
    /// Hits taken so far; remaining lives are `MAX_LIVES - life`.
    pub life: u32,
    /// Logical fleet size, including respawns already reserved but not yet
    /// on screen.
    pub enemies_alive: u32,
    pub frame: u64,
    pub paused: bool,
    pub game_over: bool,
    /// Fire key held; drives the every-10th-frame auto shot.
    pub shooting: bool,
    /// Debounce so one key press yields exactly one tap shot.
    pub one_shot: bool,
    pub player: Player,
    pub bullets: EntityStore<Projectile>,
    pub enemy_bullets: EntityStore<Projectile>,
    pub enemies: EntityStore<Enemy>,
    pub particles: EntityStore<Particle>,
    timers: TimerQueue,
}

impl World {
    /// Fresh session: full fleet on screen and a spawn grace period.
    pub fn new(width: f32, height: f32) -> Self {
        let mut world = Self {
            width,
            height,
            score: 0,
            life: 0,
            enemies_alive: 0,
            frame: 0,
            paused: false,
            game_over: false,
            shooting: false,
            one_shot: false,
            player: Player::new(width, height),
            bullets: EntityStore::new(),
            enemy_bullets: EntityStore::new(),
            enemies: EntityStore::new(),
            particles: EntityStore::new(),
            timers: TimerQueue::new(),
        };

        for _ in 0..MAX_ENEMIES {
            world.enemies.insert(Enemy::spawn(width));
            world.enemies_alive += 1;
        }
        world.grant_invincibility(SPAWN_GRACE);

        world
    }

    pub fn state(&self) -> GameState {
        if self.game_over {
            GameState::GameOver
        } else if self.paused {
            GameState::Paused
        } else {
            GameState::Playing
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    /// Timed invincibility window; the flag drops when the timer fires.
    pub fn grant_invincibility(&mut self, window: Duration) {
        self.player.invincible = true;
        self.timers.after(window, TimerEvent::InvincibilityOver);
    }

    /// Applies every delayed callback that has come due. Called once per
    /// loop iteration, paused or not: a respawn scheduled before a pause
    /// still fires on schedule.
    pub fn pump_timers(&mut self, now: Instant) {
        for event in self.timers.drain_due(now) {
            match event {
                TimerEvent::SpawnEnemy => {
                    self.enemies.insert(Enemy::spawn(self.width));
                }
                TimerEvent::InvincibilityOver => self.player.invincible = false,
            }
        }
    }

    /// Scores a destroyed ship and reserves its replacement. The alive
    /// count is bumped back up immediately so overlapping kills cannot
    /// schedule more respawns than the fleet has seats.
    pub fn record_kill(&mut self) {
        self.score += KILL_SCORE;
        self.enemies_alive = self.enemies_alive.saturating_sub(1);
        if self.enemies_alive < MAX_ENEMIES {
            self.enemies_alive += 1;
            self.timers.after(RESPAWN_DELAY, TimerEvent::SpawnEnemy);
        }
    }

    /// A hit on the player: burn a life and grant a grace window, or end
    /// the session. The hit taken at `MAX_LIVES - 1` is the fatal one.
    pub fn lose_life(&mut self) {
        if self.life < MAX_LIVES - 1 {
            self.grant_invincibility(SPAWN_GRACE);
            self.life += 1;
        } else {
            self.pause();
            self.game_over = true;
        }
    }

    /// Fires a player bullet from the paddle's midpoint.
    pub fn fire_player_shot(&mut self) {
        self.bullets
            .insert(Projectile::player_shot(self.player.center_x(), self.height));
    }

    /// One tick of the simulation; a no-op while paused. Rendering reads
    /// the state this leaves behind.
    pub fn advance_frame(&mut self) {
        if self.paused {
            return;
        }

        self.step_enemies();
        self.step_enemy_bullets();
        self.step_player_bullets();
        self.step_particles();
        self.step_player();

        self.frame += 1;
    }

    /// Moves every ship, lets it fire on its cadence, and resolves player
    /// bullets against it. The first overlapping bullet destroys the ship;
    /// both disappear in the same tick their overlap is found.
    fn step_enemies(&mut self) {
        let width = self.width;
        let frame = self.frame;

        for id in self.enemies.ids() {
            let mut shot = None;
            let (rect, center_x, top_y, hue) = {
                let Some(enemy) = self.enemies.get_mut(id) else {
                    continue;
                };
                enemy.advance(width);
                if enemy.wants_to_fire(frame) {
                    shot = Some(Projectile::enemy_shot(
                        enemy.center_x(),
                        enemy.bottom_y(),
                        enemy.hue,
                    ));
                }
                (enemy.rect(), enemy.center_x(), enemy.y, enemy.hue)
            };
            if let Some(shot) = shot {
                self.enemy_bullets.insert(shot);
            }

            let mut hit_bullet = None;
            for bullet_id in self.bullets.ids() {
                let Some(bullet) = self.bullets.get(bullet_id) else {
                    continue;
                };
                if intersects(bullet.rect(), rect) {
                    hit_bullet = Some(bullet_id);
                    break;
                }
            }
            if let Some(bullet_id) = hit_bullet {
                self.bullets.remove(bullet_id);
                self.enemies.remove(id);
                self.explode(center_x, top_y, hue);
                self.record_kill();
            }
        }
    }

    fn step_enemy_bullets(&mut self) {
        let height = self.height;
        for id in self.enemy_bullets.ids() {
            let Some(bullet) = self.enemy_bullets.get_mut(id) else {
                continue;
            };
            bullet.advance();
            let gone = bullet.off_screen(height);
            if gone {
                self.enemy_bullets.remove(id);
            }
        }
    }

    fn step_player_bullets(&mut self) {
        let height = self.height;
        for id in self.bullets.ids() {
            let Some(bullet) = self.bullets.get_mut(id) else {
                continue;
            };
            bullet.advance();
            let gone = bullet.off_screen(height);
            if gone {
                self.bullets.remove(id);
            }
        }
    }

    fn step_particles(&mut self) {
        for id in self.particles.ids() {
            let Some(particle) = self.particles.get_mut(id) else {
                continue;
            };
            particle.tick();
            let gone = particle.expired();
            if gone {
                self.particles.remove(id);
            }
        }
    }

    /// Player movement, auto-fire, and the enemy-bullet hit scan. A
    /// survivable hit grants invincibility immediately, which shields the
    /// rest of the same scan.
    fn step_player(&mut self) {
        self.player.advance(self.width);

        if self.shooting && self.frame % AUTO_FIRE_INTERVAL == 0 {
            self.fire_player_shot();
        }

        let player_rect = self.player.rect();
        for id in self.enemy_bullets.ids() {
            let Some(bullet) = self.enemy_bullets.get(id) else {
                continue;
            };
            if !self.player.invincible && intersects(bullet.rect(), player_rect) {
                self.enemy_bullets.remove(id);
                self.lose_life();
            }
        }
    }

    /// Debris burst at a destroyed ship's top-center, in the ship's color.
    fn explode(&mut self, x: f32, y: f32, hue: u16) {
        for _ in 0..EXPLOSION_PARTICLES {
            self.particles.insert(Particle::burst(x, y, Some(hue)));
        }
    }

    /// Pending delayed callbacks, exposed for the respawn bookkeeping tests.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }
}

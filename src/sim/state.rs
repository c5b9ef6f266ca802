//! Game session state and entity types
//!
//! The session owns every live entity; entities hold no back-references.
//! All timing is expressed as monotonic milliseconds injected by the caller,
//! and all randomness flows through the session's seeded RNG, so a run is
//! fully reproducible from (seed, input trace, clock trace).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteId;
use crate::consts::*;
use crate::settings::Playfield;

use super::collision::Aabb;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted (terminal until restart)
    GameOver,
    /// Final boss defeated (terminal until restart)
    Victory,
}

/// Which side a bullet belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Visual tag the renderer maps to a bullet color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletStyle {
    Blue,
    Red,
    Orange,
    Purple,
}

/// Minimum-interval gate between successive shots by one actor.
///
/// `None` means the actor has never fired, so the first shot is always
/// allowed. Readiness is a strict elapsed-time comparison.
#[derive(Debug, Clone, Copy)]
pub struct Cooldown {
    pub interval_ms: u64,
    pub last_fired_ms: Option<u64>,
}

impl Cooldown {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fired_ms: None,
        }
    }

    pub fn ready(&self, now_ms: u64) -> bool {
        self.last_fired_ms
            .map_or(true, |t| now_ms.saturating_sub(t) > self.interval_ms)
    }

    pub fn trigger(&mut self, now_ms: u64) {
        self.last_fired_ms = Some(now_ms);
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub cooldown: Cooldown,
}

impl Player {
    pub fn spawn(field: &Playfield) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0, field.height - 60.0),
            cooldown: Cooldown::new(PLAYER_COOLDOWN_MS),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(PLAYER_SIZE))
    }

    /// Fire one upward bullet centered on the ship, if off cooldown
    pub fn try_shoot(&mut self, now_ms: u64) -> Option<Bullet> {
        if !self.cooldown.ready(now_ms) {
            return None;
        }
        self.cooldown.trigger(now_ms);
        Some(Bullet::straight(
            Vec2::new(self.pos.x + PLAYER_SIZE / 2.0, self.pos.y),
            PLAYER_BULLET_SPEED,
            Faction::Player,
            BulletStyle::Blue,
        ))
    }
}

/// A normal descending enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub cooldown: Cooldown,
}

impl Enemy {
    pub fn spawn(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, SPAWN_Y),
            cooldown: Cooldown::new(ENEMY_COOLDOWN_MS),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(ENEMY_SIZE))
    }

    pub fn advance(&mut self) {
        self.pos.y += ENEMY_FALL_SPEED;
    }

    /// Probabilistic fire: the cooldown gates eligibility, then a per-tick
    /// random draw decides. The draw only happens on eligible ticks.
    pub fn try_shoot(&mut self, now_ms: u64, rng: &mut Pcg32) -> Option<Bullet> {
        if !self.cooldown.ready(now_ms) || rng.random::<f32>() >= ENEMY_FIRE_CHANCE {
            return None;
        }
        self.cooldown.trigger(now_ms);
        Some(Bullet::straight(
            Vec2::new(self.pos.x + ENEMY_SIZE / 2.0, self.pos.y + ENEMY_SIZE),
            ENEMY_BULLET_SPEED,
            Faction::Enemy,
            BulletStyle::Red,
        ))
    }
}

/// The stage-2 boss: bounces horizontally, fires a three-bullet volley
#[derive(Debug, Clone)]
pub struct Boss {
    pub pos: Vec2,
    /// Horizontal bounce direction, 1.0 or -1.0
    pub direction: f32,
    pub health: u32,
    pub max_health: u32,
    pub is_dead: bool,
    pub cooldown: Cooldown,
    pub sprite: SpriteId,
}

impl Boss {
    pub fn spawn(field: &Playfield) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0, BOSS_SPAWN_Y),
            direction: 1.0,
            health: BOSS_HEALTH,
            max_health: BOSS_HEALTH,
            is_dead: false,
            cooldown: Cooldown::new(BOSS_COOLDOWN_MS),
            sprite: SpriteId::Boss,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BOSS_WIDTH, BOSS_HEIGHT))
    }

    /// Bounce between the field edges at fixed height
    pub fn advance(&mut self, field: &Playfield) {
        self.pos.x += BOSS_SPEED * self.direction;
        if self.pos.x <= 0.0 || self.pos.x >= field.max_x(BOSS_WIDTH) {
            self.direction = -self.direction;
        }
    }

    /// One damage point per hit; death is terminal
    pub fn take_damage(&mut self) {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.is_dead = true;
        }
    }

    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Three downward bullets at fixed offsets from the left edge
    pub fn try_shoot(&mut self, now_ms: u64) -> Option<Vec<Bullet>> {
        if !self.cooldown.ready(now_ms) {
            return None;
        }
        self.cooldown.trigger(now_ms);
        let bottom = self.pos.y + BOSS_HEIGHT;
        Some(
            [20.0, 40.0, 60.0]
                .iter()
                .map(|dx| {
                    Bullet::straight(
                        Vec2::new(self.pos.x + dx, bottom),
                        BOSS_BULLET_SPEED,
                        Faction::Enemy,
                        BulletStyle::Orange,
                    )
                })
                .collect(),
        )
    }
}

/// The stage-3 boss: alternates a downward fan with a radial burst
#[derive(Debug, Clone)]
pub struct FinalBoss {
    pub pos: Vec2,
    pub direction: f32,
    pub health: u32,
    pub max_health: u32,
    pub is_dead: bool,
    pub cooldown: Cooldown,
    /// 0 = fan, 1 = radial; toggles after every shot
    pub attack_pattern: u8,
    pub sprite: SpriteId,
}

impl FinalBoss {
    pub fn spawn(field: &Playfield) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0, BOSS_SPAWN_Y),
            direction: 1.0,
            health: FINAL_BOSS_HEALTH,
            max_health: FINAL_BOSS_HEALTH,
            is_dead: false,
            cooldown: Cooldown::new(FINAL_BOSS_COOLDOWN_MS),
            attack_pattern: 0,
            sprite: SpriteId::FinalBoss,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(FINAL_BOSS_WIDTH, FINAL_BOSS_HEIGHT))
    }

    pub fn advance(&mut self, field: &Playfield) {
        self.pos.x += FINAL_BOSS_SPEED * self.direction;
        if self.pos.x <= 0.0 || self.pos.x >= field.max_x(FINAL_BOSS_WIDTH) {
            self.direction = -self.direction;
        }
    }

    pub fn take_damage(&mut self) {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.is_dead = true;
        }
    }

    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    pub fn try_shoot(&mut self, now_ms: u64) -> Option<Vec<Bullet>> {
        if !self.cooldown.ready(now_ms) {
            return None;
        }
        self.cooldown.trigger(now_ms);

        let bottom = self.pos.y + FINAL_BOSS_HEIGHT;
        let bullets = if self.attack_pattern == 0 {
            // Evenly spaced downward fan across the hull
            let step = FINAL_BOSS_WIDTH / (FAN_BULLET_COUNT + 1) as f32;
            (1..=FAN_BULLET_COUNT)
                .map(|i| {
                    Bullet::straight(
                        Vec2::new(self.pos.x + step * i as f32, bottom),
                        FAN_BULLET_SPEED,
                        Faction::Enemy,
                        BulletStyle::Purple,
                    )
                })
                .collect()
        } else {
            // Full-circle radial burst from the bottom center
            let center = Vec2::new(self.pos.x + FINAL_BOSS_WIDTH / 2.0, bottom);
            (0..RADIAL_BULLET_COUNT)
                .map(|i| {
                    let angle = i as f32 / RADIAL_BULLET_COUNT as f32 * std::f32::consts::TAU;
                    Bullet::radial(
                        center,
                        Vec2::new(angle.cos(), angle.sin()) * RADIAL_BULLET_SPEED,
                    )
                })
                .collect()
        };
        self.attack_pattern = (self.attack_pattern + 1) % 2;
        Some(bullets)
    }
}

/// A projectile moving along a fixed velocity vector
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub faction: Faction,
    pub style: BulletStyle,
}

impl Bullet {
    /// Vertical-only bullet
    pub fn straight(pos: Vec2, vy: f32, faction: Faction, style: BulletStyle) -> Self {
        Self {
            pos,
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            vel: Vec2::new(0.0, vy),
            faction,
            style,
        }
    }

    /// Radial bullet with both velocity components
    pub fn radial(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(RADIAL_BULLET_SIZE),
            vel,
            faction: Faction::Enemy,
            style: BulletStyle::Purple,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Cosmetic explosion debris; never affects gameplay
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn burst(pos: Vec2, rng: &mut Pcg32) -> Self {
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
        );
        Self {
            pos,
            vel,
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.vel *= PARTICLE_DAMPING;
        self.life = self.life.saturating_sub(1);
    }

    /// Render alpha, 1.0 fresh to 0.0 expired
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub playfield: Playfield,

    pub score: u64,
    pub lives: u32,
    /// Coarse progress phase: 1 = normal waves, 2 = boss, 3 = final boss.
    /// Monotonically increasing within a run.
    pub stage: u8,
    pub phase: GamePhase,

    pub player: Player,
    /// Player-faction bullets
    pub bullets: Vec<Bullet>,
    /// Enemy-faction bullets (enemies and both bosses)
    pub enemy_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub boss: Option<Boss>,
    pub final_boss: Option<FinalBoss>,

    /// Clock reading when the run started (spawner warmup gate)
    pub started_at_ms: u64,
    /// Clock reading of the last normal enemy spawn
    pub last_spawn_ms: u64,
}

impl GameState {
    pub fn new(playfield: Playfield, seed: u64, now_ms: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            score: 0,
            lives: STARTING_LIVES,
            stage: 1,
            phase: GamePhase::Playing,
            player: Player::spawn(&playfield),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            boss: None,
            final_boss: None,
            started_at_ms: now_ms,
            last_spawn_ms: now_ms,
        }
    }

    /// Reset everything to initial values and resume play.
    ///
    /// The only transition out of GameOver/Victory; triggered by the driver,
    /// never by the simulation itself.
    pub fn restart(&mut self, now_ms: u64) {
        *self = GameState::new(self.playfield, self.seed, now_ms);
    }

    /// Emit an explosion burst at a position
    pub fn spawn_explosion(&mut self, pos: Vec2, count: usize) {
        for _ in 0..count {
            let particle = Particle::burst(pos, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Spawn one normal enemy at a random x just above the field
    pub fn spawn_enemy(&mut self, now_ms: u64) {
        let x = self.rng.random_range(self.playfield.spawn_range());
        self.enemies.push(Enemy::spawn(x));
        self.last_spawn_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_first_shot_always_allowed() {
        let cd = Cooldown::new(4000);
        assert!(cd.ready(0));
    }

    #[test]
    fn test_cooldown_strict_elapsed_comparison() {
        let mut cd = Cooldown::new(100);
        cd.trigger(1000);
        assert!(!cd.ready(1050));
        // Exactly the interval is still too soon
        assert!(!cd.ready(1100));
        assert!(cd.ready(1101));
    }

    #[test]
    fn test_boss_damage_is_terminal_at_zero() {
        let mut boss = Boss::spawn(&Playfield::default());
        assert_eq!(boss.health, 20);
        for _ in 0..19 {
            boss.take_damage();
        }
        assert!(!boss.is_dead);
        boss.take_damage();
        assert!(boss.is_dead);
        assert_eq!(boss.health, 0);
        // Further damage never resurrects or underflows
        boss.take_damage();
        assert!(boss.is_dead);
        assert_eq!(boss.health, 0);
    }

    #[test]
    fn test_final_boss_alternates_attack_patterns() {
        let mut boss = FinalBoss::spawn(&Playfield::default());
        let fan = boss.try_shoot(10_000).unwrap();
        assert_eq!(fan.len(), 5);
        assert!(fan.iter().all(|b| b.vel.x == 0.0 && b.vel.y > 0.0));

        let radial = boss.try_shoot(20_000).unwrap();
        assert_eq!(radial.len(), 8);
        // Radial bullets cover the full circle, including upward movers
        assert!(radial.iter().any(|b| b.vel.y < 0.0));
        assert!(radial.iter().any(|b| b.vel.x != 0.0));

        // Back to the fan
        let fan_again = boss.try_shoot(30_000).unwrap();
        assert_eq!(fan_again.len(), 5);
    }

    #[test]
    fn test_particle_decay() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut p = Particle::burst(Vec2::new(100.0, 100.0), &mut rng);
        let initial_speed = p.vel.length();
        p.advance();
        assert_eq!(p.life, 29);
        assert!(p.vel.length() <= initial_speed);
        assert!((p.alpha() - 29.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::new(Playfield::default(), 42, 0);
        state.score = 700;
        state.lives = 0;
        state.stage = 3;
        state.phase = GamePhase::GameOver;
        let field = state.playfield;
        state.enemies.push(Enemy::spawn(100.0));
        state.boss = Some(Boss::spawn(&field));
        state.final_boss = Some(FinalBoss::spawn(&field));
        state.spawn_explosion(Vec2::new(50.0, 50.0), 10);

        state.restart(99_000);

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 10);
        assert_eq!(state.stage, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert!(state.enemy_bullets.is_empty());
        assert!(state.particles.is_empty());
        assert!(state.boss.is_none());
        assert!(state.final_boss.is_none());
        assert_eq!(state.started_at_ms, 99_000);
    }
}

//! Astro Raid - a three-stage vertical shoot-'em-up simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, combat, game state)
//! - `snapshot`: Read-only per-tick view handed to the renderer/UI
//! - `assets`: Sprite-readiness flags for renderer fallback
//! - `settings`: Playfield dimensions; all bounds derive from them
//!
//! Rendering, input polling and HUD updates live outside this crate. The
//! driver polls input into a [`sim::TickInput`], calls [`sim::tick`] once per
//! frame with a monotonic millisecond clock, and draws from a
//! [`snapshot::RenderSnapshot`].

pub mod assets;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use settings::Playfield;

/// Game tuning constants
pub mod consts {
    /// Default playfield size in logical units
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PLAYER_COOLDOWN_MS: u64 = 100;
    /// Upward bullet speed (units/tick)
    pub const PLAYER_BULLET_SPEED: f32 = -8.0;

    /// Normal enemies
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_FALL_SPEED: f32 = 2.0;
    pub const ENEMY_COOLDOWN_MS: u64 = 4000;
    /// Per-eligible-tick fire probability (deliberately frame-rate-dependent)
    pub const ENEMY_FIRE_CHANCE: f32 = 0.005;
    pub const ENEMY_BULLET_SPEED: f32 = 2.0;
    pub const ENEMY_SCORE: u64 = 100;

    /// Stage-2 boss
    pub const BOSS_WIDTH: f32 = 80.0;
    pub const BOSS_HEIGHT: f32 = 60.0;
    pub const BOSS_SPEED: f32 = 2.0;
    pub const BOSS_HEALTH: u32 = 20;
    pub const BOSS_COOLDOWN_MS: u64 = 1500;
    pub const BOSS_BULLET_SPEED: f32 = 3.0;
    pub const BOSS_SCORE: u64 = 2000;
    /// Score threshold that triggers the boss (stage 1 -> 2)
    pub const BOSS_TRIGGER_SCORE: u64 = 200;

    /// Stage-3 final boss
    pub const FINAL_BOSS_WIDTH: f32 = 120.0;
    pub const FINAL_BOSS_HEIGHT: f32 = 80.0;
    pub const FINAL_BOSS_SPEED: f32 = 1.5;
    pub const FINAL_BOSS_HEALTH: u32 = 50;
    pub const FINAL_BOSS_COOLDOWN_MS: u64 = 1200;
    /// Downward fan pattern: bullet count and speed
    pub const FAN_BULLET_COUNT: usize = 5;
    pub const FAN_BULLET_SPEED: f32 = 2.0;
    /// Radial pattern: bullet count and radial speed
    pub const RADIAL_BULLET_COUNT: usize = 8;
    pub const RADIAL_BULLET_SPEED: f32 = 2.0;
    pub const FINAL_BOSS_SCORE: u64 = 5000;
    /// Score threshold that triggers the final boss (stage 2 -> 3)
    pub const FINAL_BOSS_TRIGGER_SCORE: u64 = 500;

    /// Bosses spawn at this height, x at the field midpoint
    pub const BOSS_SPAWN_Y: f32 = 100.0;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 8.0;
    pub const RADIAL_BULLET_SIZE: f32 = 6.0;

    /// Enemy spawner timing
    pub const SPAWN_WARMUP_MS: u64 = 2000;
    pub const SPAWN_INTERVAL_MS: u64 = 3000;
    /// Horizontal margin kept clear of the field edges when spawning
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Enemies appear just above the visible area
    pub const SPAWN_Y: f32 = -40.0;

    /// Explosion particles
    pub const SMALL_BURST: usize = 10;
    pub const BOSS_BURST: usize = 20;
    pub const FINAL_BOSS_BURST: usize = 30;
    pub const PARTICLE_LIFE: u32 = 30;
    /// Velocity damping applied per tick
    pub const PARTICLE_DAMPING: f32 = 0.98;
    /// Initial velocity spread (each axis uniform in +-SPREAD/2)
    pub const PARTICLE_SPREAD: f32 = 6.0;

    /// Off-screen culling margins
    pub const PLAYER_BULLET_CULL_Y: f32 = -10.0;
    pub const ENEMY_BULLET_CULL_MARGIN: f32 = 10.0;
    pub const ENEMY_CULL_MARGIN: f32 = 40.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 10;
}

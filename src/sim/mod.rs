//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clock injected per tick (monotonic milliseconds), never read globally
//! - Seeded RNG only, owned by the session
//! - Stable iteration order over entity collections
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod state;
pub mod tick;

pub use collision::{Aabb, aabb_overlap};
pub use state::{
    Boss, Bullet, BulletStyle, Cooldown, Enemy, Faction, FinalBoss, GamePhase, GameState, Particle,
    Player,
};
pub use tick::{TickInput, tick};

//! Per-tick simulation step
//!
//! The driver calls [`tick`] once per frame with the sampled input and a
//! monotonic millisecond clock. Phase order within a tick is fixed:
//! movement, culling, shooting, combat resolution, then spawning. Combat
//! runs before the spawner so a threshold crossed this tick produces its
//! boss in the same tick.

use crate::consts::*;

use super::combat;
use super::state::{Boss, FinalBoss, GamePhase, GameState};

/// One frame of sampled input
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the simulation by one tick.
///
/// Outside the Playing phase this is a no-op; the world stays frozen until
/// the driver calls [`GameState::restart`].
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    move_player(state, input);

    // Advance and cull projectiles and enemies. Player bullets leave off the
    // top, everything else off the bottom. Upward radial bullets are only
    // reaped if they curve back below the field.
    let field = state.playfield;
    for bullet in &mut state.bullets {
        bullet.advance();
    }
    state.bullets.retain(|b| b.pos.y > PLAYER_BULLET_CULL_Y);

    for enemy in &mut state.enemies {
        enemy.advance();
    }
    state
        .enemies
        .retain(|e| e.pos.y < field.height + ENEMY_CULL_MARGIN);

    for bullet in &mut state.enemy_bullets {
        bullet.advance();
    }
    state
        .enemy_bullets
        .retain(|b| b.pos.y < field.height + ENEMY_BULLET_CULL_MARGIN);

    for particle in &mut state.particles {
        particle.advance();
    }
    state.particles.retain(|p| p.life > 0);

    // Bosses move and fire only while alive; a defeated boss stays on the
    // field as an inert wreck.
    if let Some(boss) = state.boss.as_mut() {
        if !boss.is_dead {
            boss.advance(&field);
            if let Some(volley) = boss.try_shoot(now_ms) {
                state.enemy_bullets.extend(volley);
            }
        }
    }
    if let Some(boss) = state.final_boss.as_mut() {
        if !boss.is_dead {
            boss.advance(&field);
            if let Some(volley) = boss.try_shoot(now_ms) {
                state.enemy_bullets.extend(volley);
            }
        }
    }

    if input.fire {
        if let Some(bullet) = state.player.try_shoot(now_ms) {
            state.bullets.push(bullet);
        }
    }

    let mut enemy_volley = Vec::new();
    for enemy in &mut state.enemies {
        if let Some(bullet) = enemy.try_shoot(now_ms, &mut state.rng) {
            enemy_volley.push(bullet);
        }
    }
    state.enemy_bullets.extend(enemy_volley);

    combat::resolve(state);

    run_spawner(state, now_ms);
}

/// Apply directional input at fixed speed, then clamp to the field
fn move_player(state: &mut GameState, input: &TickInput) {
    let p = &mut state.player.pos;
    if input.left {
        p.x -= PLAYER_SPEED;
    }
    if input.right {
        p.x += PLAYER_SPEED;
    }
    if input.up {
        p.y -= PLAYER_SPEED;
    }
    if input.down {
        p.y += PLAYER_SPEED;
    }
    p.x = p.x.clamp(0.0, state.playfield.max_x(PLAYER_SIZE));
    p.y = p.y.clamp(0.0, state.playfield.max_y(PLAYER_SIZE));
}

/// Stage transitions and the normal-enemy spawner.
///
/// Threshold checks come first and each spawns its boss at most once per run
/// (the stage bump makes the guard false forever after). A transition tick
/// spawns no normal enemy.
fn run_spawner(state: &mut GameState, now_ms: u64) {
    if state.stage == 1 && state.score >= BOSS_TRIGGER_SCORE && state.boss.is_none() {
        state.boss = Some(Boss::spawn(&state.playfield));
        state.stage = 2;
        log::info!("score {} reached, boss incoming", state.score);
        return;
    }

    if state.stage == 2 && state.score >= FINAL_BOSS_TRIGGER_SCORE && state.final_boss.is_none() {
        state.final_boss = Some(FinalBoss::spawn(&state.playfield));
        state.stage = 3;
        log::info!("score {} reached, final boss incoming", state.score);
        return;
    }

    // Normal waves run through stage 2 and stop for good once the boss
    // falls; the stage-3 transition happens on a later threshold tick.
    let waves_active = state.stage <= 2 && state.boss.as_ref().map_or(true, |b| !b.is_dead);
    if waves_active
        && now_ms.saturating_sub(state.started_at_ms) > SPAWN_WARMUP_MS
        && now_ms.saturating_sub(state.last_spawn_ms) > SPAWN_INTERVAL_MS
    {
        state.spawn_enemy(now_ms);
    }
}

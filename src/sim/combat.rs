//! Combat resolution
//!
//! Runs once per tick after movement and shooting, on post-movement
//! positions. Rules execute in a fixed order; every removal is recorded in a
//! mark set built during the sweep and applied afterwards, so results are
//! independent of collection order and an entity consumed by an earlier rule
//! is never matched by a later one.
//!
//! Rule order:
//! 1. player bullets vs enemies
//! 2. player bullets vs boss
//! 3. player bullets vs final boss
//! 4. enemy bullets vs player
//! 5. enemy bodies vs player

use glam::Vec2;

use crate::consts::*;

use super::collision::aabb_overlap;
use super::state::{GamePhase, GameState};

/// Resolve all combat collisions for this tick
pub fn resolve(state: &mut GameState) {
    let mut spent_bullets = vec![false; state.bullets.len()];
    let mut spent_enemy_bullets = vec![false; state.enemy_bullets.len()];
    let mut dead_enemies = vec![false; state.enemies.len()];
    // (position, particle count), spawned after the sweeps
    let mut explosions: Vec<(Vec2, usize)> = Vec::new();
    let mut score_delta: u64 = 0;

    // Rule 1: player bullets vs enemies. A bullet may destroy every enemy
    // it overlaps this tick; each kill pays the same bounty.
    for (bi, bullet) in state.bullets.iter().enumerate() {
        for (ei, enemy) in state.enemies.iter().enumerate() {
            if dead_enemies[ei] {
                continue;
            }
            if aabb_overlap(&bullet.aabb(), &enemy.aabb()) {
                spent_bullets[bi] = true;
                dead_enemies[ei] = true;
                score_delta += ENEMY_SCORE;
                explosions.push((enemy.pos, SMALL_BURST));
            }
        }
    }

    // Rule 2: player bullets vs boss. A dead boss is inert and absorbs
    // nothing; the bounty is paid exactly once, on the killing hit.
    if let Some(boss) = state.boss.as_mut() {
        if !boss.is_dead {
            for (bi, bullet) in state.bullets.iter().enumerate() {
                if spent_bullets[bi] {
                    continue;
                }
                if aabb_overlap(&bullet.aabb(), &boss.aabb()) {
                    spent_bullets[bi] = true;
                    boss.take_damage();
                    explosions.push((bullet.pos, SMALL_BURST));
                    if boss.is_dead {
                        explosions.push((boss.pos, BOSS_BURST));
                        score_delta += BOSS_SCORE;
                        log::info!("boss defeated, +{} points", BOSS_SCORE);
                        break;
                    }
                }
            }
        }
    }

    // Rule 3: player bullets vs final boss. Killing it ends the run.
    if let Some(boss) = state.final_boss.as_mut() {
        if !boss.is_dead {
            for (bi, bullet) in state.bullets.iter().enumerate() {
                if spent_bullets[bi] {
                    continue;
                }
                if aabb_overlap(&bullet.aabb(), &boss.aabb()) {
                    spent_bullets[bi] = true;
                    boss.take_damage();
                    explosions.push((bullet.pos, SMALL_BURST));
                    if boss.is_dead {
                        explosions.push((boss.pos, FINAL_BOSS_BURST));
                        score_delta += FINAL_BOSS_SCORE;
                        state.phase = GamePhase::Victory;
                        log::info!("final boss defeated, victory");
                        break;
                    }
                }
            }
        }
    }

    // Rules 4 and 5 stop as soon as the run leaves Playing: once lives hit
    // zero (or victory fired above), nothing else touches the player this
    // tick.
    if state.phase == GamePhase::Playing {
        let player_box = state.player.aabb();

        // Rule 4: enemy bullets vs player
        for (bi, bullet) in state.enemy_bullets.iter().enumerate() {
            if aabb_overlap(&bullet.aabb(), &player_box) {
                spent_enemy_bullets[bi] = true;
                state.lives = state.lives.saturating_sub(1);
                explosions.push((state.player.pos, SMALL_BURST));
                if state.lives == 0 {
                    state.phase = GamePhase::GameOver;
                    log::info!("lives exhausted, game over");
                    break;
                }
            }
        }

        // Rule 5: enemy bodies vs player
        if state.phase == GamePhase::Playing {
            for (ei, enemy) in state.enemies.iter().enumerate() {
                if dead_enemies[ei] {
                    continue;
                }
                if aabb_overlap(&enemy.aabb(), &player_box) {
                    dead_enemies[ei] = true;
                    state.lives = state.lives.saturating_sub(1);
                    explosions.push((state.player.pos, SMALL_BURST));
                    if state.lives == 0 {
                        state.phase = GamePhase::GameOver;
                        log::info!("lives exhausted, game over");
                        break;
                    }
                }
            }
        }
    }

    // Apply the mark sets
    let mut i = 0;
    state.bullets.retain(|_| {
        let keep = !spent_bullets[i];
        i += 1;
        keep
    });
    let mut i = 0;
    state.enemy_bullets.retain(|_| {
        let keep = !spent_enemy_bullets[i];
        i += 1;
        keep
    });
    let mut i = 0;
    state.enemies.retain(|_| {
        let keep = !dead_enemies[i];
        i += 1;
        keep
    });

    state.score += score_delta;
    for (pos, count) in explosions {
        state.spawn_explosion(pos, count);
    }
}

//! Renderer-facing snapshot
//!
//! A flat, serializable copy of everything the renderer and HUD need for one
//! frame. Built fresh each tick from the live state; the renderer never
//! touches [`GameState`] directly, so the simulation stays free of drawing
//! concerns and the snapshot can cross a process or FFI boundary as JSON.

use glam::Vec2;
use serde::Serialize;

use crate::assets::AssetCatalog;
use crate::sim::{Boss, BulletStyle, FinalBoss, GamePhase, GameState};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub size: Vec2,
    pub style: BulletStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Render opacity, fades with remaining life
    pub alpha: f32,
}

/// Either boss, with everything the health bar and sprite pass need
#[derive(Debug, Clone, Serialize)]
pub struct BossView {
    pub pos: Vec2,
    pub size: Vec2,
    pub health_fraction: f32,
    pub is_dead: bool,
    /// False until the sprite decodes; draw the shape fallback meanwhile
    pub sprite_ready: bool,
}

/// One frame of render state
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub score: u64,
    pub lives: u32,
    pub stage: u8,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemy_bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub particles: Vec<ParticleView>,
    pub boss: Option<BossView>,
    pub final_boss: Option<BossView>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, assets: &AssetCatalog) -> Self {
        let bullet_view = |b: &crate::sim::Bullet| BulletView {
            pos: b.pos,
            size: b.size,
            style: b.style,
        };
        Self {
            score: state.score,
            lives: state.lives,
            stage: state.stage,
            phase: state.phase,
            player: PlayerView {
                pos: state.player.pos,
                size: state.player.aabb().size,
            },
            bullets: state.bullets.iter().map(bullet_view).collect(),
            enemy_bullets: state.enemy_bullets.iter().map(bullet_view).collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    size: e.aabb().size,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    alpha: p.alpha(),
                })
                .collect(),
            boss: state.boss.as_ref().map(|b| boss_view(b, assets)),
            final_boss: state.final_boss.as_ref().map(|b| final_boss_view(b, assets)),
        }
    }
}

fn boss_view(boss: &Boss, assets: &AssetCatalog) -> BossView {
    BossView {
        pos: boss.pos,
        size: boss.aabb().size,
        health_fraction: boss.health_fraction(),
        is_dead: boss.is_dead,
        sprite_ready: assets.is_ready(boss.sprite),
    }
}

fn final_boss_view(boss: &FinalBoss, assets: &AssetCatalog) -> BossView {
    BossView {
        pos: boss.pos,
        size: boss.aabb().size,
        health_fraction: boss.health_fraction(),
        is_dead: boss.is_dead,
        sprite_ready: assets.is_ready(boss.sprite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteId;
    use crate::settings::Playfield;
    use crate::sim::Boss;

    #[test]
    fn test_snapshot_mirrors_session_scalars() {
        let mut state = GameState::new(Playfield::default(), 1, 0);
        state.score = 300;
        state.lives = 7;
        state.stage = 2;

        let snap = RenderSnapshot::capture(&state, &AssetCatalog::new());
        assert_eq!(snap.score, 300);
        assert_eq!(snap.lives, 7);
        assert_eq!(snap.stage, 2);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!(snap.boss.is_none());
    }

    #[test]
    fn test_boss_view_tracks_health_and_sprite() {
        let mut state = GameState::new(Playfield::default(), 1, 0);
        let field = state.playfield;
        let mut boss = Boss::spawn(&field);
        boss.health = 5;
        state.boss = Some(boss);

        let mut assets = AssetCatalog::new();
        let snap = RenderSnapshot::capture(&state, &assets);
        let view = snap.boss.as_ref().unwrap();
        assert!((view.health_fraction - 0.25).abs() < 1e-6);
        assert!(!view.sprite_ready);

        assets.mark_ready(SpriteId::Boss);
        let snap = RenderSnapshot::capture(&state, &assets);
        assert!(snap.boss.as_ref().unwrap().sprite_ready);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::new(Playfield::default(), 1, 0);
        let snap = RenderSnapshot::capture(&state, &AssetCatalog::new());
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"phase\":\"Playing\""));
    }
}

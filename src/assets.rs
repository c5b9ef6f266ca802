//! Sprite-readiness flags
//!
//! Boss sprites load asynchronously outside the core. The simulation never
//! waits on them; the renderer only needs a per-sprite boolean to decide
//! between the image and the primitive-shape fallback. A missing sprite is
//! never an error.

use serde::{Deserialize, Serialize};

/// Sprites the renderer may not have decoded yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Boss,
    FinalBoss,
}

/// Tracks which sprites are ready to draw
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetCatalog {
    boss_ready: bool,
    final_boss_ready: bool,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the asset loader once a sprite has decoded
    pub fn mark_ready(&mut self, id: SpriteId) {
        match id {
            SpriteId::Boss => self.boss_ready = true,
            SpriteId::FinalBoss => self.final_boss_ready = true,
        }
    }

    pub fn is_ready(&self, id: SpriteId) -> bool {
        match id {
            SpriteId::Boss => self.boss_ready,
            SpriteId::FinalBoss => self.final_boss_ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprites_start_unready() {
        let catalog = AssetCatalog::new();
        assert!(!catalog.is_ready(SpriteId::Boss));
        assert!(!catalog.is_ready(SpriteId::FinalBoss));
    }

    #[test]
    fn test_mark_ready_is_per_sprite() {
        let mut catalog = AssetCatalog::new();
        catalog.mark_ready(SpriteId::Boss);
        assert!(catalog.is_ready(SpriteId::Boss));
        assert!(!catalog.is_ready(SpriteId::FinalBoss));
    }
}

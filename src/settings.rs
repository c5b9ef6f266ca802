//! Playfield configuration
//!
//! The simulation is written against a logical playfield; every clamp,
//! spawn and bounce bound derives from these dimensions so the whole game
//! scales proportionally if the field is reconfigured.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Logical playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest x an entity of the given width may occupy
    #[inline]
    pub fn max_x(&self, entity_width: f32) -> f32 {
        self.width - entity_width
    }

    /// Largest y an entity of the given height may occupy
    #[inline]
    pub fn max_y(&self, entity_height: f32) -> f32 {
        self.height - entity_height
    }

    /// Horizontal range normal enemies may spawn in
    #[inline]
    pub fn spawn_range(&self) -> std::ops::Range<f32> {
        SPAWN_MARGIN..(self.width - SPAWN_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_match_reference_field() {
        let field = Playfield::default();
        assert_eq!(field.max_x(PLAYER_SIZE), 760.0);
        assert_eq!(field.max_y(PLAYER_SIZE), 560.0);
        assert_eq!(field.max_x(BOSS_WIDTH), 720.0);
        assert_eq!(field.max_x(FINAL_BOSS_WIDTH), 680.0);
    }

    #[test]
    fn test_bounds_scale_with_field_size() {
        let field = Playfield::new(1600.0, 1200.0);
        assert_eq!(field.max_x(PLAYER_SIZE), 1560.0);
        assert_eq!(field.spawn_range(), 20.0..1580.0);
    }
}

//! Axis-aligned collision detection
//!
//! Every gameplay collision in the game reduces to one pairwise AABB overlap
//! test. Entity counts stay in the low tens, so the O(bullets x enemies)
//! sweep in `combat` never needs a broadphase.

use glam::Vec2;

/// Axis-aligned bounding box, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Strict-inequality overlap test on both axes.
///
/// Boxes that merely share an edge do not collide.
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes_collide() {
        // Reference scenario: bullet vs enemy
        let bullet = aabb(100.0, 100.0, 4.0, 8.0);
        let enemy = aabb(98.0, 98.0, 30.0, 30.0);
        assert!(aabb_overlap(&bullet, &enemy));
        assert!(aabb_overlap(&enemy, &bullet));
    }

    #[test]
    fn test_separated_boxes_do_not_collide() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(50.0, 50.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &b));
    }

    #[test]
    fn test_shared_edge_does_not_collide() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        // b starts exactly where a ends on x
        let b = aabb(10.0, 0.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &b));

        // Same on y
        let c = aabb(0.0, 10.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &c));
    }

    #[test]
    fn test_contained_box_collides() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 10.0, 10.0);
        assert!(aabb_overlap(&outer, &inner));
        assert!(aabb_overlap(&inner, &outer));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = aabb(ax, ay, aw, ah);
            let b = aabb(bx, by, bw, bh);
            prop_assert_eq!(aabb_overlap(&a, &b), aabb_overlap(&b, &a));
        }
    }
}

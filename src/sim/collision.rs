//! Proximity tests
//!
//! Every collision in the game is the same check: two entity centers closer
//! than a fixed radius.

use glam::Vec2;

use super::entity::Entity;

/// True if the centers are strictly closer than `radius`
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < radius
}

/// Entity-level proximity check
#[inline]
pub fn entities_collide(a: &Entity, b: &Entity, radius: f32) -> bool {
    within_radius(a.pos, b.pos, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;
    use proptest::prelude::*;

    #[test]
    fn test_boundary_at_radius() {
        let hero = Vec2::new(100.0, 100.0);
        assert!(within_radius(hero, Vec2::new(100.0, 149.0), 50.0));
        assert!(!within_radius(hero, Vec2::new(100.0, 151.0), 50.0));
        assert!(!within_radius(hero, Vec2::new(150.0, 100.0), 50.0));
    }

    #[test]
    fn test_entities_collide() {
        let rock = Entity::new(
            1,
            Vec2::new(0.0, 0.0),
            EntityKind::Rock {
                angle: 0.0,
                roll: 0.0,
                speed: 100.0,
                size: 90.0,
            },
        );
        let laser = Entity::new(
            2,
            Vec2::new(30.0, 39.0),
            EntityKind::Laser {
                speed: 500.0,
                size: 80.0,
            },
        );
        assert!(entities_collide(&rock, &laser, 50.0));
        assert!(entities_collide(&laser, &rock, 50.0));
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(within_radius(a, b, 50.0), within_radius(b, a, 50.0));
        }

        #[test]
        fn prop_distance_decides(angle in 0.0f32..std::f32::consts::TAU, dist in 0.0f32..200.0) {
            let a = Vec2::new(500.0, 500.0);
            let b = a + Vec2::from_angle(angle) * dist;
            if dist < 49.9 {
                prop_assert!(within_radius(a, b, 50.0));
            } else if dist > 50.1 {
                prop_assert!(!within_radius(a, b, 50.0));
            }
        }
    }
}

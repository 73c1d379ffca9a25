//! Fixed-interval motion tick
//!
//! Each tick bounces targets off the walls, moves them one step, and turns
//! the spin phase.

use super::state::TargetField;
use crate::consts::{SPIN_PERIOD, SPIN_STEP};

/// Advance the field by `ticks` timer ticks
///
/// Does nothing while movement is disabled.
pub fn advance(field: &mut TargetField, ticks: u32) {
    if !field.movement_enabled {
        return;
    }
    for _ in 0..ticks {
        step(field);
    }
}

fn step(field: &mut TargetField) {
    if field.features.motion {
        let divisor = field.speed_divisor();
        for target in field.targets.iter_mut().filter(|t| t.active) {
            let Some(velocity) = target.velocity.as_mut() else {
                continue;
            };

            // Wall check uses the position from before this tick's move, so
            // an edge can end up one step past the wall before it turns back.
            if leading_edge_out(target.center.x, velocity.x, target.radius) {
                velocity.x = -velocity.x;
            }
            if leading_edge_out(target.center.y, velocity.y, target.radius) {
                velocity.y = -velocity.y;
            }

            target.center += *velocity / divisor;
        }
    }

    if field.features.spin {
        // Offset is in wedge units but wraps at 2π, so the stripes jump by a
        // fraction of a wedge at the wrap.
        field.spin_offset = (field.spin_offset + SPIN_STEP).rem_euclid(SPIN_PERIOD);
    }
}

/// Whether the edge facing the direction of travel is on or past ±1
#[inline]
fn leading_edge_out(center: f32, speed: f32, radius: f32) -> bool {
    if speed > 0.0 {
        center + radius >= 1.0
    } else if speed < 0.0 {
        center - radius <= -1.0
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Features, Placement, SpeedPreset, Target};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn moving(spin: bool) -> Features {
        Features {
            clickable: true,
            placement: Placement::Random,
            motion: true,
            spin,
            ..Default::default()
        }
    }

    fn single(center: Vec2, velocity: Vec2) -> TargetField {
        let mut field = TargetField::new(moving(false));
        let mut target = Target::new(center, 0.1);
        target.velocity = Some(velocity);
        field.targets = vec![target];
        field.initial_count = 1;
        field.targets_remaining = 1;
        field
    }

    #[test]
    fn test_moves_by_velocity_over_divisor() {
        let mut field = single(Vec2::ZERO, Vec2::new(0.5, -1.0));
        field.speed = SpeedPreset::Normal;
        advance(&mut field, 1);

        let divisor = SpeedPreset::Normal.divisor();
        let center = field.targets[0].center;
        assert!((center.x - 0.5 / divisor).abs() < 1e-6);
        assert!((center.y + 1.0 / divisor).abs() < 1e-6);
    }

    #[test]
    fn test_left_wall_flips_x() {
        let mut field = single(Vec2::new(-0.95, 0.0), Vec2::new(-1.0, 0.5));
        advance(&mut field, 1);

        let target = &field.targets[0];
        let v = target.velocity.unwrap();
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 0.5);
        // Reversal and displacement happen in the same tick
        assert!(target.center.x > -0.95);
    }

    #[test]
    fn test_top_wall_flips_y_only() {
        let mut field = single(Vec2::new(0.0, 0.95), Vec2::new(0.3, 0.7));
        advance(&mut field, 1);

        let v = field.targets[0].velocity.unwrap();
        assert_eq!(v.x, 0.3);
        assert_eq!(v.y, -0.7);
    }

    #[test]
    fn test_overshoot_is_kept() {
        // Edge at 0.99 with a step of 0.04: crosses the wall before any check sees it
        let mut field = single(Vec2::new(0.89, 0.0), Vec2::new(1.0, 0.0));
        field.speed = SpeedPreset::Frantic;
        advance(&mut field, 1);
        let edge = field.targets[0].center.x + 0.1;
        assert!(edge > 1.0);
        assert_eq!(field.targets[0].velocity.unwrap().x, 1.0);

        // Next tick turns it around from the overshoot position
        advance(&mut field, 1);
        assert_eq!(field.targets[0].velocity.unwrap().x, -1.0);
        assert!((field.targets[0].center.x - 0.89).abs() < 1e-5);
    }

    #[test]
    fn test_moving_away_from_wall_keeps_direction() {
        let mut field = single(Vec2::new(-0.95, 0.0), Vec2::new(1.0, 0.0));
        advance(&mut field, 1);
        assert_eq!(field.targets[0].velocity.unwrap().x, 1.0);
    }

    #[test]
    fn test_disabled_movement_freezes_field() {
        let mut field = single(Vec2::ZERO, Vec2::new(1.0, 1.0));
        field.features.spin = true;
        field.movement_enabled = false;
        advance(&mut field, 10);

        assert_eq!(field.targets[0].center, Vec2::ZERO);
        assert_eq!(field.spin_offset, 0.0);
    }

    #[test]
    fn test_inactive_targets_stay_put() {
        let mut field = single(Vec2::ZERO, Vec2::new(1.0, 1.0));
        field.targets[0].active = false;
        advance(&mut field, 5);
        assert_eq!(field.targets[0].center, Vec2::ZERO);
    }

    #[test]
    fn test_spin_wraps() {
        let mut field = TargetField::new(moving(true));
        field.spin_offset = SPIN_PERIOD - SPIN_STEP / 2.0;
        advance(&mut field, 1);

        assert!(field.spin_offset >= 0.0 && field.spin_offset < SPIN_PERIOD);
        assert!((field.spin_offset - SPIN_STEP / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_targets_stay_near_walls() {
        let mut field = TargetField::new(moving(true));
        field.speed = SpeedPreset::Frantic;
        field.initialize(10, Placement::Random, &mut Pcg32::seed_from_u64(5));

        let max_step = 1.0 / SpeedPreset::Frantic.divisor();
        for _ in 0..2000 {
            advance(&mut field, 1);
            for t in &field.targets {
                assert!(t.center.x.abs() + t.radius <= 1.0 + max_step + 1e-4);
                assert!(t.center.y.abs() + t.radius <= 1.0 + max_step + 1e-4);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = TargetField::new(moving(true));
        let mut b = TargetField::new(moving(true));
        a.initialize(10, Placement::Random, &mut Pcg32::seed_from_u64(99));
        b.initialize(10, Placement::Random, &mut Pcg32::seed_from_u64(99));

        advance(&mut a, 300);
        for _ in 0..300 {
            advance(&mut b, 1);
        }
        assert_eq!(a.targets, b.targets);
        assert_eq!(a.spin_offset, b.spin_offset);
    }
}

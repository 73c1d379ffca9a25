//! Shape generation for the target field

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, VertexLayout};
use crate::consts::{BASE_COLOR, TRIANGLES_PER_TARGET};
use crate::sim::{Target, TargetField};

/// Color for targets without a stripe (the plain shader ignores it)
const UNCOLORED: [f32; 4] = [0.0; 4];

/// Generate a triangle fan for one target
///
/// Wedge `i` spans `TAU * (i + spin) / segments` to `TAU * (i + 1 + spin) /
/// segments`. Striped targets alternate their stripe color (even wedges) with
/// `BASE_COLOR` (odd wedges).
pub fn target_wedges(target: &Target, segments: u32, spin: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let center = target.center;

    for i in 0..segments {
        let theta1 = TAU * (i as f32 + spin) / segments as f32;
        let theta2 = TAU * ((i + 1) as f32 + spin) / segments as f32;

        let color = match target.stripe_color {
            Some(stripe) if i % 2 == 0 => stripe,
            Some(_) => BASE_COLOR,
            None => UNCOLORED,
        };

        let a = center + target.radius * Vec2::new(theta1.cos(), theta1.sin());
        let b = center + target.radius * Vec2::new(theta2.cos(), theta2.sin());

        // Edge, edge, center
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
        vertices.push(Vertex::new(center.x, center.y, color));
    }

    vertices
}

/// Triangles for every active target, rebuilt from scratch
pub fn tessellate(field: &TargetField) -> Vec<Vertex> {
    field
        .targets
        .iter()
        .filter(|t| t.active)
        .flat_map(|t| target_wedges(t, TRIANGLES_PER_TARGET, field.spin_offset))
        .collect()
}

/// Buffer layout matching what `tessellate` emits for this field
pub fn layout_for(field: &TargetField) -> VertexLayout {
    if field.features.colored {
        VertexLayout::PositionColor
    } else {
        VertexLayout::Position
    }
}

/// Triangles the renderer should draw for this field
pub fn triangle_count(field: &TargetField) -> u32 {
    field.active_count() as u32 * TRIANGLES_PER_TARGET
}

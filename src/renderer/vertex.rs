//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Homogeneous position plus RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {
    /// A point on the z = 0 plane
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, 0.0, 1.0],
            color,
        }
    }
}

/// Layout of the flat float buffer handed to the renderer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VertexLayout {
    /// 4 floats: x, y, z, w
    Position,
    /// 4 floats position followed by 4 floats RGBA
    PositionColor,
}

impl VertexLayout {
    pub const fn floats_per_vertex(&self) -> usize {
        match self {
            VertexLayout::Position => 4,
            VertexLayout::PositionColor => 8,
        }
    }

    pub const fn stride_bytes(&self) -> usize {
        self.floats_per_vertex() * std::mem::size_of::<f32>()
    }

    pub fn desc(&self) -> wgpu::VertexBufferLayout<'static> {
        const POSITION: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x4,
        }];
        const POSITION_COLOR: [wgpu::VertexAttribute; 2] = [
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: self.stride_bytes() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: match self {
                VertexLayout::Position => &POSITION,
                VertexLayout::PositionColor => &POSITION_COLOR,
            },
        }
    }
}

/// Flatten vertices into the float records `layout` describes
pub fn flatten(vertices: &[Vertex], layout: VertexLayout) -> Vec<f32> {
    match layout {
        VertexLayout::PositionColor => bytemuck::cast_slice(vertices).to_vec(),
        VertexLayout::Position => vertices.iter().flat_map(|v| v.position).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides() {
        assert_eq!(VertexLayout::Position.stride_bytes(), 16);
        assert_eq!(VertexLayout::PositionColor.stride_bytes(), 32);
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(
            VertexLayout::PositionColor.desc().array_stride,
            VertexLayout::PositionColor.stride_bytes() as u64
        );
    }

    #[test]
    fn test_attribute_offsets() {
        let plain = VertexLayout::Position.desc();
        assert_eq!(plain.attributes.len(), 1);
        assert_eq!(plain.attributes[0].offset, 0);

        let colored = VertexLayout::PositionColor.desc();
        assert_eq!(colored.attributes.len(), 2);
        assert_eq!(colored.attributes[0].offset, 0);
        assert_eq!(colored.attributes[1].offset, 16);
        assert_eq!(colored.attributes[1].shader_location, 1);
    }

    #[test]
    fn test_flatten() {
        let vertices = [
            Vertex::new(0.5, -0.5, [1.0, 0.0, 0.0, 1.0]),
            Vertex::new(0.25, 0.75, [0.0, 1.0, 0.0, 0.5]),
        ];

        let plain = flatten(&vertices, VertexLayout::Position);
        assert_eq!(plain, vec![0.5, -0.5, 0.0, 1.0, 0.25, 0.75, 0.0, 1.0]);

        let colored = flatten(&vertices, VertexLayout::PositionColor);
        assert_eq!(colored.len(), 16);
        assert_eq!(&colored[..8], &[0.5, -0.5, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(&colored[8..], &[0.25, 0.75, 0.0, 1.0, 0.0, 1.0, 0.0, 0.5]);
    }
}

//! Rendering for the target field
//!
//! The field is tessellated into a flat float buffer every frame and handed to
//! a `Renderer`. `RenderState` is the WebGPU implementation.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Vertex, VertexLayout};

use anyhow::Result;

use crate::sim::TargetField;

/// Graphics backend the field draws through
pub trait Renderer {
    /// Select how the next upload is interpreted
    fn bind_vertex_layout(&mut self, layout: VertexLayout);
    /// Replace the vertex buffer contents
    fn upload_vertices(&mut self, data: &[f32]);
    /// Clear the frame and draw `count` triangles from the buffer
    fn draw_triangles(&mut self, count: u32) -> Result<()>;
}

/// Tessellate the field, upload it and draw one frame
///
/// The buffer is rebuilt and re-uploaded on every call.
pub fn draw_field<R: Renderer + ?Sized>(field: &TargetField, renderer: &mut R) -> Result<()> {
    let layout = shapes::layout_for(field);
    let vertices = shapes::tessellate(field);

    renderer.upload_vertices(&vertex::flatten(&vertices, layout));
    renderer.bind_vertex_layout(layout);
    renderer.draw_triangles(shapes::triangle_count(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use crate::consts::TRIANGLES_PER_TARGET;
    use crate::sim::Session;

    /// Remembers what it was asked to draw
    #[derive(Default)]
    struct Recorder {
        layout: Option<VertexLayout>,
        uploads: Vec<Vec<f32>>,
        draws: Vec<u32>,
    }

    impl Renderer for Recorder {
        fn bind_vertex_layout(&mut self, layout: VertexLayout) {
            self.layout = Some(layout);
        }

        fn upload_vertices(&mut self, data: &[f32]) {
            self.uploads.push(data.to_vec());
        }

        fn draw_triangles(&mut self, count: u32) -> Result<()> {
            self.draws.push(count);
            Ok(())
        }
    }

    #[test]
    fn test_buffer_matches_draw_count() {
        for variant in Variant::ALL {
            let session = Session::new(variant.features(), 21);
            let mut recorder = Recorder::default();
            draw_field(&session.field, &mut recorder).unwrap();

            let layout = recorder.layout.unwrap();
            let triangles = recorder.draws[0];
            assert_eq!(triangles, session.field.active_count() as u32 * TRIANGLES_PER_TARGET);
            assert_eq!(
                recorder.uploads[0].len(),
                triangles as usize * 3 * layout.floats_per_vertex()
            );
        }
    }

    #[test]
    fn test_every_frame_reuploads() {
        let mut session = Session::new(Variant::Clickable.features(), 1);
        let mut recorder = Recorder::default();

        draw_field(&session.field, &mut recorder).unwrap();
        draw_field(&session.field, &mut recorder).unwrap();
        assert_eq!(recorder.uploads.len(), 2);
        assert_eq!(recorder.uploads[0], recorder.uploads[1]);

        session.field.targets[0].active = false;
        session.field.targets_remaining -= 1;
        draw_field(&session.field, &mut recorder).unwrap();
        assert_eq!(recorder.draws, vec![80, 80, 60]);
        assert_eq!(recorder.layout, Some(VertexLayout::Position));
    }

    #[test]
    fn test_cleared_field_draws_nothing() {
        let mut session = Session::new(Variant::Scored.features(), 1);
        session.field.targets.iter_mut().for_each(|t| t.active = false);

        let mut recorder = Recorder::default();
        draw_field(&session.field, &mut recorder).unwrap();
        assert_eq!(recorder.draws, vec![0]);
        assert!(recorder.uploads[0].is_empty());
        assert_eq!(recorder.layout, Some(VertexLayout::PositionColor));
    }
}

//! Lyon-based vector drawing.
//!
//! CPU-side tessellation of the stroke, the center dot and the guide circle
//! into a flat triangle-list vertex buffer that JavaScript draws directly.
//!
//! # Usage
//!
//! ```ignore
//! // In your Game::render():
//! ctx.vectors.stroke_polyline(&path_points, 2.0, VectorColor::LIME);
//! ctx.vectors.fill_circle(center, 5.0, VectorColor::RED);
//! ctx.vectors.stroke_dashed_circle(center, mean_radius, 6.0, 6.0, 2.0, VectorColor::GUIDE_GRAY);
//! ```

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor, LineCap,
    LineJoin, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// CSS `lime`.
    pub const LIME: Self = Self::rgb(0.0, 1.0, 0.0);
    /// CSS `#bbb`.
    pub const GUIDE_GRAY: Self = Self::rgb(0.733_333_3, 0.733_333_3, 0.733_333_3);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Arc length between samples when flattening a dash.
const DASH_SAMPLE_STEP: f32 = 2.0;
/// Upper bound on dashes per circle.
const MAX_DASHES: usize = 4096;
/// Upper bound on samples per dash.
const MAX_DASH_SAMPLES: usize = 256;

/// State for vector rendering.
///
/// Holds lyon tessellators and the output vertex buffer.
/// Cleared and repopulated on every redraw. The buffer starts at the given
/// vertex capacity and grows past it, so JavaScript must re-read the pointer
/// after every redraw.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    pub fn new(initial_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(initial_vertices * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each redraw.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        self.buffer
            .reserve(self.geometry.indices.len() * VectorVertex::FLOATS);
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate and fill a circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }

    /// Tessellate an open polyline with round joins and caps.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false);
        let path = builder.build();

        let options = StrokeOptions::tolerance(0.5)
            .with_line_width(width)
            .with_line_join(LineJoin::Round)
            .with_line_cap(LineCap::Round);
        let result = self.stroke_tess.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }

    /// Stroke a circle as alternating dashes and gaps measured along the circumference.
    pub fn stroke_dashed_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        dash: f32,
        gap: f32,
        width: f32,
        color: VectorColor,
    ) {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(radius) || !valid(dash) || !(gap.is_finite() && gap >= 0.0) {
            return;
        }

        let circumference = TAU * radius;
        let period = dash + gap;
        let dashes = ((circumference / period).ceil() as usize).min(MAX_DASHES);
        let mut dash_points = Vec::new();
        for k in 0..dashes {
            let start = k as f32 * period;
            if start >= circumference {
                break;
            }
            let end = (start + dash).min(circumference);
            let samples = ((end - start) / DASH_SAMPLE_STEP)
                .ceil()
                .clamp(1.0, MAX_DASH_SAMPLES as f32) as usize;

            dash_points.clear();
            for i in 0..=samples {
                let s = start + (end - start) * i as f32 / samples as f32;
                let angle = s / radius;
                dash_points.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
            }
            self.stroke_polyline(&dash_points, width, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::FLOATS, 6);
    }

    #[test]
    fn named_colors() {
        assert_eq!(VectorColor::LIME, VectorColor::rgb(0.0, 1.0, 0.0));
        assert!((VectorColor::GUIDE_GRAY.r - 187.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn fill_circle_produces_vertices() {
        let mut state = VectorState::new(4096);
        state.fill_circle(Vec2::new(50.0, 50.0), 5.0, VectorColor::RED);
        assert!(state.vertex_count() > 0);
        assert_eq!(state.vertex_count() % 3, 0);
    }

    #[test]
    fn stroke_polyline_produces_vertices() {
        let mut state = VectorState::new(4096);
        let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)];
        state.stroke_polyline(&points, 2.0, VectorColor::LIME);
        assert!(state.vertex_count() > 0);
    }

    #[test]
    fn single_point_polyline_draws_nothing() {
        let mut state = VectorState::new(4096);
        state.stroke_polyline(&[Vec2::ONE], 2.0, VectorColor::LIME);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn dashed_circle_draws_more_than_one_dash() {
        let mut one_dash = VectorState::new(1 << 16);
        one_dash.stroke_polyline(
            &[Vec2::new(100.0, 0.0), Vec2::new(100.0, 6.0)],
            2.0,
            VectorColor::GUIDE_GRAY,
        );

        let mut state = VectorState::new(1 << 16);
        state.stroke_dashed_circle(Vec2::ZERO, 100.0, 6.0, 6.0, 2.0, VectorColor::GUIDE_GRAY);
        assert!(state.vertex_count() > one_dash.vertex_count() * 10);
    }

    #[test]
    fn degenerate_circles_draw_nothing() {
        let mut state = VectorState::new(4096);
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::RED);
        state.stroke_dashed_circle(Vec2::ZERO, -1.0, 6.0, 6.0, 2.0, VectorColor::WHITE);
        state.stroke_dashed_circle(Vec2::ZERO, 10.0, 0.0, 6.0, 2.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn long_strokes_grow_past_initial_capacity() {
        let mut state = VectorState::new(64);
        let points: Vec<Vec2> = (0..8000)
            .map(|k| {
                let a = k as f32 * 0.01;
                Vec2::new(300.0 + 200.0 * a.cos(), 300.0 + 200.0 * a.sin())
            })
            .collect();
        state.stroke_polyline(&points, 2.0, VectorColor::LIME);
        assert!(state.vertex_count() > 8000);
        assert_eq!(state.vertex_count() % 3, 0);

        state.fill_circle(Vec2::new(300.0, 300.0), 5.0, VectorColor::RED);
        let before_dot = state.vertex_count();
        state.fill_circle(Vec2::new(300.0, 300.0), 5.0, VectorColor::RED);
        assert!(state.vertex_count() > before_dot);
    }

    #[test]
    fn dash_count_is_bounded() {
        let mut state = VectorState::new(16);
        state.stroke_dashed_circle(Vec2::ZERO, 1.0e6, 6.0, 6.0, 2.0, VectorColor::GUIDE_GRAY);
        assert_eq!(state.vertex_count() % 3, 0);

        let mut state = VectorState::new(16);
        state.stroke_dashed_circle(Vec2::ZERO, f32::INFINITY, 6.0, 6.0, 2.0, VectorColor::WHITE);
        state.stroke_dashed_circle(Vec2::ZERO, 10.0, 6.0, f32::NAN, 2.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut state = VectorState::new(4096);
        state.fill_circle(Vec2::ZERO, 10.0, VectorColor::RED);
        assert!(state.vertex_count() > 0);
        state.clear();
        assert_eq!(state.vertex_count(), 0);
    }
}

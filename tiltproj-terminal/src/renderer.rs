/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Point3};
use std::io::Write;
use tiltproj_core::{Camera, Mesh, Triangle};

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Dimmest ramp entry used for surfaces, so faces seen edge-on stay visible
const MIN_SURFACE_SHADE: usize = 2;

/// Lines are pulled towards the camera so they win against the surface they lie on
const LINE_DEPTH_BIAS: f32 = 0.05;

pub const GROUND_CHAR: char = ',';
pub const HELPER_CHAR: char = 'o';

/// ASCII renderer that converts 3D meshes to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
    }

    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, model_matrix: &Matrix4<f32>, camera: &Camera) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model_matrix, camera);
        }
    }

    fn render_triangle(&mut self, triangle: &Triangle, model_matrix: &Matrix4<f32>, camera: &Camera) {
        // Project vertices to screen space
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (coord, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            match camera.project_to_screen(
                &vertex.position,
                model_matrix,
                self.width as u32,
                self.height as u32,
            ) {
                Some(projected) => *coord = projected,
                None => return, // Triangle is behind the camera
            }
        }

        // Flat shapes are seen from both sides, so shade by |n·l|
        let normal = model_matrix.transform_vector(&triangle.vertices[0].normal);
        let light_dir = (camera.position - camera.target).normalize();
        let brightness = normal.normalize().dot(&light_dir).abs();

        // Map brightness to character
        let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
        let char_index = char_index.clamp(MIN_SURFACE_SHADE, LUMINOSITY_RAMP.len() - 1);
        let character = LUMINOSITY_RAMP[char_index];

        // Rasterize triangle using scanline algorithm
        self.rasterize_triangle(&screen_coords, character);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], character: char) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates, accepting either winding
                if let Some((w0, w1, w2)) = barycentric(
                    (v0.0, v0.1),
                    (v1.0, v1.1),
                    (v2.0, v2.1),
                    (px, py),
                ) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                        self.plot(x, y, depth, character);
                    }
                }
            }
        }
    }

    /// Draw a depth-tested world-space segment
    pub fn render_segment(
        &mut self,
        start: &Point3<f32>,
        end: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        camera: &Camera,
        character: char,
    ) {
        let (width, height) = (self.width as u32, self.height as u32);
        let (Some(a), Some(b)) = (
            camera.project_to_screen(start, model_matrix, width, height),
            camera.project_to_screen(end, model_matrix, width, height),
        ) else {
            return;
        };

        // One sample per cell along the longer screen axis
        let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil().max(1.0) as usize;
        if steps > 4 * (self.width + self.height) {
            return; // Degenerate projection far outside the viewport
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = a.0 + (b.0 - a.0) * t;
            let y = a.1 + (b.1 - a.1) * t;
            let depth = a.2 + (b.2 - a.2) * t - LINE_DEPTH_BIAS;
            self.plot(x.floor() as i32, y.floor() as i32, depth, character);
        }
    }

    fn plot(&mut self, x: i32, y: i32, depth: f32, character: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = character;
        }
    }

    /// Write the buffer to the terminal starting at row `top`
    pub fn draw<W: Write>(&self, writer: &mut W, top: u16) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, top + y as u16))?;
            for x in 0..self.width {
                let c = self.char_at(x, y);

                // Color based on character intensity
                let color = match c {
                    GROUND_CHAR => Color::DarkGreen,
                    HELPER_CHAR => Color::Red,
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiltproj_core::{ShapeKind, ShapeParams, Transform};

    #[test]
    fn test_barycentric_inside_and_degenerate() {
        let inside = barycentric((0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0)).unwrap();
        assert!(inside.0 >= 0.0 && inside.1 >= 0.0 && inside.2 >= 0.0);
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 0.0)).is_none());
    }

    #[test]
    fn test_rasterize_and_clear() {
        let mut renderer = AsciiRenderer::new(10, 10);
        renderer.rasterize_triangle(&[(0.0, 0.0, 1.0), (9.0, 0.0, 1.0), (0.0, 9.0, 1.0)], '#');
        assert_eq!(renderer.char_at(1, 1), '#');
        assert_eq!(renderer.char_at(9, 9), ' ');

        renderer.clear();
        assert_eq!(renderer.char_at(1, 1), ' ');
    }

    #[test]
    fn test_nearer_surface_wins() {
        let mut renderer = AsciiRenderer::new(4, 4);
        renderer.plot(1, 1, 5.0, '-');
        renderer.plot(1, 1, 2.0, '@');
        renderer.plot(1, 1, 3.0, '.');
        assert_eq!(renderer.char_at(1, 1), '@');
        renderer.plot(-1, 7, 0.0, '@');
    }

    #[test]
    fn test_scene_draws_shape_and_segment() {
        let camera = Camera::for_terminal(80, 24);
        let mut renderer = AsciiRenderer::new(80, 24);
        let model = Transform::tilt_matrix(30.0, 0.01);
        let mesh = Mesh::for_shape(ShapeKind::Rectangle, &ShapeParams::default());
        renderer.render_mesh(&mesh, &model, &camera);
        let shaded = renderer.char_buffer.iter().filter(|&&c| c != ' ').count();
        assert!(shaded > 0);

        renderer.render_segment(
            &Point3::new(-5.0, 0.0, 0.0),
            &Point3::new(5.0, 0.0, 0.0),
            &Matrix4::identity(),
            &camera,
            HELPER_CHAR,
        );
        assert!(renderer.char_buffer.contains(&HELPER_CHAR));
    }
}

/// Camera used to draw the tilt scene
use nalgebra::{Matrix4, Point3, Vector3};

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
        }
    }
}

/// Camera configuration for 3D rendering
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    /// Oblique view of the ground plane from above and in front of the hinge
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(14.0, 11.0, 18.0),
            target: Point3::new(0.0, 2.0, 3.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: width as f32 / height.max(1) as f32,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
        }
    }

    /// Terminal cells are roughly twice as tall as they are wide
    pub fn for_terminal(columns: u16, rows: u16) -> Self {
        let mut camera = Self::new(columns as u32, rows as u32);
        camera.aspect /= 2.0;
        camera
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                // Match the perspective framing at the target distance
                let distance = (self.position - self.target).norm();
                let height = 2.0 * distance * (self.fov / 2.0).tan();
                let width = height * self.aspect;
                Matrix4::new_orthographic(
                    -width / 2.0,
                    width / 2.0,
                    -height / 2.0,
                    height / 2.0,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// Points outside the view volume are kept so lines and triangles that
    /// cross the border can be clipped by the rasterizer; `None` only for
    /// points behind the camera.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        model_matrix: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let view = self.view_matrix();
        let eye = (view * model_matrix).transform_point(point);
        if eye.z > -self.near {
            return None;
        }

        // transform_point performs the perspective divide
        let ndc = self.projection_matrix().transform_point(&eye);
        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y, -eye.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert_eq!(camera.mode, ProjectionMode::Perspective);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_projects_to_center() {
        for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
            let mut camera = Camera::new(800, 600);
            camera.mode = mode;
            let (x, y, depth) = camera
                .project_to_screen(&camera.target, &Matrix4::identity(), 800, 600)
                .unwrap();
            assert!((x - 400.0).abs() < 1e-2);
            assert!((y - 300.0).abs() < 1e-2);
            assert!(depth > 0.0);
        }
    }

    #[test]
    fn test_points_behind_camera_are_dropped() {
        let camera = Camera::default();
        let behind = camera.position + (camera.position - camera.target);
        assert!(camera
            .project_to_screen(&behind, &Matrix4::identity(), 800, 600)
            .is_none());
    }

    #[test]
    fn test_toggle_mode() {
        assert_eq!(
            ProjectionMode::Perspective.toggled(),
            ProjectionMode::Orthographic
        );
    }
}

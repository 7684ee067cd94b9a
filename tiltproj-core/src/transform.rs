/// Tilt transform: rotate about the hinge axis, then lift by the float height
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

use crate::angle::to_radians;

/// Transform builder for the tilted shape group.
///
/// The hinge is the x-axis. Tilting by θ raises points on +z and lowers
/// points on -z, so a flat shape lying along +z lifts its far edge.
pub struct Transform;

impl Transform {
    pub fn tilt_rotation(angle_degrees: f64) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), -to_radians(angle_degrees))
    }

    /// Position of a model-space point after tilting and lifting
    pub fn tilt_point(point: &Point3<f64>, angle_degrees: f64, float_height: f64) -> Point3<f64> {
        Self::tilt_rotation(angle_degrees) * point + Vector3::new(0.0, float_height, 0.0)
    }

    /// Model matrix for the renderer
    pub fn tilt_matrix(angle_degrees: f64, float_height: f64) -> Matrix4<f32> {
        let rotation = Matrix4::new_rotation(Vector3::new(-to_radians(angle_degrees) as f32, 0.0, 0.0));
        Self::translation_matrix(0.0, float_height as f32, 0.0) * rotation
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_tilt() {
        let matrix = Transform::tilt_matrix(0.0, 0.0);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_far_edge_rises() {
        let tip = Transform::tilt_point(&Point3::new(0.0, 0.0, 4.0), 30.0, 1.0);
        assert_relative_eq!(tip.y, 1.0 + 4.0 * 0.5, epsilon = 1e-12);
        assert_relative_eq!(tip.z, 4.0 * 3f64.sqrt() / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_back_edge_drops_by_floor_height() {
        // A solid snapped to the floor keeps its lowest base edge on y = 0
        let radius = 3.0;
        let height = radius * to_radians(30.0).sin();
        let edge = Transform::tilt_point(&Point3::new(0.0, 0.0, -radius), 30.0, height);
        assert_relative_eq!(edge.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_matches_point_transform() {
        let matrix = Transform::tilt_matrix(45.0, 2.0);
        let moved = matrix.transform_point(&Point3::new(1.0f32, 0.0, 2.0));
        let expected = Transform::tilt_point(&Point3::new(1.0, 0.0, 2.0), 45.0, 2.0);
        assert!((moved.x - expected.x as f32).abs() < 1e-5);
        assert!((moved.y - expected.y as f32).abs() < 1e-5);
        assert!((moved.z - expected.z as f32).abs() < 1e-5);
    }
}

/// Construction lines showing how a tilted flat shape projects onto the ground
use nalgebra::Point3;

use crate::error::TiltResult;
use crate::shape::{validate_angle, ShapeKind, ShapeParams};
use crate::transform::Transform;

/// Segments in the angle arc between the ground and the tilted shape
pub const ARC_SEGMENTS: usize = 24;

pub type Segment = (Point3<f64>, Point3<f64>);

/// Extent of a flat shape along the tilt direction: diameter for a circle,
/// length for a line, height for rectangles and triangles
pub fn helper_length(kind: ShapeKind, params: &ShapeParams) -> Option<f64> {
    match kind {
        ShapeKind::Line => Some(params.length),
        ShapeKind::Circle => Some(params.radius * 2.0),
        ShapeKind::Rectangle | ShapeKind::Triangle => Some(params.height),
        ShapeKind::Cylinder | ShapeKind::Box | ShapeKind::Cone | ShapeKind::Pyramid => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HelperLines {
    /// Shadow of the shape's extent on the ground
    pub footprint: Segment,
    /// From the hinge straight down to the ground
    pub hinge_drop: Segment,
    /// From the raised far edge straight down to the ground
    pub tip_drop: Segment,
    /// Right-angle tick where `tip_drop` meets the ground
    pub right_angle: [Segment; 2],
    /// Arc marking θ at the hinge
    pub angle_arc: Vec<Point3<f64>>,
}

impl HelperLines {
    /// Helper lines for a flat shape, `None` for solids
    pub fn new(
        kind: ShapeKind,
        params: &ShapeParams,
        angle_degrees: f64,
        float_height: f64,
    ) -> TiltResult<Option<Self>> {
        validate_angle(angle_degrees)?;
        params.validate_for(kind)?;
        let Some(length) = helper_length(kind, params) else {
            return Ok(None);
        };

        let hinge = Point3::new(0.0, float_height, 0.0);
        let tip = Transform::tilt_point(&Point3::new(0.0, 0.0, length), angle_degrees, float_height);
        let foot = Point3::new(0.0, 0.0, tip.z);
        let tick = (length / 4.0).min(0.5);

        Ok(Some(Self {
            footprint: (Point3::origin(), foot),
            hinge_drop: (hinge, Point3::origin()),
            tip_drop: (tip, foot),
            right_angle: [
                (
                    Point3::new(0.0, tick, foot.z),
                    Point3::new(0.0, tick, foot.z - tick),
                ),
                (
                    Point3::new(0.0, tick, foot.z - tick),
                    Point3::new(0.0, 0.0, foot.z - tick),
                ),
            ],
            angle_arc: angle_arc((length / 3.0).min(2.0), angle_degrees, float_height),
        }))
    }

    /// Every straight segment, for renderers that only draw lines
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = vec![self.footprint, self.hinge_drop, self.tip_drop];
        segments.extend_from_slice(&self.right_angle);
        segments.extend(self.angle_arc.windows(2).map(|pair| (pair[0], pair[1])));
        segments
    }
}

/// Points from the ground direction to the tilted direction around the hinge
pub fn angle_arc(radius: f64, angle_degrees: f64, float_height: f64) -> Vec<Point3<f64>> {
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let step = angle_degrees * i as f64 / ARC_SEGMENTS as f64;
            Transform::tilt_point(&Point3::new(0.0, 0.0, radius), step, float_height)
        })
        .collect()
}

/// Square grid on the ground plane centred under the hinge
pub fn ground_grid(half_extent: f64, spacing: f64) -> Vec<Segment> {
    let steps = (half_extent / spacing).floor() as i64;
    (-steps..=steps)
        .flat_map(|i| {
            let offset = i as f64 * spacing;
            [
                (
                    Point3::new(offset, 0.0, -half_extent),
                    Point3::new(offset, 0.0, half_extent),
                ),
                (
                    Point3::new(-half_extent, 0.0, offset),
                    Point3::new(half_extent, 0.0, offset),
                ),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_helper_length() {
        let params = ShapeParams::default();
        assert_eq!(helper_length(ShapeKind::Circle, &params), Some(6.0));
        assert_eq!(helper_length(ShapeKind::Line, &params), Some(8.0));
        assert_eq!(helper_length(ShapeKind::Triangle, &params), Some(4.0));
        assert_eq!(helper_length(ShapeKind::Cone, &params), None);
    }

    #[test]
    fn test_footprint_is_projected_length() {
        let params = ShapeParams::default();
        let lines = HelperLines::new(ShapeKind::Line, &params, 60.0, 1.0)
            .unwrap()
            .unwrap();
        let (start, end) = lines.footprint;
        assert_relative_eq!((end - start).norm(), 8.0 * 0.5, epsilon = 1e-12);

        let (top, bottom) = lines.tip_drop;
        assert_relative_eq!(top.y, 1.0 + 8.0 * 3f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(bottom.y, 0.0);
        assert_relative_eq!(top.z, bottom.z);
    }

    #[test]
    fn test_solids_have_no_helpers() {
        let lines = HelperLines::new(ShapeKind::Box, &ShapeParams::default(), 30.0, 1.0).unwrap();
        assert!(lines.is_none());
    }

    #[test]
    fn test_rejects_bad_angle() {
        assert!(HelperLines::new(ShapeKind::Line, &ShapeParams::default(), 120.0, 0.0).is_err());
    }

    #[test]
    fn test_angle_arc() {
        let arc = angle_arc(2.0, 90.0, 0.5);
        assert_eq!(arc.len(), ARC_SEGMENTS + 1);
        assert_relative_eq!(arc[0].z, 2.0, epsilon = 1e-12);
        assert_relative_eq!(arc[ARC_SEGMENTS].y, 2.5, epsilon = 1e-12);
        for point in &arc {
            let offset = point - Point3::new(0.0, 0.5, 0.0);
            assert_relative_eq!(offset.norm(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_segments_include_arc() {
        let lines = HelperLines::new(ShapeKind::Circle, &ShapeParams::default(), 30.0, 0.01)
            .unwrap()
            .unwrap();
        assert_eq!(lines.segments().len(), 5 + ARC_SEGMENTS);
    }

    #[test]
    fn test_ground_grid() {
        let grid = ground_grid(4.0, 2.0);
        assert_eq!(grid.len(), 10);
        assert!(grid.iter().all(|(a, b)| a.y == 0.0 && b.y == 0.0));
    }
}

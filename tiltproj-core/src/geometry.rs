/// Meshes for every shape kind, built in the untilted model frame
use nalgebra::{Point3, Vector3};

use crate::shape::{ShapeKind, ShapeParams};

/// Segments used to approximate circles
pub const CIRCLE_SEGMENTS: usize = 24;

/// Width of the strip drawn for a line segment
const LINE_THICKNESS: f32 = 0.15;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Flat-shaded triangle with the normal taken from its winding
    pub fn from_points(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Self {
        let normal = (p1 - p0).cross(&(p2 - p0));
        let normal = normal.try_normalize(1e-12).unwrap_or_else(Vector3::y);
        let vertex = |p: Point3<f32>| Vertex {
            position: p,
            normal,
        };
        Self::new(vertex(p0), vertex(p1), vertex(p2))
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    fn add_face(&mut self, p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) {
        self.add_triangle(Triangle::from_points(p0, p1, p2));
    }

    /// Two triangles for a quad wound p0 → p1 → p2 → p3
    fn add_quad(&mut self, p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>, p3: Point3<f32>) {
        self.add_face(p0, p1, p2);
        self.add_face(p0, p2, p3);
    }

    /// Mesh for `kind`. Flat shapes lie in y = 0 hinged on the x-axis and
    /// extend along +z; solids stand on y = 0 centred on the origin.
    pub fn for_shape(kind: ShapeKind, params: &ShapeParams) -> Self {
        let length = params.length as f32;
        let radius = params.radius as f32;
        let width = params.width as f32;
        let height = params.height as f32;
        let depth = params.depth as f32;

        match kind {
            ShapeKind::Line => Self::rectangle(LINE_THICKNESS, length),
            ShapeKind::Circle => Self::disc(radius),
            ShapeKind::Rectangle => Self::rectangle(width, height),
            ShapeKind::Triangle => Self::flat_triangle(width, height),
            ShapeKind::Cylinder => Self::cylinder(radius, height),
            ShapeKind::Box => Self::cuboid(width, height, depth),
            ShapeKind::Cone => Self::cone(radius, height),
            ShapeKind::Pyramid => Self::pyramid(width, height, depth),
        }
    }

    fn rectangle(width: f32, length: f32) -> Self {
        let half = width / 2.0;
        let mut mesh = Self::with_capacity(2);
        mesh.add_quad(
            Point3::new(-half, 0.0, 0.0),
            Point3::new(-half, 0.0, length),
            Point3::new(half, 0.0, length),
            Point3::new(half, 0.0, 0.0),
        );
        mesh
    }

    /// Circle touching the hinge, centred at z = radius
    fn disc(radius: f32) -> Self {
        let center = Point3::new(0.0, 0.0, radius);
        let ring = ring(center, radius);
        let mut mesh = Self::with_capacity(CIRCLE_SEGMENTS);
        for i in 0..CIRCLE_SEGMENTS {
            mesh.add_face(center, ring[i], ring[(i + 1) % CIRCLE_SEGMENTS]);
        }
        mesh
    }

    /// Base on the hinge, apex at z = height
    fn flat_triangle(base: f32, height: f32) -> Self {
        let half = base / 2.0;
        let mut mesh = Self::with_capacity(1);
        mesh.add_face(
            Point3::new(-half, 0.0, 0.0),
            Point3::new(0.0, 0.0, height),
            Point3::new(half, 0.0, 0.0),
        );
        mesh
    }

    fn cylinder(radius: f32, height: f32) -> Self {
        let bottom_center = Point3::origin();
        let top_center = Point3::new(0.0, height, 0.0);
        let bottom = ring(bottom_center, radius);
        let top = ring(top_center, radius);

        let mut mesh = Self::with_capacity(CIRCLE_SEGMENTS * 4);
        for i in 0..CIRCLE_SEGMENTS {
            let j = (i + 1) % CIRCLE_SEGMENTS;
            mesh.add_quad(bottom[i], bottom[j], top[j], top[i]);
            mesh.add_face(top_center, top[i], top[j]);
            mesh.add_face(bottom_center, bottom[j], bottom[i]);
        }
        mesh
    }

    fn cone(radius: f32, height: f32) -> Self {
        let apex = Point3::new(0.0, height, 0.0);
        let center = Point3::origin();
        let base = ring(center, radius);

        let mut mesh = Self::with_capacity(CIRCLE_SEGMENTS * 2);
        for i in 0..CIRCLE_SEGMENTS {
            let j = (i + 1) % CIRCLE_SEGMENTS;
            mesh.add_face(base[i], base[j], apex);
            mesh.add_face(center, base[j], base[i]);
        }
        mesh
    }

    /// Box with its base on y = 0
    fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hx, hz) = (width / 2.0, depth / 2.0);
        let p = |x: f32, y: f32, z: f32| Point3::new(x, y, z);
        let mut mesh = Self::with_capacity(12);

        // Front face
        mesh.add_quad(p(-hx, 0.0, hz), p(hx, 0.0, hz), p(hx, height, hz), p(-hx, height, hz));
        // Back face
        mesh.add_quad(p(hx, 0.0, -hz), p(-hx, 0.0, -hz), p(-hx, height, -hz), p(hx, height, -hz));
        // Top face
        mesh.add_quad(p(-hx, height, hz), p(hx, height, hz), p(hx, height, -hz), p(-hx, height, -hz));
        // Bottom face
        mesh.add_quad(p(-hx, 0.0, -hz), p(hx, 0.0, -hz), p(hx, 0.0, hz), p(-hx, 0.0, hz));
        // Right face
        mesh.add_quad(p(hx, 0.0, hz), p(hx, 0.0, -hz), p(hx, height, -hz), p(hx, height, hz));
        // Left face
        mesh.add_quad(p(-hx, 0.0, -hz), p(-hx, 0.0, hz), p(-hx, height, hz), p(-hx, height, -hz));

        mesh
    }

    fn pyramid(width: f32, height: f32, depth: f32) -> Self {
        let (hx, hz) = (width / 2.0, depth / 2.0);
        let apex = Point3::new(0.0, height, 0.0);
        let corners = [
            Point3::new(-hx, 0.0, hz),
            Point3::new(hx, 0.0, hz),
            Point3::new(hx, 0.0, -hz),
            Point3::new(-hx, 0.0, -hz),
        ];

        let mut mesh = Self::with_capacity(6);
        for i in 0..4 {
            mesh.add_face(corners[i], corners[(i + 1) % 4], apex);
        }
        mesh.add_quad(corners[3], corners[2], corners[1], corners[0]);
        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Points of a horizontal circle, counter-clockwise seen from above
fn ring(center: Point3<f32>, radius: f32) -> Vec<Point3<f32>> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
            Point3::new(
                center.x + radius * angle.cos(),
                center.y,
                center.z - radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    #[test]
    fn test_triangle_counts() {
        let params = ShapeParams::default();
        assert_eq!(Mesh::for_shape(ShapeKind::Line, &params).triangles.len(), 2);
        assert_eq!(Mesh::for_shape(ShapeKind::Rectangle, &params).triangles.len(), 2);
        assert_eq!(Mesh::for_shape(ShapeKind::Triangle, &params).triangles.len(), 1);
        assert_eq!(Mesh::for_shape(ShapeKind::Box, &params).triangles.len(), 12);
        assert_eq!(Mesh::for_shape(ShapeKind::Pyramid, &params).triangles.len(), 6);
        assert_eq!(
            Mesh::for_shape(ShapeKind::Circle, &params).triangles.len(),
            CIRCLE_SEGMENTS
        );
    }

    #[test]
    fn test_box_normals_point_outward() {
        let mesh = Mesh::for_shape(ShapeKind::Box, &ShapeParams::default());
        let center = Vector3::new(0.0, 2.0, 0.0);
        for triangle in &mesh.triangles {
            let centroid = (triangle.vertices[0].position.coords
                + triangle.vertices[1].position.coords
                + triangle.vertices[2].position.coords)
                / 3.0;
            assert!(triangle.calculate_normal().dot(&(centroid - center)) > 0.0);
        }
    }

    #[test]
    fn test_round_solids_face_outward() {
        let params = ShapeParams::default();
        for kind in [ShapeKind::Cylinder, ShapeKind::Cone] {
            let mesh = Mesh::for_shape(kind, &params);
            let inside = Vector3::new(0.0, 1.0, 0.0);
            for triangle in &mesh.triangles {
                let centroid = (triangle.vertices[0].position.coords
                    + triangle.vertices[1].position.coords
                    + triangle.vertices[2].position.coords)
                    / 3.0;
                assert!(triangle.calculate_normal().dot(&(centroid - inside)) > 0.0);
            }
        }
    }

    #[test]
    fn test_flat_shapes_lie_on_the_hinge_plane() {
        for kind in [ShapeKind::Line, ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Triangle] {
            let mesh = Mesh::for_shape(kind, &ShapeParams::default());
            assert!(mesh
                .triangles
                .iter()
                .flat_map(|t| t.vertices.iter())
                .all(|v| v.position.y == 0.0 && v.position.z >= -1e-5));
        }
    }

    #[test]
    fn test_tilted_box_touches_floor_when_snapped() {
        let params = ShapeParams::default();
        let height = crate::projection::floor_contact_height(ShapeKind::Box, &params, 40.0).unwrap();
        let model = Transform::tilt_matrix(40.0, height);
        let lowest = Mesh::for_shape(ShapeKind::Box, &params)
            .triangles
            .iter()
            .flat_map(|t| t.vertices.iter())
            .map(|v| model.transform_point(&v.position).y)
            .fold(f32::INFINITY, f32::min);
        assert!(lowest.abs() < 1e-4);
    }
}

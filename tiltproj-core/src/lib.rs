/// tiltproj Core Library - Orthogonal projection of tilted shapes
///
/// This library provides the stateless engine behind the tilt viewer: exact
/// cosine values, shape measures, projected values with their derivation,
/// floor-contact heights, and the session state machine, plus the meshes,
/// helper lines and camera a renderer needs to draw the scene.

pub mod angle;
pub mod camera;
pub mod error;
pub mod exact;
pub mod geometry;
pub mod helpers;
pub mod metrics;
pub mod parse;
pub mod projection;
pub mod session;
pub mod shape;
pub mod transform;

// Re-export commonly used types
pub use angle::{cosine_info, to_radians, CosineInfo, Radical};
pub use camera::{Camera, ProjectionMode};
pub use error::{TiltError, TiltResult};
pub use exact::ExactValue;
pub use geometry::{Mesh, Triangle, Vertex};
pub use helpers::HelperLines;
pub use metrics::{base_measure, BaseMeasure, Quantity};
pub use parse::parse_shape;
pub use projection::{floor_contact_height, project, ProjectionResult};
pub use session::{SessionEvent, SessionState, SnapMode, TiltState};
pub use shape::{Dimension, Family, ShapeKind, ShapeParams};
pub use transform::Transform;

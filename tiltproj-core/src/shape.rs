/// Shape kinds and their dimensions
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{TiltError, TiltResult};

/// Whether a shape lies in a plane or encloses a volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Flat,
    Solid,
}

/// The shape currently placed above the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Rectangle,
    Triangle,
    Cylinder,
    Box,
    Cone,
    Pyramid,
}

impl ShapeKind {
    /// Every kind, in shape-selector order
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Cylinder,
        ShapeKind::Box,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
    ];

    pub fn family(self) -> Family {
        match self {
            ShapeKind::Line | ShapeKind::Circle | ShapeKind::Rectangle | ShapeKind::Triangle => {
                Family::Flat
            }
            ShapeKind::Cylinder | ShapeKind::Box | ShapeKind::Cone | ShapeKind::Pyramid => {
                Family::Solid
            }
        }
    }

    pub fn is_solid(self) -> bool {
        self.family() == Family::Solid
    }

    /// Dimensions that shape this kind; the others in `ShapeParams` are ignored
    pub fn dimensions(self) -> &'static [Dimension] {
        match self {
            ShapeKind::Line => &[Dimension::Length],
            ShapeKind::Circle => &[Dimension::Radius],
            ShapeKind::Rectangle | ShapeKind::Triangle => &[Dimension::Width, Dimension::Height],
            ShapeKind::Cylinder | ShapeKind::Cone => &[Dimension::Radius, Dimension::Height],
            ShapeKind::Box | ShapeKind::Pyramid => {
                &[Dimension::Width, Dimension::Height, Dimension::Depth]
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Box => "box",
            ShapeKind::Cone => "cone",
            ShapeKind::Pyramid => "pyramid",
        }
    }

    /// Look up a kind by name, accepting `rect` as a short form
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name == "rect" {
            return Some(ShapeKind::Rectangle);
        }
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Radius,
    Width,
    Height,
    Depth,
}

impl Dimension {
    pub fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Radius => "radius",
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Depth => "depth",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dimensions of every shape kind, kept side by side so switching kinds
/// preserves what the user set for the others
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub length: f64,
    pub radius: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl ShapeParams {
    /// Range the dimension controls are limited to
    pub const UI_RANGE: RangeInclusive<f64> = 1.0..=15.0;

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Length => self.length,
            Dimension::Radius => self.radius,
            Dimension::Width => self.width,
            Dimension::Height => self.height,
            Dimension::Depth => self.depth,
        }
    }

    /// Set one dimension, rejecting values that are not finite and positive
    pub fn set(&mut self, dimension: Dimension, value: f64) -> TiltResult<()> {
        check_positive(dimension.name(), value)?;
        match dimension {
            Dimension::Length => self.length = value,
            Dimension::Radius => self.radius = value,
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
            Dimension::Depth => self.depth = value,
        }
        Ok(())
    }

    /// Validate the dimensions `kind` depends on
    pub fn validate_for(&self, kind: ShapeKind) -> TiltResult<()> {
        for &dimension in kind.dimensions() {
            check_positive(dimension.name(), self.get(dimension))?;
        }
        Ok(())
    }
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            length: 8.0,
            radius: 3.0,
            width: 6.0,
            height: 4.0,
            depth: 4.0,
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> TiltResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TiltError::InvalidDimension { name, value })
    }
}

/// Reject tilt angles outside `[0, 90]` degrees
pub fn validate_angle(angle_degrees: f64) -> TiltResult<()> {
    if angle_degrees.is_finite() && (0.0..=90.0).contains(&angle_degrees) {
        Ok(())
    } else {
        Err(TiltError::InvalidDimension {
            name: "angle",
            value: angle_degrees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families() {
        assert_eq!(ShapeKind::Circle.family(), Family::Flat);
        assert_eq!(ShapeKind::Pyramid.family(), Family::Solid);
        assert_eq!(
            ShapeKind::ALL.iter().filter(|kind| kind.is_solid()).count(),
            4
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ShapeKind::from_name("rect"), Some(ShapeKind::Rectangle));
        assert_eq!(ShapeKind::from_name("Cone"), Some(ShapeKind::Cone));
        assert_eq!(ShapeKind::from_name("sphere"), None);
    }

    #[test]
    fn test_validate_only_relevant_dimensions() {
        let params = ShapeParams {
            depth: 0.0,
            ..ShapeParams::default()
        };
        assert!(params.validate_for(ShapeKind::Circle).is_ok());
        assert_eq!(
            params.validate_for(ShapeKind::Box),
            Err(TiltError::InvalidDimension {
                name: "depth",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_set_rejects_non_positive() {
        let mut params = ShapeParams::default();
        assert!(params.set(Dimension::Radius, -1.0).is_err());
        assert!(params.set(Dimension::Radius, f64::NAN).is_err());
        assert_eq!(params.radius, 3.0);
        params.set(Dimension::Radius, 5.0).unwrap();
        assert_eq!(params.get(Dimension::Radius), 5.0);
    }

    #[test]
    fn test_validate_angle() {
        assert!(validate_angle(0.0).is_ok());
        assert!(validate_angle(90.0).is_ok());
        assert!(validate_angle(90.5).is_err());
        assert!(validate_angle(-1.0).is_err());
    }
}

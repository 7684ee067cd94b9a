/// Intrinsic length or area of flat shapes
use std::fmt;

use crate::error::{TiltError, TiltResult};
use crate::exact::format_number;
use crate::shape::{ShapeKind, ShapeParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Area,
}

impl Quantity {
    pub fn symbol(self) -> char {
        match self {
            Quantity::Length => 'l',
            Quantity::Area => 'S',
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Length => f.write_str("length"),
            Quantity::Area => f.write_str("area"),
        }
    }
}

/// Measure of a flat shape before tilting. For a circle `value` is the
/// coefficient of π; π stays symbolic.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMeasure {
    pub value: f64,
    pub label: String,
    pub symbol: char,
    pub uses_pi: bool,
    pub quantity: Quantity,
}

impl BaseMeasure {
    fn new(value: f64, quantity: Quantity, uses_pi: bool) -> Self {
        let label = if uses_pi {
            format!("{}π", format_number(value))
        } else {
            format_number(value)
        };
        Self {
            value,
            label,
            symbol: quantity.symbol(),
            uses_pi,
            quantity,
        }
    }

    /// Value with π multiplied in
    pub fn numeric(&self) -> f64 {
        if self.uses_pi {
            self.value * std::f64::consts::PI
        } else {
            self.value
        }
    }
}

pub fn base_measure(kind: ShapeKind, params: &ShapeParams) -> TiltResult<BaseMeasure> {
    if kind.is_solid() {
        return Err(TiltError::UnsupportedShapeForProjection(kind));
    }
    params.validate_for(kind)?;

    let measure = match kind {
        ShapeKind::Line => BaseMeasure::new(params.length, Quantity::Length, false),
        ShapeKind::Circle => BaseMeasure::new(params.radius.powi(2), Quantity::Area, true),
        ShapeKind::Rectangle => BaseMeasure::new(params.width * params.height, Quantity::Area, false),
        ShapeKind::Triangle => {
            BaseMeasure::new(params.width * params.height / 2.0, Quantity::Area, false)
        }
        ShapeKind::Cylinder | ShapeKind::Box | ShapeKind::Cone | ShapeKind::Pyramid => {
            unreachable!("solids are rejected above")
        }
    };
    Ok(measure)
}

/// Exact values of the form `coefficient · radical · π`
use std::fmt;

use crate::angle::Radical;

const EPSILON: f64 = 1e-9;

/// Format a number the way it is written on paper: integers without a
/// decimal point, other values with at most four decimals
pub fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < EPSILON {
        // `+ 0.0` folds negative zero
        return format!("{}", value.round() + 0.0);
    }
    let text = format!("{:.4}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactValue {
    pub coefficient: f64,
    pub radical: Option<Radical>,
    pub pi: bool,
}

impl ExactValue {
    pub fn new(coefficient: f64, radical: Option<Radical>, pi: bool) -> Self {
        Self {
            coefficient,
            radical,
            pi,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.abs() < EPSILON
    }

    /// Numeric value with the radical and π multiplied in
    pub fn to_f64(&self) -> f64 {
        let radical = self.radical.map_or(1.0, Radical::value);
        let pi = if self.pi { std::f64::consts::PI } else { 1.0 };
        self.coefficient * radical * pi
    }
}

impl fmt::Display for ExactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        // 1·√3 is written √3, but a bare 1 keeps its digit
        let unit_coefficient = (self.coefficient - 1.0).abs() < EPSILON;
        if !(unit_coefficient && self.radical.is_some()) {
            f.write_str(&format_number(self.coefficient))?;
        }
        if let Some(radical) = self.radical {
            write!(f, "{}", radical)?;
        }
        if self.pi {
            f.write_str("π")?;
        }
        Ok(())
    }
}

/// Degree/radian conversion and exact cosine values
use std::fmt;

const SPECIAL_ANGLE_TOLERANCE: f64 = 1e-9;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Square root factor of an exact cosine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radical {
    Sqrt2,
    Sqrt3,
}

impl Radical {
    pub fn value(self) -> f64 {
        match self {
            Radical::Sqrt2 => std::f64::consts::SQRT_2,
            Radical::Sqrt3 => 3f64.sqrt(),
        }
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radical::Sqrt2 => f.write_str("√2"),
            Radical::Sqrt3 => f.write_str("√3"),
        }
    }
}

/// Cosine of a tilt angle, split into a rational coefficient and an optional
/// radical so that `cos = coefficient · radical`
#[derive(Debug, Clone, PartialEq)]
pub struct CosineInfo {
    /// True cosine to three decimals
    pub decimal_text: String,
    /// Exact form for special angles, the decimal form otherwise
    pub exact_text: String,
    pub coefficient: f64,
    pub radical: Option<Radical>,
}

impl CosineInfo {
    /// `"√3"`, `"√2"` or empty
    pub fn irrational_suffix(&self) -> String {
        self.radical.map(|r| r.to_string()).unwrap_or_default()
    }

    pub fn is_exact(&self) -> bool {
        self.exact_text != self.decimal_text
    }
}

pub fn cosine_info(degrees: f64) -> CosineInfo {
    let decimal = to_radians(degrees).cos();
    let decimal_text = format!("{:.3}", decimal);

    let exact = if (degrees - degrees.round()).abs() < SPECIAL_ANGLE_TOLERANCE {
        match degrees.round() as i64 {
            0 => Some((1.0, "1", None)),
            30 => Some((0.5, "√3/2", Some(Radical::Sqrt3))),
            45 => Some((0.5, "√2/2", Some(Radical::Sqrt2))),
            60 => Some((0.5, "1/2", None)),
            90 => Some((0.0, "0", None)),
            _ => None,
        }
    } else {
        None
    };

    match exact {
        Some((coefficient, exact_text, radical)) => CosineInfo {
            decimal_text,
            exact_text: exact_text.to_string(),
            coefficient,
            radical,
        },
        None => CosineInfo {
            exact_text: decimal_text.clone(),
            decimal_text,
            coefficient: decimal,
            radical: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_radians() {
        assert_relative_eq!(to_radians(180.0), std::f64::consts::PI);
        assert_relative_eq!(to_radians(45.0), std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn test_special_angles() {
        let cos30 = cosine_info(30.0);
        assert_eq!(cos30.exact_text, "√3/2");
        assert_eq!(cos30.decimal_text, "0.866");
        assert_eq!(cos30.coefficient, 0.5);
        assert_eq!(cos30.irrational_suffix(), "√3");

        let cos60 = cosine_info(60.0);
        assert_eq!(cos60.exact_text, "1/2");
        assert_eq!(cos60.irrational_suffix(), "");

        assert_eq!(cosine_info(0.0).coefficient, 1.0);
        assert_eq!(cosine_info(90.0).coefficient, 0.0);
        assert_eq!(cosine_info(90.0).exact_text, "0");
    }

    #[test]
    fn test_exact_parts_multiply_to_cosine() {
        for degrees in [0.0, 30.0, 45.0, 60.0, 90.0] {
            let info = cosine_info(degrees);
            let radical = info.radical.map_or(1.0, Radical::value);
            assert_relative_eq!(
                info.coefficient * radical,
                to_radians(degrees).cos(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_other_angles_are_decimal() {
        let info = cosine_info(20.0);
        assert!(!info.is_exact());
        assert_eq!(info.exact_text, "0.940");
        assert_eq!(info.radical, None);
        assert_relative_eq!(info.coefficient, to_radians(20.0).cos());
    }
}

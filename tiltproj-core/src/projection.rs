/// Orthogonal projection of tilted shapes onto the ground plane
use tracing::instrument;

use crate::angle::{cosine_info, to_radians};
use crate::error::TiltResult;
use crate::exact::ExactValue;
use crate::metrics::{base_measure, Quantity};
use crate::shape::{validate_angle, Family, ShapeKind, ShapeParams};

/// Height a flat shape floats at when snapped; keeps it just above the ground
pub const FLAT_FLOOR_OFFSET: f64 = 0.01;

/// Everything the formula panel shows for a tilted flat shape
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub original_value_label: String,
    /// `[label × cos term, simplified exact value]`
    pub exact_derivation_steps: [String; 2],
    /// Projected value to two decimals; for a circle the coefficient of π
    pub approx_value: String,
    pub formula_text: String,
    pub symbol: char,
    pub quantity: Quantity,
    pub exact: ExactValue,
    /// Original value with π multiplied in
    pub original_numeric: f64,
    pub projected_numeric: f64,
    /// `S' = 28.27 × 0.707 = 19.99`
    pub summary_line: String,
}

#[instrument(level = "trace", skip(params))]
pub fn project(
    kind: ShapeKind,
    params: &ShapeParams,
    angle_degrees: f64,
) -> TiltResult<ProjectionResult> {
    validate_angle(angle_degrees)?;
    let base = base_measure(kind, params)?;
    let cos = cosine_info(angle_degrees);
    let true_cos = to_radians(angle_degrees).cos();

    let step1 = format!("{} × {}", base.label, cos.exact_text);
    let exact = ExactValue::new(base.value * cos.coefficient, cos.radical, base.uses_pi);

    // Rounding first keeps tiny negatives from printing as -0.00
    let rounded = (base.value * true_cos * 100.0).round() / 100.0 + 0.0;
    let pi_suffix = if base.uses_pi { "π" } else { "" };
    let approx_value = format!("{:.2}{}", rounded, pi_suffix);

    let original_numeric = base.numeric();
    let projected_numeric = original_numeric * true_cos;
    let summary_line = format!(
        "{}' = {:.2} × {} = {:.2}",
        base.symbol, original_numeric, cos.decimal_text, projected_numeric
    );

    Ok(ProjectionResult {
        original_value_label: base.label,
        exact_derivation_steps: [step1, exact.to_string()],
        approx_value,
        formula_text: format!("{0}' = {0} × cos(θ)", base.symbol),
        symbol: base.symbol,
        quantity: base.quantity,
        exact,
        original_numeric,
        projected_numeric,
        summary_line,
    })
}

/// Height that keeps the lowest point of the tilted shape on the ground.
///
/// Flat shapes hinge at ground level and sit at `FLAT_FLOOR_OFFSET`. Round
/// solids lift by `radius · sin θ`, boxes and pyramids by `depth/2 · sin θ`.
pub fn floor_contact_height(
    kind: ShapeKind,
    params: &ShapeParams,
    angle_degrees: f64,
) -> TiltResult<f64> {
    validate_angle(angle_degrees)?;
    params.validate_for(kind)?;

    let sin = to_radians(angle_degrees).sin();
    let height = match kind.family() {
        Family::Flat => FLAT_FLOOR_OFFSET,
        Family::Solid => match kind {
            ShapeKind::Cylinder | ShapeKind::Cone => params.radius * sin,
            _ => params.depth / 2.0 * sin,
        },
    };
    Ok(height)
}

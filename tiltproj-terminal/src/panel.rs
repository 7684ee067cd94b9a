/// Text shown beside the scene: shape, tilt and the projection derivation
use tiltproj_core::exact::format_number;
use tiltproj_core::{Dimension, SessionState, SnapMode};

pub fn panel_lines(session: &SessionState, active: Option<Dimension>) -> Vec<String> {
    let dimensions = session
        .kind
        .dimensions()
        .iter()
        .map(|&dimension| {
            let marker = if Some(dimension) == active { "*" } else { "" };
            format!(
                "{}{}={}",
                marker,
                dimension,
                format_number(session.params.get(dimension))
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mode = match session.tilt.mode {
        SnapMode::Snapped => "snapped",
        SnapMode::Free => "free",
    };

    let mut lines = vec![
        format!("Shape: {}  {}", session.kind, dimensions),
        format!(
            "θ = {}°  height = {:.2}  [{}]",
            format_number(session.tilt.angle_degrees),
            session.tilt.float_height,
            mode
        ),
    ];

    match session.projection() {
        Ok(Some(result)) => {
            let [step1, step2] = &result.exact_derivation_steps;
            lines.push(format!("Projection formula: {}", result.formula_text));
            lines.push(format!(
                "Original {} ({}): {}",
                result.quantity, result.symbol, result.original_value_label
            ));
            lines.push(format!(
                "{}' = {} = {} ≈ {}",
                result.symbol, step1, step2, result.approx_value
            ));
            lines.push(result.summary_line);
        }
        Ok(None) => {
            lines.push("[solid mode] height moves freely; press f to rest it on the floor".into());
        }
        Err(error) => lines.push(format!("error: {}", error)),
    }

    lines
}

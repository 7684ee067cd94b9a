/// Keyboard bindings for the terminal viewer
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tiltproj_core::ShapeKind;

/// Angle change per arrow press, in degrees
pub const ANGLE_STEP: f64 = 1.0;
/// Height change per arrow press
pub const HEIGHT_STEP: f64 = 0.1;
/// Dimension change per +/- press
pub const DIMENSION_STEP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    SelectShape(ShapeKind),
    AdjustAngle(f64),
    AdjustHeight(f64),
    SnapToFloor,
    CycleDimension,
    AdjustDimension(f64),
    ToggleProjection,
}

pub fn action_for(event: &KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let action = match event.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            Action::SelectShape(ShapeKind::ALL[index])
        }
        KeyCode::Left | KeyCode::Char('a') => Action::AdjustAngle(-ANGLE_STEP),
        KeyCode::Right | KeyCode::Char('d') => Action::AdjustAngle(ANGLE_STEP),
        KeyCode::Up | KeyCode::Char('w') => Action::AdjustHeight(HEIGHT_STEP),
        KeyCode::Down | KeyCode::Char('s') => Action::AdjustHeight(-HEIGHT_STEP),
        KeyCode::Char('f') => Action::SnapToFloor,
        KeyCode::Tab => Action::CycleDimension,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::AdjustDimension(DIMENSION_STEP),
        KeyCode::Char('-') => Action::AdjustDimension(-DIMENSION_STEP),
        KeyCode::Char('o') => Action::ToggleProjection,
        _ => return None,
    };
    Some(action)
}

pub const HELP: &str =
    "1-8 shape | ←/→ angle | ↑/↓ height | f snap | tab/+/- dimension | o ortho | q quit";

/// Session state and the snap-to-floor state machine
use tracing::{debug, instrument, warn};

use crate::error::{TiltError, TiltResult};
use crate::helpers::HelperLines;
use crate::projection::{floor_contact_height, project, ProjectionResult};
use crate::shape::{validate_angle, Dimension, ShapeKind, ShapeParams};

/// How far a dragged height may stray from the floor before the shape
/// stops following it
pub const SNAP_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapMode {
    /// Height follows the floor contact height
    Snapped,
    /// Height is whatever the user dragged it to
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltState {
    pub angle_degrees: f64,
    pub float_height: f64,
    pub mode: SnapMode,
}

impl TiltState {
    pub fn is_snapped(&self) -> bool {
        self.mode == SnapMode::Snapped
    }
}

/// Input that changes the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    ShapeChanged(ShapeKind),
    AngleChanged(f64),
    DimensionChanged(Dimension, f64),
    HeightDragged(f64),
    SnapRequested,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub kind: ShapeKind,
    pub params: ShapeParams,
    pub tilt: TiltState,
}

impl SessionState {
    /// Start snapped to the floor
    pub fn new(kind: ShapeKind, params: ShapeParams, angle_degrees: f64) -> TiltResult<Self> {
        let float_height = floor_contact_height(kind, &params, angle_degrees)?;
        Ok(Self {
            kind,
            params,
            tilt: TiltState {
                angle_degrees,
                float_height,
                mode: SnapMode::Snapped,
            },
        })
    }

    /// Floor contact height for the current shape and angle
    pub fn floor_height(&self) -> TiltResult<f64> {
        floor_contact_height(self.kind, &self.params, self.tilt.angle_degrees)
    }

    /// Apply one event. On error the session is left unchanged.
    #[instrument(level = "debug", skip(self), fields(kind = %self.kind))]
    pub fn apply(&mut self, event: SessionEvent) -> TiltResult<()> {
        let mut next = self.clone();
        let result = next.apply_in_place(event);
        match result {
            Ok(()) => *self = next,
            Err(ref error) => warn!(%error, "rejected session event"),
        }
        result
    }

    fn apply_in_place(&mut self, event: SessionEvent) -> TiltResult<()> {
        match event {
            SessionEvent::ShapeChanged(kind) => {
                self.kind = kind;
                self.resnap_if_snapped()
            }
            SessionEvent::AngleChanged(angle) => {
                validate_angle(angle)?;
                self.tilt.angle_degrees = angle;
                self.resnap_if_snapped()
            }
            SessionEvent::DimensionChanged(dimension, value) => {
                self.params.set(dimension, value)?;
                self.resnap_if_snapped()
            }
            SessionEvent::HeightDragged(height) => self.drag_height(height),
            SessionEvent::SnapRequested => {
                self.tilt.float_height = self.floor_height()?;
                if self.tilt.mode == SnapMode::Free {
                    debug!(height = self.tilt.float_height, "snapped to floor");
                }
                self.tilt.mode = SnapMode::Snapped;
                Ok(())
            }
        }
    }

    fn resnap_if_snapped(&mut self) -> TiltResult<()> {
        // Validate even when free so a bad kind/dimension combination is caught
        let floor = self.floor_height()?;
        if self.tilt.is_snapped() {
            self.tilt.float_height = floor;
        }
        Ok(())
    }

    fn drag_height(&mut self, height: f64) -> TiltResult<()> {
        if !height.is_finite() || height < 0.0 {
            return Err(TiltError::InvalidDimension {
                name: "height",
                value: height,
            });
        }
        match self.tilt.mode {
            SnapMode::Free => self.tilt.float_height = height,
            SnapMode::Snapped => {
                let floor = self.floor_height()?;
                if (height - floor).abs() > SNAP_TOLERANCE {
                    debug!(height, floor, "released from floor");
                    self.tilt.mode = SnapMode::Free;
                    self.tilt.float_height = height;
                }
            }
        }
        Ok(())
    }

    /// Formula panel contents; `None` for solids
    pub fn projection(&self) -> TiltResult<Option<ProjectionResult>> {
        if self.kind.is_solid() {
            return Ok(None);
        }
        project(self.kind, &self.params, self.tilt.angle_degrees).map(Some)
    }

    pub fn helper_lines(&self) -> TiltResult<Option<HelperLines>> {
        HelperLines::new(
            self.kind,
            &self.params,
            self.tilt.angle_degrees,
            self.tilt.float_height,
        )
    }
}

impl Default for SessionState {
    fn default() -> Self {
        let params = ShapeParams::default();
        Self {
            kind: ShapeKind::Circle,
            params,
            tilt: TiltState {
                angle_degrees: 30.0,
                float_height: crate::projection::FLAT_FLOOR_OFFSET,
                mode: SnapMode::Snapped,
            },
        }
    }
}

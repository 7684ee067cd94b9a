/// Terminal viewer for tilted shapes and their orthogonal projections
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use nalgebra::{Matrix4, Point3};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tiltproj_core::helpers::ground_grid;
use tiltproj_core::{
    Camera, Dimension, Mesh, ProjectionMode, SessionEvent, SessionState, ShapeParams, TiltError,
    Transform,
};
use tracing::{debug, info};

pub mod controls;
pub mod panel;
pub mod renderer;

pub use controls::Action;
pub use renderer::AsciiRenderer;

/// Upper end of the height control
pub const MAX_FLOAT_HEIGHT: f64 = 10.0;

/// Rows reserved at the top of the screen for the text panel
const PANEL_ROWS: u16 = 8;

pub fn invalid_input(error: TiltError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}

/// Session plus the state of the on-screen controls
pub struct Viewer {
    pub session: SessionState,
    /// Index into the current kind's dimensions
    active_dimension: usize,
    /// Position of the height control, which can differ from the float
    /// height while the shape is snapped
    height_slider: f64,
    pub projection_mode: ProjectionMode,
    pub last_error: Option<TiltError>,
}

impl Viewer {
    pub fn new(session: SessionState) -> Self {
        Self {
            height_slider: session.tilt.float_height,
            session,
            active_dimension: 0,
            projection_mode: ProjectionMode::Perspective,
            last_error: None,
        }
    }

    pub fn active_dimension(&self) -> Dimension {
        let dimensions = self.session.kind.dimensions();
        dimensions[self.active_dimension % dimensions.len()]
    }

    /// Apply an action; returns false when the viewer should close
    pub fn handle(&mut self, action: Action) -> bool {
        let event = match action {
            Action::Quit => return false,
            Action::ToggleProjection => {
                self.projection_mode = self.projection_mode.toggled();
                return true;
            }
            Action::CycleDimension => {
                self.active_dimension = (self.active_dimension + 1) % self.session.kind.dimensions().len();
                return true;
            }
            Action::SelectShape(kind) => {
                self.active_dimension = 0;
                SessionEvent::ShapeChanged(kind)
            }
            Action::AdjustAngle(delta) => {
                SessionEvent::AngleChanged((self.session.tilt.angle_degrees + delta).clamp(0.0, 90.0))
            }
            Action::AdjustHeight(delta) => {
                // Round to the control's 0.1 grid so repeated steps do not drift
                let slider = ((self.height_slider + delta) * 10.0).round() / 10.0;
                self.height_slider = slider.clamp(0.0, MAX_FLOAT_HEIGHT);
                SessionEvent::HeightDragged(self.height_slider)
            }
            Action::AdjustDimension(delta) => {
                let dimension = self.active_dimension();
                let range = ShapeParams::UI_RANGE;
                let value = (self.session.params.get(dimension) + delta).clamp(*range.start(), *range.end());
                SessionEvent::DimensionChanged(dimension, value)
            }
            Action::SnapToFloor => SessionEvent::SnapRequested,
        };

        self.last_error = self.session.apply(event).err();
        if !matches!(event, SessionEvent::HeightDragged(_)) || !self.session.tilt.is_snapped() {
            self.height_slider = self.session.tilt.float_height;
        }
        true
    }
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    viewer: Viewer,
    camera: Camera,
    renderer: AsciiRenderer,
    ground: Vec<(Point3<f32>, Point3<f32>)>,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(viewer: Viewer) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let scene_rows = height.saturating_sub(PANEL_ROWS).max(1);
        let ground = ground_grid(8.0, 2.0)
            .into_iter()
            .map(|(a, b)| (to_f32(&a), to_f32(&b)))
            .collect();

        let mut camera = Camera::for_terminal(width, scene_rows);
        camera.mode = viewer.projection_mode;

        Ok(Self {
            viewer,
            camera,
            renderer: AsciiRenderer::new(width as usize, scene_rows as usize),
            ground,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        info!("terminal viewer started");

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = controls::action_for(&key) {
                    debug!(?action, "key action");
                    self.running = self.viewer.handle(action);
                    self.camera.mode = self.viewer.projection_mode;
                }
            }
            Event::Resize(width, height) => {
                let scene_rows = height.saturating_sub(PANEL_ROWS).max(1);
                let mode = self.camera.mode;
                self.camera = Camera::for_terminal(width, scene_rows);
                self.camera.mode = mode;
                self.renderer = AsciiRenderer::new(width as usize, scene_rows as usize);
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let session = &self.viewer.session;
        let tilt = session.tilt;
        let model = Transform::tilt_matrix(tilt.angle_degrees, tilt.float_height);
        let world = Matrix4::identity();

        // Clear renderer
        self.renderer.clear();

        // Render shape, ground and construction lines
        let mesh = Mesh::for_shape(session.kind, &session.params);
        self.renderer.render_mesh(&mesh, &model, &self.camera);
        for (start, end) in &self.ground {
            self.renderer
                .render_segment(start, end, &world, &self.camera, renderer::GROUND_CHAR);
        }
        // Nothing is drawn for helpers that fail validation
        if let Ok(Some(helpers)) = session.helper_lines() {
            for (start, end) in helpers.segments() {
                self.renderer.render_segment(
                    &to_f32(&start),
                    &to_f32(&end),
                    &world,
                    &self.camera,
                    renderer::HELPER_CHAR,
                );
            }
        }

        // Output to terminal
        let mut stdout = stdout();
        let mut lines = panel::panel_lines(session, Some(self.viewer.active_dimension()));
        if let Some(error) = &self.viewer.last_error {
            lines.push(format!("rejected: {}", error));
        }
        for (row, line) in lines.iter().enumerate().take(PANEL_ROWS as usize - 1) {
            queue!(
                stdout,
                cursor::MoveTo(0, row as u16),
                Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }
        for row in lines.len().min(PANEL_ROWS as usize - 1)..PANEL_ROWS as usize - 1 {
            queue!(
                stdout,
                cursor::MoveTo(0, row as u16),
                terminal::Clear(ClearType::CurrentLine)
            )?;
        }
        queue!(
            stdout,
            cursor::MoveTo(0, PANEL_ROWS - 1),
            SetForegroundColor(Color::Yellow),
            Print(format!("{} | FPS: {:.1}", controls::HELP, self.fps)),
            ResetColor
        )?;

        // Scene below the panel
        self.renderer.draw(&mut stdout, PANEL_ROWS)?;

        stdout.flush()?;
        Ok(())
    }
}

fn to_f32(point: &Point3<f64>) -> Point3<f32> {
    Point3::new(point.x as f32, point.y as f32, point.z as f32)
}

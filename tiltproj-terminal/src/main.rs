/// tiltproj - orthogonal projection of tilted shapes in the terminal
///
/// Controls:
///   - 1-8: Select line, circle, rectangle, triangle, cylinder, box, cone, pyramid
///   - Left/Right: Tilt angle
///   - Up/Down: Float height (moving it off the floor releases the snap)
///   - F: Snap back to the floor
///   - Tab, +/-: Pick and change a dimension
///   - O: Toggle orthographic/perspective
///   - Q/ESC: Quit
use clap::Parser;
use std::io;
use tiltproj_core::{parse_shape, ProjectionMode, SessionEvent, SessionState};
use tiltproj_terminal::{invalid_input, panel, TerminalApp, Viewer};

#[derive(Parser, Debug)]
#[command(name = "tiltproj", version, about = "Orthogonal projection of tilted shapes")]
struct Args {
    /// Shape descriptor, e.g. "circle r=3" or "box w=6 h=4 d=2"
    #[arg(long, default_value = "circle r=3")]
    shape: String,

    /// Tilt angle in degrees, 0 to 90
    #[arg(long, default_value_t = 30.0)]
    angle: f64,

    /// Start at this height instead of resting on the floor
    #[arg(long)]
    height: Option<f64>,

    /// Print the projection panel and exit
    #[arg(long)]
    report: bool,

    /// Start with an orthographic camera
    #[arg(long)]
    orthographic: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tiltproj=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let (kind, params) = parse_shape(&args.shape).map_err(invalid_input)?;
    let mut session = SessionState::new(kind, params, args.angle).map_err(invalid_input)?;
    if let Some(height) = args.height {
        session
            .apply(SessionEvent::HeightDragged(height))
            .map_err(invalid_input)?;
    }

    if args.report {
        for line in panel::panel_lines(&session, None) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut viewer = Viewer::new(session);
    if args.orthographic {
        viewer.projection_mode = ProjectionMode::Orthographic;
    }

    let mut app = TerminalApp::new(viewer)?;
    app.run()?;

    println!("Thank you for using tiltproj!");
    Ok(())
}

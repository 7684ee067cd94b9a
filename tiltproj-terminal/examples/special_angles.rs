/// Example: Print the projection panel of a shape at every special angle
///
/// Usage: cargo run --example special_angles -- "rect w=6 h=6"
use std::env;
use std::io;
use tiltproj_core::{parse_shape, SessionState};
use tiltproj_terminal::{invalid_input, panel};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let descriptor = match args.get(1) {
        Some(descriptor) => descriptor.as_str(),
        None => {
            eprintln!("Usage: {} <shape descriptor>", args[0]);
            eprintln!("\nNo shape provided, using a 6 x 6 square...");
            "rect w=6 h=6"
        }
    };

    let (kind, params) = parse_shape(descriptor).map_err(invalid_input)?;

    for angle in [0.0, 30.0, 45.0, 60.0, 90.0] {
        let session = SessionState::new(kind, params, angle).map_err(invalid_input)?;
        for line in panel::panel_lines(&session, None) {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}

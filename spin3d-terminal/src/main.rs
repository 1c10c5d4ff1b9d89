/// spin3d terminal demo - rotating tetrahedron or cube
///
/// Usage: spin3d-terminal [tetrahedron|cube] [scale]
/// Controls:
///   - V/E/I/F/C: Toggle vertices, edges, inner edges, faces, center
///   - Q/ESC: Quit
use spin3d_terminal::{AppConfig, TerminalApp};

fn main() -> anyhow::Result<()> {
    // Keep logging setup in the binary so the library remains unopinionated.
    env_logger::init();

    let config = AppConfig::from_args(std::env::args().skip(1))?;

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    Ok(())
}

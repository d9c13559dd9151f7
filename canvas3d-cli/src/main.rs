/// canvas3d CLI - Rotating cube frame dump
///
/// Prints the projected screen points of a spinning wireframe cube, one
/// frame per line, in the canonical matrix text form.
/// Usage: canvas3d-cli [frames] [focal_min] [focal_max]
///
/// Set `RUST_LOG=debug` to trace each frame.

use std::io;

use anyhow::Result;
use canvas3d_cli::{FrameDump, Options};
use canvas3d_core::{Size, Wireframe};

fn main() -> Result<()> {
    env_logger::init();

    let options = Options::from_args(std::env::args().skip(1))?;
    log::info!(
        "Dumping {} frames, focal length {}..{}",
        options.frames,
        options.focal_min,
        options.focal_max
    );

    let mut dump = FrameDump::new(Wireframe::cube(2.0), &options, Size::new(800.0, 600.0));
    dump.run(options.frames, &mut io::stdout().lock())?;

    Ok(())
}

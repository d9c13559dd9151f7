/// Headless frame dumper: spins a wireframe and prints projected points
use std::io::Write;

use anyhow::{bail, Context, Result};
use canvas3d_core::{
    rotation_matrix, Camera, Matrix, Oscillator, RotationState, SineOscillator, Size, Wireframe,
};

/// Frame period of the animation clock, in seconds (30 FPS)
pub const FRAME_TIME: f64 = 1.0 / 30.0;

/// Command line options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub frames: usize,
    /// Range swept by the focal length over time
    pub focal_min: f64,
    pub focal_max: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            frames: 3,
            focal_min: 0.4,
            focal_max: 1.2,
        }
    }
}

impl Options {
    /// Parse `[frames] [focal_min] [focal_max]`, falling back to defaults when absent
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut options = Self::default();
        let mut args = args.into_iter();

        if let Some(frames) = args.next() {
            options.frames = frames
                .parse()
                .with_context(|| format!("Invalid frame count: {}", frames))?;
        }
        if let Some(min) = args.next() {
            options.focal_min = min
                .parse()
                .with_context(|| format!("Invalid minimum focal length: {}", min))?;
        }
        if let Some(max) = args.next() {
            options.focal_max = max
                .parse()
                .with_context(|| format!("Invalid maximum focal length: {}", max))?;
        }
        if let Some(extra) = args.next() {
            bail!("Unexpected argument: {}", extra);
        }
        if options.focal_min > options.focal_max {
            bail!(
                "Focal length range is empty: {} > {}",
                options.focal_min,
                options.focal_max
            );
        }
        Ok(options)
    }
}

/// Per-frame state for the wireframe being animated
pub struct FrameDump {
    wireframe: Wireframe,
    rotation: RotationState,
    camera: Camera,
    focal: Box<dyn Oscillator>,
    time: f64,
    screen: Size,
}

impl FrameDump {
    pub fn new(wireframe: Wireframe, options: &Options, screen: Size) -> Self {
        Self {
            wireframe,
            rotation: RotationState::new(0.3, 0.3, 0.0),
            camera: Camera::default(),
            focal: Box::new(SineOscillator::new(options.focal_min, options.focal_max)),
            time: 0.0,
            screen,
        }
    }

    fn update(&mut self) {
        // Continuous slow rotation
        self.rotation.rotate(0.01, 0.015, 0.0);
        self.time += FRAME_TIME;
    }

    /// Focal length of the current frame
    pub fn focal_length(&self) -> f64 {
        self.focal.compute(self.time)
    }

    /// Screen-space points of the current frame, one row per wireframe point
    pub fn frame(&self) -> Result<Matrix> {
        let model = rotation_matrix(&self.rotation);
        let points = self.wireframe.points.apply(&model)?;
        let camera = Camera {
            focal_length: self.focal_length(),
            ..self.camera
        };
        let screen = camera
            .screen_matrix(&points, self.screen)
            .context("Failed to project frame")?;
        Ok(screen)
    }

    /// Write `frames` frames to `out`, advancing the rotation between them.
    pub fn run<W: Write>(&mut self, frames: usize, out: &mut W) -> Result<()> {
        for n in 0..frames {
            let screen = self.frame()?;
            log::debug!("frame {}: {} points", n, screen.height());
            writeln!(out, "frame {}: {}", n, screen)?;
            self.update();
        }
        out.flush()?;
        Ok(())
    }
}

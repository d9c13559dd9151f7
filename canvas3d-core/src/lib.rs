/// canvas3d Core Library - Dense matrices and geometric transforms
///
/// This library provides the stateless core for projecting 3D shapes onto a
/// 2D canvas: a row-major matrix with an append-only build phase, homogeneous
/// transform builders, perspective projection and 2D vector arithmetic.
///
/// Points are stored as matrix rows `[x, y, z, 1]` and transforms are applied
/// by right multiplication, so `points.apply(&a)?.apply(&b)?` applies `a`
/// first.

pub mod error;
pub mod geometry;
pub mod math;
pub mod matrix;
pub mod oscillator;
pub mod projection;
pub mod text;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use error::{MatrixError, Result};
pub use geometry::Wireframe;
pub use matrix::Matrix;
pub use oscillator::{
    CompositeOscillator, ConstOscillator, LinearOscillator, Oscillator, SineOscillator,
};
pub use projection::Camera;
pub use text::parse_matrix;
pub use transform::{
    compose, rotation_matrix, rotation_x, rotation_y, rotation_z, scaling, translation,
    RotationState,
};
pub use vector::{Size, Vector2};

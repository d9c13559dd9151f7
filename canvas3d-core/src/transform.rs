/// 4x4 homogeneous transform builders and rotation state
///
/// All builders produce matrices meant to be applied to row-vector points by
/// right multiplication (`points.apply(&t)`), see [`Matrix::apply`].
use crate::error::Result;
use crate::matrix::Matrix;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation about the X axis
pub fn rotation_x(theta: f64) -> Matrix {
    let (st, ct) = theta.sin_cos();
    Matrix::from_array([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, ct, -st, 0.0],
        [0.0, st, ct, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Y axis
pub fn rotation_y(theta: f64) -> Matrix {
    let (st, ct) = theta.sin_cos();
    Matrix::from_array([
        [ct, 0.0, st, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-st, 0.0, ct, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Z axis
pub fn rotation_z(theta: f64) -> Matrix {
    let (st, ct) = theta.sin_cos();
    Matrix::from_array([
        [ct, -st, 0.0, 0.0],
        [st, ct, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Translation by `(dx, dy, dz)`.
///
/// Built in the usual column-vector layout (offsets in the last column) and
/// then transposed, because points are rows multiplied on the right: the
/// offsets have to end up in the last row.
pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix {
    Matrix::from_array([
        [1.0, 0.0, 0.0, dx],
        [0.0, 1.0, 0.0, dy],
        [0.0, 0.0, 1.0, dz],
        [0.0, 0.0, 0.0, 1.0],
    ])
    .transpose()
}

/// Non-uniform scaling about the origin
pub fn scaling(sx: f64, sy: f64, sz: f64) -> Matrix {
    Matrix::from_array([
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, sz, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Combined rotation of a [`RotationState`]: X first, then Y, then Z.
pub fn rotation_matrix(rotation: &RotationState) -> Matrix {
    rotation_x(rotation.x)
        .product(&rotation_y(rotation.y))
        .product(&rotation_z(rotation.z))
}

/// Collapse a chain of transforms into one matrix.
///
/// `compose(&[a, b])` applied to points is the same as applying `a` then `b`.
/// An empty chain is the 4x4 identity.
pub fn compose(transforms: &[Matrix]) -> Result<Matrix> {
    transforms
        .iter()
        .try_fold(Matrix::identity(4)?, |acc, t| acc.dot(t))
}

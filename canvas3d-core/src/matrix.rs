/// Dense row-major matrices with an append-only build phase
use std::fmt;

use nalgebra::DMatrix;

use crate::error::{MatrixError, Result, Shape};
use crate::vector::Vector2;

/// Fixed-shape dense matrix of `f64`.
///
/// A matrix starts zero-filled and is populated one row at a time with
/// [`Matrix::push`]. Once built it is used as a value: every arithmetic
/// operation returns a new matrix and leaves the receiver untouched.
///
/// Cell `(i, j)` lives at offset `i * width + j` of the backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    /// Number of rows appended so far
    capacity: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled `height x width` matrix with no rows appended.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(MatrixError::InvalidShape { height, width });
        }
        Ok(Self::zeroed(height, width))
    }

    // Callers guarantee a non-empty shape.
    fn zeroed(height: usize, width: usize) -> Self {
        debug_assert!(height > 0 && width > 0);
        Self {
            height,
            width,
            capacity: 0,
            data: vec![0.0; height * width],
        }
    }

    /// Create a fully populated matrix from a list of equally sized rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut out = Self::new(rows.len(), width)?;
        for row in rows {
            out.push(row.as_ref())?;
        }
        Ok(out)
    }

    // Fully populated matrix from a non-empty literal.
    pub(crate) fn from_array<const H: usize, const W: usize>(rows: [[f64; W]; H]) -> Self {
        let mut out = Self::zeroed(H, W);
        for (dst, src) in out.data.chunks_exact_mut(W).zip(&rows) {
            dst.copy_from_slice(src);
        }
        out.capacity = H;
        out
    }

    pub fn identity(size: usize) -> Result<Self> {
        let mut out = Self::new(size, size)?;
        for i in 0..size {
            out.data[i * size + i] = 1.0;
        }
        out.capacity = size;
        Ok(out)
    }

    /// Zero every cell and rewind the append cursor.
    pub fn clear(&mut self) -> &mut Self {
        self.data.iter_mut().for_each(|v| *v = 0.0);
        self.capacity = 0;
        self
    }

    /// Append `row` as the next unpopulated row.
    pub fn push(&mut self, row: &[f64]) -> Result<()> {
        if row.len() != self.width {
            return Err(MatrixError::InvalidRowLength {
                expected: self.width,
                found: row.len(),
            });
        }
        if self.capacity == self.height {
            return Err(MatrixError::MatrixFull {
                height: self.height,
            });
        }

        let start = self.capacity * self.width;
        self.data[start..start + self.width].copy_from_slice(row);
        self.capacity += 1;
        Ok(())
    }

    /// Append the homogeneous point `[x, y, z, 1]`.
    pub fn push_point(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        self.push(&[x, y, z, 1.0])
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows appended so far
    pub fn rows_filled(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity == self.height
    }

    fn shape(&self) -> Shape {
        Shape {
            height: self.height,
            width: self.width,
        }
    }

    fn index_of(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.height || j >= self.width {
            return None;
        }
        Some(i * self.width + j)
    }

    /// Read cell `(i, j)`; `None` when the index is outside the matrix.
    pub fn cell(&self, i: usize, j: usize) -> Option<f64> {
        self.index_of(i, j).map(|idx| self.data[idx])
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.height {
            return None;
        }
        let start = i * self.width;
        Some(&self.data[start..start + self.width])
    }

    /// `width x height` matrix with cell `(i, j)` taken from `(j, i)`.
    ///
    /// Unpopulated rows of the source read as zero.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeroed(self.width, self.height);
        for i in 0..self.width {
            for j in 0..self.height {
                out.data[i * self.height + j] = self.data[j * self.width + i];
            }
        }
        out.capacity = out.height;
        out
    }

    /// Deep copy, including the append cursor.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut out = self.copy();
        out.data.iter_mut().for_each(|v| *v = f(*v));
        out
    }

    /// Add `value` to every cell
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, value: f64) -> Self {
        self.map(|v| v + value)
    }

    /// Element-wise sum of two matrices of identical shape.
    pub fn add_mat(&self, other: &Matrix) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                op: "add",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut out = self.copy();
        for (v, o) in out.data.iter_mut().zip(&other.data) {
            *v += o;
        }
        Ok(out)
    }

    /// Multiply every cell by `value`
    pub fn scale(&self, value: f64) -> Self {
        self.map(|v| v * value)
    }

    /// Matrix product `self x other`, of shape `self.height x other.width`.
    pub fn dot(&self, other: &Matrix) -> Result<Self> {
        if self.width != other.height {
            return Err(MatrixError::ShapeMismatch {
                op: "dot",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(self.product(other))
    }

    // Shapes must already be compatible.
    pub(crate) fn product(&self, other: &Matrix) -> Self {
        debug_assert_eq!(self.width, other.height);
        log::trace!("dot {} x {}", self.shape(), other.shape());

        let mut out = Self::zeroed(self.height, other.width);
        for i in 0..out.height {
            for j in 0..out.width {
                let mut v = 0.0;
                for k in 0..self.width {
                    v += self.data[i * self.width + k] * other.data[k * other.width + j];
                }
                out.data[i * out.width + j] = v;
            }
        }
        out.capacity = out.height;
        out
    }

    /// Apply a transform to a matrix of points.
    ///
    /// Points are stored as rows and transforms are applied by multiplying on
    /// the right, so `points.apply(&a)?.apply(&b)?` applies `a` first and `b`
    /// second. The builders in [`crate::transform`] follow this convention;
    /// in particular the translation matrix carries its offsets in the last
    /// row, not the last column.
    pub fn apply(&self, transform: &Matrix) -> Result<Self> {
        self.dot(transform)
    }

    /// Perspective division of homogeneous points.
    ///
    /// Each `[x, y, z, w]` row becomes `[s * x, s * y]` with
    /// `s = focal_length / z`. A point with `z == 0` yields infinite or NaN
    /// coordinates.
    pub fn project(&self, focal_length: f64) -> Result<Self> {
        if self.width != 4 {
            return Err(MatrixError::InvalidOperandShape {
                op: "project",
                expected_width: 4,
                found_width: self.width,
            });
        }
        log::trace!("project {} points, f = {}", self.height, focal_length);

        let mut out = Self::zeroed(self.height, 2);
        for (i, row) in self.data.chunks_exact(4).enumerate() {
            if row[2] == 0.0 {
                log::debug!("point {} lies on the projection plane (z = 0)", i);
            }
            let s = focal_length / row[2];
            out.data[i * 2] = s * row[0];
            out.data[i * 2 + 1] = s * row[1];
        }
        out.capacity = out.height;
        Ok(out)
    }

    /// One point per row of a two column matrix.
    pub fn to_point_array(&self) -> Result<Vec<Vector2>> {
        if self.width != 2 {
            return Err(MatrixError::InvalidOperandShape {
                op: "to_point_array",
                expected_width: 2,
                found_width: self.width,
            });
        }

        Ok(self
            .data
            .chunks_exact(2)
            .map(|row| Vector2::new(row[0], row[1]))
            .collect())
    }
}

/// Round to 6 decimals so float noise does not leak into the text form.
///
/// Halves round up (towards positive infinity), so `-2.5e-6` becomes
/// `-0.000002`.
fn display_value(value: f64) -> f64 {
    let rounded = (value * 1e6 + 0.5).floor() / 1e6;
    // Collapse -0 into 0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.chunks_exact(self.width).enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", display_value(*value))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl From<&Matrix> for DMatrix<f64> {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_row_slice(m.height, m.width, &m.data)
    }
}

impl TryFrom<&DMatrix<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(m: &DMatrix<f64>) -> Result<Self> {
        let mut out = Self::new(m.nrows(), m.ncols())?;
        for row in m.row_iter() {
            let values: Vec<f64> = row.iter().copied().collect();
            out.push(&values)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_invalid_shape() {
        assert!(matches!(
            Matrix::new(0, 0),
            Err(MatrixError::InvalidShape { .. })
        ));
        assert!(matches!(
            Matrix::new(3, 0),
            Err(MatrixError::InvalidShape { .. })
        ));
        assert!(matches!(
            Matrix::new(0, 3),
            Err(MatrixError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_size() {
        let m = Matrix::new(3, 5).unwrap();
        assert_eq!(m.width(), 5);
        assert_eq!(m.height(), 3);

        let m = Matrix::new(4, 8).unwrap();
        assert_eq!(m.width(), 8);
        assert_eq!(m.height(), 4);
    }

    #[test]
    fn test_invalid_row_length() {
        let mut m = Matrix::new(2, 2).unwrap();
        assert_eq!(
            m.push(&[]),
            Err(MatrixError::InvalidRowLength {
                expected: 2,
                found: 0
            })
        );
        assert!(matches!(
            m.push(&[4.0, 3.0, 2.0]),
            Err(MatrixError::InvalidRowLength { .. })
        ));
        assert_eq!(m.rows_filled(), 0);
    }

    #[test]
    fn test_full() {
        let mut m = Matrix::new(3, 2).unwrap();
        m.push(&[1.0, 2.0]).unwrap();
        m.push(&[3.0, 4.0]).unwrap();
        assert!(!m.is_full());
        m.push(&[5.0, 6.0]).unwrap();
        assert!(m.is_full());
        assert_eq!(
            m.push(&[7.0, 8.0]),
            Err(MatrixError::MatrixFull { height: 3 })
        );
        // A wrong length is reported before fullness.
        assert!(matches!(
            m.push(&[7.0]),
            Err(MatrixError::InvalidRowLength { .. })
        ));
    }

    #[test]
    fn test_read_cell() {
        let mut m = Matrix::new(2, 4).unwrap();
        m.push_point(1.0, 2.0, 3.0).unwrap();
        m.push_point(4.0, 5.0, 6.0).unwrap();

        assert_eq!(m.cell(0, 0), Some(1.0));
        assert_eq!(m.cell(0, 1), Some(2.0));
        assert_eq!(m.cell(0, 2), Some(3.0));
        assert_eq!(m.cell(0, 3), Some(1.0));
        assert_eq!(m.cell(0, 4), None);
        assert_eq!(m.cell(0, 5), None);

        assert_eq!(m.cell(1, 0), Some(4.0));
        assert_eq!(m.cell(1, 1), Some(5.0));
        assert_eq!(m.cell(1, 2), Some(6.0));
        assert_eq!(m.cell(1, 3), Some(1.0));
        assert_eq!(m.cell(1, 5), None);

        assert_eq!(m.cell(2, 0), None);
        assert_eq!(m.cell(usize::MAX, usize::MAX), None);

        assert_eq!(m.row(1), Some(&[4.0, 5.0, 6.0, 1.0][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn test_unfilled_cells_are_zero() {
        let m = Matrix::new(2, 3).unwrap();
        assert_eq!(m.cell(1, 2), Some(0.0));
        assert_eq!(m.rows_filled(), 0);
    }

    #[test]
    fn test_to_string() {
        let mut m = Matrix::new(2, 2).unwrap();
        assert_eq!(m.clear().to_string(), "[[0,0],[0,0]]");

        m.push(&[1.0, 2.0]).unwrap();
        assert_eq!(m.to_string(), "[[1,2],[0,0]]");

        m.push(&[3.0, 4.0]).unwrap();
        assert_eq!(m.to_string(), "[[1,2],[3,4]]");
    }

    #[test]
    fn test_to_string_rounds() {
        let m = matrix(&[&[0.1 + 0.2, -1e-9, 0.125], &[1.0 / 3.0, -2.5, 6e-17]]);
        assert_eq!(m.to_string(), "[[0.3,0,0.125],[0.333333,-2.5,0]]");
    }

    #[test]
    fn test_to_string_rounds_halves_up() {
        let m = matrix(&[&[-0.0000025, 0.0000025, -0.0000004]]);
        assert_eq!(m.to_string(), "[[-0.000002,0.000003,0]]");
    }

    #[test]
    fn test_clear_rewinds() {
        let mut m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert!(m.is_full());
        m.clear();
        assert_eq!(m.rows_filled(), 0);
        assert_eq!(m.cell(1, 1), Some(0.0));
        m.push(&[5.0, 6.0]).unwrap();
        assert_eq!(m.to_string(), "[[5,6],[0,0]]");
    }

    #[test]
    fn test_transpose() {
        let mut m = Matrix::new(3, 2).unwrap();
        assert_eq!(m.clear().transpose().to_string(), "[[0,0,0],[0,0,0]]");

        m.push(&[1.0, 2.0]).unwrap();
        assert_eq!(m.to_string(), "[[1,2],[0,0],[0,0]]");
        assert_eq!(m.transpose().to_string(), "[[1,0,0],[2,0,0]]");

        m.push(&[3.0, 4.0]).unwrap();
        assert_eq!(m.transpose().to_string(), "[[1,3,0],[2,4,0]]");

        m.push(&[5.0, 6.0]).unwrap();
        assert_eq!(m.to_string(), "[[1,2],[3,4],[5,6]]");
        assert_eq!(m.transpose().to_string(), "[[1,3,5],[2,4,6]]");

        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 3);
        assert_eq!(m.transpose().width(), 3);
        assert_eq!(m.transpose().height(), 2);
    }

    #[test]
    fn test_transpose_round_trip() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut m = Matrix::new(2, 2).unwrap();
        m.push(&[1.0, 2.0]).unwrap();

        let mut c = m.copy();
        assert_eq!(c, m);
        assert_eq!(c.rows_filled(), 1);

        c.push(&[3.0, 4.0]).unwrap();
        assert_eq!(m.to_string(), "[[1,2],[0,0]]");
        assert_eq!(c.to_string(), "[[1,2],[3,4]]");
    }

    #[test]
    fn test_add_scalar() {
        let m = matrix(&[&[1.0, 2.0, 0.0], &[4.0, 3.0, -1.0]]);
        assert_eq!(m.add(1.0).to_string(), "[[2,3,1],[5,4,0]]");
        assert_eq!(m.to_string(), "[[1,2,0],[4,3,-1]]");
    }

    #[test]
    fn test_add_matrix() {
        let m1 = matrix(&[&[1.0, 3.0], &[8.0, 5.0]]);
        let m2 = matrix(&[&[2.0, -5.0], &[-7.0, 3.0]]);
        let expected = matrix(&[&[3.0, -2.0], &[1.0, 8.0]]);

        assert_eq!(m1.add_mat(&m2).unwrap(), expected);
        assert_eq!(m2.add_mat(&m1).unwrap(), expected);
    }

    #[test]
    fn test_add_matrix_mismatch() {
        let m1 = Matrix::new(2, 2).unwrap();
        let m2 = Matrix::new(2, 3).unwrap();
        assert!(matches!(
            m1.add_mat(&m2),
            Err(MatrixError::ShapeMismatch { op: "add", .. })
        ));
    }

    #[test]
    fn test_scale() {
        let m = matrix(&[&[1.0, 2.0, 0.0], &[4.0, 3.0, -1.0]]);
        assert_eq!(m.scale(-2.0).to_string(), "[[-2,-4,0],[-8,-6,2]]");
    }

    #[test]
    fn test_dot_invalid_size() {
        let m1 = Matrix::new(3, 8).unwrap();
        let m2 = Matrix::new(6, 3).unwrap();
        assert!(matches!(
            m1.dot(&m2),
            Err(MatrixError::ShapeMismatch { op: "dot", .. })
        ));
    }

    #[test]
    fn test_dot() {
        let m1 = matrix(&[&[1.0, 2.0, 0.0], &[4.0, 3.0, -1.0]]);
        let m2 = matrix(&[&[5.0, 1.0], &[2.0, 3.0], &[3.0, 4.0]]);

        let res1 = m1.dot(&m2).unwrap();
        assert_eq!(res1.width(), 2);
        assert_eq!(res1.height(), 2);
        assert_eq!(res1, matrix(&[&[9.0, 7.0], &[23.0, 9.0]]));

        let res2 = m2.dot(&m1).unwrap();
        assert_eq!(res2.width(), 3);
        assert_eq!(res2.height(), 3);
        assert_eq!(
            res2,
            matrix(&[
                &[9.0, 13.0, -1.0],
                &[14.0, 13.0, -3.0],
                &[19.0, 18.0, -4.0]
            ])
        );
        assert!(res2.is_full());
    }

    #[test]
    fn test_dot_matches_nalgebra() {
        let a = matrix(&[&[0.5, -1.25, 3.0, 2.0], &[1.5, 0.0, -2.0, 4.0]]);
        let b = matrix(&[
            &[1.0, 2.0, 3.0],
            &[-0.5, 0.25, 8.0],
            &[2.0, -3.0, 0.0],
            &[7.0, 1.0, -1.0],
        ]);

        let expected = DMatrix::from(&a) * DMatrix::from(&b);
        let ours = DMatrix::from(&a.dot(&b).unwrap());
        assert!((ours - expected).norm() < 1e-9);
    }

    #[test]
    fn test_identity() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let id = Matrix::identity(2).unwrap();
        assert_eq!(m.dot(&id).unwrap(), m);
        assert_eq!(id.to_string(), "[[1,0],[0,1]]");
    }

    #[test]
    fn test_project() {
        let mut m = Matrix::new(9, 4).unwrap();
        // Plane 0
        m.push_point(-1.0, -1.0, 1.0).unwrap();
        m.push_point(-1.0, 1.0, 1.0).unwrap();
        m.push_point(1.0, -1.0, 1.0).unwrap();
        m.push_point(1.0, 1.0, 1.0).unwrap();
        // Plane 1
        m.push_point(-1.0, -1.0, 2.0).unwrap();
        m.push_point(-1.0, 1.0, 2.0).unwrap();
        m.push_point(1.0, -1.0, 2.0).unwrap();
        m.push_point(1.0, 1.0, 2.0).unwrap();
        // Plane 2
        m.push_point(1.0, 1.0, 4.0).unwrap();

        let points = m.project(0.5).unwrap().to_point_array().unwrap();
        assert_eq!(
            points,
            vec![
                Vector2::new(-0.5, -0.5),
                Vector2::new(-0.5, 0.5),
                Vector2::new(0.5, -0.5),
                Vector2::new(0.5, 0.5),
                Vector2::new(-0.25, -0.25),
                Vector2::new(-0.25, 0.25),
                Vector2::new(0.25, -0.25),
                Vector2::new(0.25, 0.25),
                Vector2::new(0.125, 0.125),
            ]
        );
    }

    #[test]
    fn test_project_zero_depth() {
        let mut m = Matrix::new(2, 4).unwrap();
        m.push_point(1.0, -1.0, 0.0).unwrap();
        m.push_point(0.0, 0.0, 0.0).unwrap();

        let p = m.project(1.0).unwrap();
        assert_eq!(p.cell(0, 0), Some(f64::INFINITY));
        assert_eq!(p.cell(0, 1), Some(f64::NEG_INFINITY));
        assert!(p.cell(1, 0).unwrap().is_nan());
    }

    #[test]
    fn test_project_invalid() {
        let m = Matrix::new(2, 3).unwrap();
        assert!(matches!(
            m.project(1.0),
            Err(MatrixError::InvalidOperandShape {
                op: "project",
                expected_width: 4,
                found_width: 3
            })
        ));
    }

    #[test]
    fn test_point_array_invalid() {
        let m = Matrix::new(9, 3).unwrap();
        assert!(matches!(
            m.to_point_array(),
            Err(MatrixError::InvalidOperandShape { found_width: 3, .. })
        ));
    }

    #[test]
    fn test_point_array() {
        let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_eq!(
            m.to_point_array().unwrap(),
            vec![
                Vector2::new(1.0, 2.0),
                Vector2::new(3.0, 4.0),
                Vector2::new(5.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let m = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let d = DMatrix::from(&m);
        assert_eq!(d[(1, 0)], 4.0);
        assert_eq!(d[(0, 2)], 3.0);
        assert_eq!(Matrix::try_from(&d).unwrap(), m);

        let empty = DMatrix::<f64>::zeros(0, 3);
        assert!(matches!(
            Matrix::try_from(&empty),
            Err(MatrixError::InvalidShape { .. })
        ));
    }
}

/// Wireframe shapes built from homogeneous point matrices
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::projection::Camera;
use crate::vector::{Size, Vector2};

/// A set of 3D points (one homogeneous row each) joined by edges
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    pub points: Matrix,
    /// Pairs of row indices into `points`
    pub edges: Vec<(usize, usize)>,
}

impl Wireframe {
    pub fn new(points: Matrix, edges: Vec<(usize, usize)>) -> Result<Self> {
        if points.width() != 4 {
            return Err(MatrixError::InvalidOperandShape {
                op: "wireframe",
                expected_width: 4,
                found_width: points.width(),
            });
        }
        Ok(Self { points, edges })
    }

    /// Axis-aligned cube of side `size` centered on the origin.
    ///
    /// Points 0-3 are the front plane (`z = -size / 2`), 4-7 the back plane.
    pub fn cube(size: f64) -> Self {
        let h = size / 2.0;
        let points = Matrix::from_array([
            // Front plane
            [-h, -h, -h, 1.0],
            [h, -h, -h, 1.0],
            [h, h, -h, 1.0],
            [-h, h, -h, 1.0],
            // Back plane
            [-h, -h, h, 1.0],
            [h, -h, h, 1.0],
            [h, h, h, 1.0],
            [-h, h, h, 1.0],
        ]);
        let edges = vec![
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        Self { points, edges }
    }

    /// Same edges, points moved by `transform`
    pub fn transformed(&self, transform: &Matrix) -> Result<Self> {
        Ok(Self {
            points: self.points.apply(transform)?,
            edges: self.edges.clone(),
        })
    }

    /// Screen-space line segments, one per edge.
    ///
    /// Edges referring to a missing point are skipped.
    pub fn segments(&self, camera: &Camera, screen: Size) -> Result<Vec<(Vector2, Vector2)>> {
        let projected = camera.project_to_screen(&self.points, screen)?;

        Ok(self
            .edges
            .iter()
            .filter_map(|&(a, b)| match (projected.get(a), projected.get(b)) {
                (Some(&pa), Some(&pb)) => Some((pa, pb)),
                _ => {
                    log::warn!("Skipping edge ({}, {}): no such point", a, b);
                    None
                }
            })
            .collect())
    }
}

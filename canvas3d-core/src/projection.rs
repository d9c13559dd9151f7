/// Camera placement and perspective mapping onto a screen
use nalgebra::Vector3;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::transform::translation;
use crate::vector::{Size, Vector2};

/// Camera configuration for projecting homogeneous points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Offset added to every point before projection
    pub position: Vector3<f64>,
    pub focal_length: f64,
}

impl Camera {
    pub fn new(position: Vector3<f64>, focal_length: f64) -> Self {
        Self {
            position,
            focal_length,
        }
    }

    /// Translation that moves the scene in front of the camera
    pub fn view_matrix(&self) -> Matrix {
        translation(self.position.x, self.position.y, self.position.z)
    }

    /// Project homogeneous points into screen pixels.
    ///
    /// Returns a `height x 2` matrix. Projected coordinates in `[-1, 1]` are
    /// mapped onto `[0, screen.width] x [0, screen.height]`.
    pub fn screen_matrix(&self, points: &Matrix, screen: Size) -> Result<Matrix> {
        let viewport = Matrix::from_array([[screen.width, 0.0], [0.0, screen.height]]);

        points
            .apply(&self.view_matrix())?
            .project(self.focal_length)?
            .add(1.0)
            .scale(0.5)
            .dot(&viewport)
    }

    /// Project homogeneous points to 2D screen space
    pub fn project_to_screen(&self, points: &Matrix, screen: Size) -> Result<Vec<Vector2>> {
        self.screen_matrix(points, screen)?.to_point_array()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 0.0, -3.0), 0.8)
    }
}

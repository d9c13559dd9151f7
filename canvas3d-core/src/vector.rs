/// 2D points and screen bounds
use nalgebra as na;

/// A rectangular bound, typically the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A 2D point or direction.
///
/// Every operation returns a new value; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate_x(self, factor: f64) -> Self {
        Self::new(self.x + factor, self.y)
    }

    pub fn translate_y(self, factor: f64) -> Self {
        Self::new(self.x, self.y + factor)
    }

    /// Translate both axes by the same amount
    pub fn translate(self, factor: f64) -> Self {
        self.translate_x(factor).translate_y(factor)
    }

    pub fn translate_by_size(self, size: Size) -> Self {
        self.translate_x(size.width).translate_y(size.height)
    }

    pub fn translate_vec(self, other: Vector2) -> Self {
        self.translate_x(other.x).translate_y(other.y)
    }

    pub fn scale_x(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y)
    }

    pub fn scale_y(self, factor: f64) -> Self {
        Self::new(self.x, self.y * factor)
    }

    /// Scale both axes by the same factor
    pub fn scale(self, factor: f64) -> Self {
        self.scale_x(factor).scale_y(factor)
    }

    /// Map unit coordinates onto `size`
    pub fn scale_by_size(self, size: Size) -> Self {
        self.scale_x(size.width).scale_y(size.height)
    }

    pub fn scale_vec(self, other: Vector2) -> Self {
        self.scale_x(other.x).scale_y(other.y)
    }

    /// Rotate counter-clockwise around the origin (angle in radians)
    pub fn rotate(self, angle: f64) -> Self {
        let v: na::Vector2<f64> = self.into();
        (na::Rotation2::new(angle) * v).into()
    }

    pub fn distance_squared_to(self, other: Vector2) -> f64 {
        let a: na::Point2<f64> = self.into();
        let b: na::Point2<f64> = other.into();
        na::distance_squared(&a, &b)
    }

    pub fn distance_to(self, other: Vector2) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// Wrap a point that left `bounds` back onto the opposite edge.
    ///
    /// At most one correction is applied per axis, so a point more than one
    /// full width (or height) outside the bound stays outside.
    pub fn clip(self, bounds: Size) -> Self {
        let mut p = self;

        if p.x < 0.0 {
            p.x += bounds.width;
        }
        if p.x >= bounds.width {
            p.x -= bounds.width;
        }

        if p.y >= bounds.height {
            p.y -= bounds.height;
        }
        if p.y < 0.0 {
            p.y += bounds.height;
        }

        p
    }

    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn center(bounds: Size) -> Self {
        Self::new(bounds.width / 2.0, bounds.height / 2.0)
    }

    /// Uniform random point in `[0, 1) x [0, 1)`
    pub fn random() -> Self {
        na::Vector2::<f64>::new_random().into()
    }
}

impl From<na::Vector2<f64>> for Vector2 {
    fn from(v: na::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for na::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        na::Vector2::new(v.x, v.y)
    }
}

impl From<na::Point2<f64>> for Vector2 {
    fn from(p: na::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for na::Point2<f64> {
    fn from(v: Vector2) -> Self {
        na::Point2::new(v.x, v.y)
    }
}

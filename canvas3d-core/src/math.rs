/// Scalar helpers for angles and interpolation
use std::f64::consts::PI;

pub fn deg_to_rad(value: f64) -> f64 {
    (value * PI) / 180.0
}

pub fn rad_to_deg(value: f64) -> f64 {
    (value * 180.0) / PI
}

/// Keep `v` within `[min, max]`
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.max(min).min(max)
}

/// Linear interpolation between `y0` (at `x = 0`) and `y1` (at `x = 1`)
pub fn lerp(y0: f64, y1: f64, x: f64) -> f64 {
    (1.0 - x) * y0 + x * y1
}

/// Cosine interpolation: same end points as [`lerp`], eased at both ends
pub fn cosine_interpolate(y0: f64, y1: f64, x: f64) -> f64 {
    let f = (1.0 - (x * PI).cos()) * 0.5;
    y0 * (1.0 - f) + y1 * f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-5.0, 10.0, 20.0), 10.0);
        assert_eq!(clamp(50.0, 10.0, 20.0), 20.0);
        assert_eq!(clamp(15.0, 10.0, 20.0), 15.0);
    }

    #[test]
    fn test_angles() {
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert!((deg_to_rad(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
        assert!((deg_to_rad(360.0) - 2.0 * PI).abs() < 1e-12);

        assert_eq!(rad_to_deg(0.0), 0.0);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-9);
        assert!((rad_to_deg(PI) - 180.0).abs() < 1e-9);
        assert!((rad_to_deg(2.0 * PI) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_interpolate() {
        assert!((cosine_interpolate(0.0, 100.0, 0.5) - 50.0).abs() < 1e-3);
        assert!((cosine_interpolate(0.0, 100.0, 0.1) - 2.4471).abs() < 1e-3);
        assert!((cosine_interpolate(0.0, 100.0, 0.9) - 97.5528).abs() < 1e-3);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp(0.0, 100.0, 0.25), 25.0);
        assert_eq!(lerp(50.0, 100.0, 0.5), 75.0);
        assert_eq!(lerp(0.0, 50.0, 0.5), 25.0);
    }
}

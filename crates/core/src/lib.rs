//! Core units, constants, and shared primitives for the gwspace detector workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Speed of light in vacuum (m/s).
    pub const C_SI: f64 = 299_792_458.0;
    /// Astronomical unit (m), value used by the detector orbit models.
    pub const AU_SI: f64 = 1.495_978_706_60e11;
    /// Seconds per day.
    pub const DAY_SI: f64 = 86_400.0;
    /// √3, used by the triangular constellation geometry.
    pub const SQRT_3: f64 = 1.732_050_807_568_877_2;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::DAY_SI;

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * DAY_SI
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / DAY_SI
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D Cartesian vector in metres.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
        norm(&sub(a, b))
    }

    /// Unit vector pointing along `v`. A zero vector yields NaN components.
    #[inline]
    pub fn normalize(v: &Vector3) -> Vector3 {
        scale(v, 1.0 / norm(v))
    }
}

//! Scalar helpers shared by the vector code.
//!
//! Comparisons are written out explicitly instead of going through [`f32::clamp`], which
//! panics when `min > max`. Here an inverted range simply collapses onto the smaller bound.

/// Clamps `f` to `[min, max]`.
///
/// Values that do not compare greater than `min` (including NaN) come back as
/// `min(min, max)`.
pub fn clamp(f: f32, min: f32, max: f32) -> f32 {
    if f > min { smaller(f, max) } else { smaller(min, max) }
}

/// Clamps `f` to the unit interval.
pub fn clamp01(f: f32) -> f32 {
    larger(0.0, smaller(f, 1.0))
}

/// Linear interpolation between `f1` and `f2`. `t` is not clamped.
pub fn lerp(f1: f32, f2: f32, t: f32) -> f32 {
    f1 * (1.0 - t) + f2 * t
}

/// Moves `f1` toward `f2` by at most `d`.
pub fn lerp_const(f1: f32, f2: f32, d: f32) -> f32 {
    f1 + clamp(f2 - f1, -d, d)
}

fn smaller(x: f32, y: f32) -> f32 {
    if x < y { x } else { y }
}

fn larger(x: f32, y: f32) -> f32 {
    if x > y { x } else { y }
}

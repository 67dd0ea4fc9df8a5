//! The planar [`Vector`] value type.
//!
//! Every operation takes vectors by value and returns a new one; nothing is mutated in
//! place. Equality is exact component-wise `f32` equality, use [`Vector::near`] when a
//! tolerance is needed.
//!
//! # Example
//! ```
//! use rvec::library::{vec, Vector};
//!
//! let v = vec(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v - v, Vector::ZERO);
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::scalar::clamp;

/// Added to the length in [`Vector::normalize`]. It has to be the smallest *normal* float:
/// the reciprocal of the smallest subnormal overflows to infinity and would turn a zero
/// vector into NaN.
const NORMALIZE_EPSILON: f32 = f32::MIN_POSITIVE;

/// Angular separation (radians) below which [`Vector::slerp`] falls back to a linear blend.
const SLERP_LINEAR_THRESHOLD: f64 = 1e-3;

/// A point or displacement in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

/// Shorthand for [`Vector::new`].
pub const fn vec(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Vector { x, y }
    }

    /// Unit vector pointing at `theta` radians, usable as a rotor for [`Vector::rotate`].
    pub fn for_angle(theta: f32) -> Self {
        Vector::new(theta.cos(), theta.sin())
    }

    pub fn scale(self, s: f32) -> Self {
        Vector::new(self.x * s, self.y * s)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors lifted into the plane.
    /// Positive when `other` is counter-clockwise from `self`.
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotated 90° counter-clockwise.
    pub fn perp(self) -> Self {
        Vector::new(-self.y, self.x)
    }

    /// Rotated 90° clockwise.
    pub fn reverse_perp(self) -> Self {
        Vector::new(self.y, -self.x)
    }

    /// Orthogonal projection of `self` onto `onto`.
    ///
    /// `onto` must not be the zero vector; that case divides by zero and yields NaN.
    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Angle from the positive x axis, in `(-π, π]`.
    pub fn to_angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rotates `self` by the unit rotor `other`, multiplying them as complex numbers.
    pub fn rotate(self, other: Self) -> Self {
        Vector::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + self.y * other.x,
        )
    }

    /// Inverse of [`Vector::rotate`]: rotates by the conjugate of `other`.
    pub fn unrotate(self, other: Self) -> Self {
        Vector::new(
            self.x * other.x + self.y * other.y,
            self.y * other.x - self.x * other.y,
        )
    }

    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Unit vector in the direction of `self`. A zero vector stays zero.
    pub fn normalize(self) -> Self {
        self * (1.0 / (self.length() + NORMALIZE_EPSILON))
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    pub fn distance_sq(self, other: Self) -> f32 {
        (self - other).length_sq()
    }

    /// True when `other` is strictly closer than `d`.
    pub fn near(self, other: Self, d: f32) -> bool {
        self.distance_sq(other) < d * d
    }

    /// Shortens `self` to `max_len` if it is longer, otherwise returns it unchanged.
    pub fn clamp_length(self, max_len: f32) -> Self {
        if self.dot(self) > max_len * max_len {
            self.normalize() * max_len
        } else {
            self
        }
    }

    /// Linear interpolation. `t` outside `[0, 1]` extrapolates.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Moves toward `other` by at most `d`. Lands exactly on `other` once it is within reach.
    pub fn lerp_const(self, other: Self, d: f32) -> Self {
        let delta = other - self;
        if delta.length_sq() <= d * d {
            return other;
        }
        self + delta.clamp_length(d)
    }

    /// Spherical linear interpolation of direction.
    ///
    /// Vectors less than a milliradian apart are blended with [`Vector::lerp`] instead,
    /// where dividing by `sin(omega)` stops being stable.
    ///
    /// # Preconditions
    ///
    /// `self` and `other` must not point in opposite directions. At `omega = π` the sine
    /// in the denominator is rounding noise and the result is meaningless, e.g.
    /// `(1, 0).slerp((-1, 0), 0.5)` collapses to the origin.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let omega = f64::from(self.cos_between(other)).acos();
        if omega < SLERP_LINEAR_THRESHOLD {
            return self.lerp(other, t);
        }

        let denom = 1.0 / omega.sin();
        let from = (f64::from(1.0 - t) * omega).sin() * denom;
        let to = (f64::from(t) * omega).sin() * denom;
        self * from as f32 + other * to as f32
    }

    /// Slerps toward `other` by at most `max_angle` radians.
    ///
    /// Returns `self` unchanged when the two already point the same way. Opposite
    /// directions are degenerate, see [`Vector::slerp`].
    pub fn slerp_const(self, other: Self, max_angle: f32) -> Self {
        let omega = self.cos_between(other).acos();
        if omega == 0.0 {
            return self;
        }
        self.slerp(other, max_angle.min(omega) / omega)
    }

    /// Cosine of the angle between the two directions, clamped for `acos`.
    fn cos_between(self, other: Self) -> f32 {
        clamp(self.normalize().dot(other.normalize()), -1.0, 1.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.x, self.y)
    }
}

impl From<[f32; 2]> for Vector {
    fn from(values: [f32; 2]) -> Self {
        Vector::new(values[0], values[1])
    }
}

impl From<Vector> for [f32; 2] {
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

// Screen and grid coordinates usually arrive as integers.
impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Vector::new(x as f32, y as f32)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        self.scale(s)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v.scale(self)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::{abs_diff_eq, assert_relative_eq};
    use quickcheck::{Arbitrary, Gen};

    use super::*;

    impl Arbitrary for Vector {
        fn arbitrary(g: &mut Gen) -> Self {
            // `Arbitrary` for floats produces NaN and the infinities, so build the
            // components from bounded integers instead.
            let (x, y): (i16, i16) = Arbitrary::arbitrary(g);
            Vector::new(f32::from(x) / 16.0, f32::from(y) / 16.0)
        }
    }

    fn vector_eq(a: Vector, b: Vector, epsilon: f32) -> bool {
        abs_diff_eq!(a.x, b.x, epsilon = epsilon) && abs_diff_eq!(a.y, b.y, epsilon = epsilon)
    }

    #[test]
    fn construction() {
        assert_eq!(vec(1.5, -2.0), Vector { x: 1.5, y: -2.0 });
        assert_eq!(Vector::from((3, -4)), vec(3.0, -4.0));
        assert_eq!(Vector::from([0.5, 0.25]), vec(0.5, 0.25));
        assert_eq!(<[f32; 2]>::from(vec(7.0, 8.0)), [7.0, 8.0]);
        assert_eq!(Vector::default(), Vector::ZERO);
    }

    #[test]
    fn display_six_decimals() {
        assert_eq!(vec(3.0, -4.5).to_string(), "3.000000,-4.500000");
    }

    #[test]
    fn three_four_five() {
        assert_eq!(vec(3.0, 4.0).length(), 5.0);
        assert_eq!(vec(3.0, 4.0).length_sq(), 25.0);
    }

    #[test]
    fn dot_and_cross_of_axes() {
        let x = vec(1.0, 0.0);
        let y = vec(0.0, 1.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);
    }

    #[test]
    fn operators() {
        let a = vec(1.0, 2.0);
        let b = vec(3.0, -4.0);
        assert_eq!(a + b, vec(4.0, -2.0));
        assert_eq!(a - b, vec(-2.0, 6.0));
        assert_eq!(-a, vec(-1.0, -2.0));
        assert_eq!(a * 2.0, vec(2.0, 4.0));
        assert_eq!(2.0 * a, vec(2.0, 4.0));
        assert_eq!(a.scale(-1.0), -a);
    }

    #[test]
    fn perpendiculars() {
        let a = vec(2.0, 1.0);
        assert_eq!(a.perp(), vec(-1.0, 2.0));
        assert_eq!(a.reverse_perp(), vec(1.0, -2.0));
        assert_eq!(a.perp().reverse_perp(), a);
        assert_eq!(a.cross(a.perp()), a.length_sq());
    }

    #[test]
    fn project_onto_axis() {
        assert_eq!(vec(3.0, 4.0).project(vec(2.0, 0.0)), vec(3.0, 0.0));
        assert_eq!(vec(3.0, 4.0).project(vec(0.0, -1.0)), vec(0.0, 4.0));
    }

    #[test]
    fn project_onto_zero_is_nan() {
        let p = vec(3.0, 4.0).project(Vector::ZERO);
        assert!(p.x.is_nan() && p.y.is_nan());
    }

    #[test]
    fn angles() {
        assert_eq!(vec(1.0, 0.0).to_angle(), 0.0);
        assert_relative_eq!(vec(0.0, 2.0).to_angle(), FRAC_PI_2);
        assert_relative_eq!(vec(-1.0, 0.0).to_angle(), PI);
        assert_relative_eq!(vec(0.0, -1.0).to_angle(), -FRAC_PI_2);
    }

    #[test]
    fn rotate_by_quarter_turn() {
        let r = vec(1.0, 2.0).rotate(vec(0.0, 1.0));
        assert_eq!(r, vec(-2.0, 1.0));
        assert_eq!(r.unrotate(vec(0.0, 1.0)), vec(1.0, 2.0));
    }

    #[test]
    fn normalize_lengths() {
        assert_relative_eq!(vec(3.0, 4.0).normalize().length(), 1.0);
        assert_eq!(vec(-2.0, 0.0).normalize(), vec(-1.0, 0.0));
    }

    #[test]
    fn normalize_zero_is_zero() {
        let n = Vector::ZERO.normalize();
        assert!(n.x.is_finite() && n.y.is_finite());
        assert_eq!(n, Vector::ZERO);
        assert_eq!(n.length(), 0.0);
    }

    #[test]
    fn normalize_tiny_is_finite() {
        let n = vec(1e-30, -1e-30).normalize();
        assert!(n.x.is_finite() && n.y.is_finite());
    }

    #[test]
    fn distances() {
        assert_eq!(vec(1.0, 1.0).distance(vec(4.0, 5.0)), 5.0);
        assert_eq!(vec(1.0, 1.0).distance_sq(vec(4.0, 5.0)), 25.0);
    }

    #[test]
    fn near_is_strict() {
        assert!(!Vector::ZERO.near(vec(1.0, 0.0), 1.0));
        assert!(Vector::ZERO.near(vec(0.5, 0.0), 1.0));
    }

    #[test]
    fn clamp_length_scales_down() {
        let c = vec(3.0, 4.0).clamp_length(2.0);
        assert_relative_eq!(c.x, 1.2, epsilon = 1e-6);
        assert_relative_eq!(c.y, 1.6, epsilon = 1e-6);
        assert_eq!(vec(3.0, 4.0).clamp_length(5.0), vec(3.0, 4.0));
    }

    #[test]
    fn lerp_midpoint() {
        assert_eq!(Vector::ZERO.lerp(vec(10.0, 0.0), 0.5), vec(5.0, 0.0));
        assert_eq!(Vector::ZERO.lerp(vec(10.0, 0.0), 1.5), vec(15.0, 0.0));
    }

    #[test]
    fn lerp_const_steps() {
        let a = Vector::ZERO;
        let b = vec(10.0, 0.0);
        assert_relative_eq!(a.lerp_const(b, 3.0).x, 3.0, epsilon = 1e-5);
        assert_eq!(a.lerp_const(b, 3.0).y, 0.0);
        assert_eq!(a.lerp_const(b, 10.0), b);
        assert_eq!(a.lerp_const(b, 25.0), b);
    }

    #[test]
    fn lerp_const_lands_on_inexact_target() {
        let a = vec(0.37, 0.1);
        let b = vec(13.1, 0.013);
        assert_eq!(a.lerp_const(b, 1e9), b);
    }

    #[test]
    fn slerp_quarter_turn() {
        let a = vec(1.0, 0.0);
        let b = vec(0.0, 1.0);
        let start = a.slerp(b, 0.0);
        let end = a.slerp(b, 1.0);
        let mid = a.slerp(b, 0.5);
        assert!(vector_eq(start, a, 1e-6));
        assert!(vector_eq(end, b, 1e-6));
        assert_relative_eq!(mid.x, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_relative_eq!(mid.y, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_relative_eq!(mid.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn slerp_keeps_unit_length_along_arc() {
        let a = vec(1.0, 0.0);
        let b = Vector::for_angle(2.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let s = a.slerp(b, t);
            assert_relative_eq!(s.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(s.to_angle(), 2.0 * t, epsilon = 1e-5);
        }
    }

    #[test]
    fn slerp_near_parallel_is_lerp() {
        let a = vec(3.0, 0.0);
        let b = vec(5.0, 0.001);
        assert_eq!(a.slerp(b, 0.3), a.lerp(b, 0.3));
        assert_eq!(a.slerp(a * 2.0, 0.5), a.lerp(a * 2.0, 0.5));
    }

    #[test]
    fn slerp_const_limits_turn() {
        let a = vec(1.0, 0.0);
        let b = vec(0.0, 1.0);
        let s = a.slerp_const(b, 0.1);
        assert_relative_eq!(s.to_angle(), 0.1, epsilon = 1e-5);
        assert_relative_eq!(s.length(), 1.0, epsilon = 1e-5);
        assert!(vector_eq(a.slerp_const(b, 3.0), b, 1e-6));
    }

    #[test]
    fn slerp_const_same_direction_is_identity() {
        let a = vec(1.0, 0.0);
        assert_eq!(a.slerp_const(a, 0.5), a);
        assert_eq!(a.slerp_const(vec(4.0, 0.0), 0.5), a);
    }

    #[quickcheck]
    fn add_neg_is_zero(a: Vector) -> bool {
        a + -a == Vector::ZERO && a - a == Vector::ZERO
    }

    #[quickcheck]
    fn dot_commutes(a: Vector, b: Vector) -> bool {
        a.dot(b) == b.dot(a)
    }

    #[quickcheck]
    fn cross_anticommutes(a: Vector, b: Vector) -> bool {
        a.cross(b) == -b.cross(a) && a.cross(a) == 0.0
    }

    #[quickcheck]
    fn double_perp_is_neg(a: Vector) -> bool {
        a.perp().perp() == -a
    }

    #[quickcheck]
    fn rotate_round_trip(a: Vector, theta: i16) -> bool {
        let rotor = Vector::for_angle(f32::from(theta) / 100.0);
        vector_eq(a.rotate(rotor).unrotate(rotor), a, 1e-2)
    }

    #[quickcheck]
    fn lerp_hits_endpoints(a: Vector, b: Vector) -> bool {
        a.lerp(b, 0.0) == a && a.lerp(b, 1.0) == b
    }

    #[quickcheck]
    fn lerp_is_monotone(a: Vector, b: Vector) -> bool {
        let total = a.distance(b);
        let mut last = 0.0;
        (0..=8).all(|i| {
            let d = a.distance(a.lerp(b, i as f32 / 8.0));
            let ok = d + 1e-2 >= last && d <= total + 1e-2;
            last = d;
            ok
        })
    }

    #[quickcheck]
    fn lerp_const_never_overshoots(a: Vector, b: Vector, d: u16) -> bool {
        let d = f32::from(d) / 16.0;
        let r = a.lerp_const(b, d);
        a.distance(r) <= d + 1e-2 && r.distance(b) <= a.distance(b) + 1e-2
    }

    #[quickcheck]
    fn lerp_const_within_reach_is_exact(a: Vector, b: Vector) -> bool {
        a.lerp_const(b, a.distance(b) + 1.0) == b
    }

    #[quickcheck]
    fn clamp_length_bounds(a: Vector, l: u16) -> bool {
        let l = f32::from(l) / 16.0;
        let c = a.clamp_length(l);
        let short_unchanged = a.length_sq() > l * l || c == a;
        c.length() <= l * (1.0 + 1e-5) + 1e-3 && short_unchanged
    }

    #[quickcheck]
    fn slerp_hits_endpoints(a: Vector, b: Vector) -> bool {
        if a == Vector::ZERO || b == Vector::ZERO {
            return true;
        }
        let tolerance = 1e-3 * (1.0 + a.length().max(b.length()));
        vector_eq(a.slerp(b, 0.0), a, tolerance) && vector_eq(a.slerp(b, 1.0), b, tolerance)
    }
}

//! Narrow-phase helpers for separating-axis and swept-point tests.
//!
//! These are plain predicates over [`Vector`] values with no body or contact state. The
//! algebraic forms are load-bearing: callers rely on their exact sign conventions.
//!
//! `closest_t`, `lerp_t` and `closest_dist` share one parameterisation of the line through
//! two points: `t = -1` is the first point, `t = 1` the second, `t = 0` their midpoint.

use super::scalar::{clamp, clamp01};
use super::vector::Vector;

impl Vector {
    /// Orientation test of `self` and partner point `b` around reference point `c`.
    pub fn point_greater(self, b: Vector, c: Vector) -> bool {
        (b.y - self.y) * (self.x + b.x - 2.0 * c.x) > (b.x - self.x) * (self.y + b.y - 2.0 * c.y)
    }

    /// Whether `p` projected onto axis `n` does not reach past the further of `self` and
    /// `v1` on that axis. A NaN projection makes the test fail.
    pub fn check_axis(self, v1: Vector, p: Vector, n: Vector) -> bool {
        let (a, b) = (self.dot(n), v1.dot(n));
        // f32::max would drop a NaN operand
        let far = if a.is_nan() || b.is_nan() {
            f32::NAN
        } else if a > b {
            a
        } else {
            b
        };
        p.dot(n) <= far
    }

    /// Parameter in `[-1, 1]` of the point between `self` and `b` closest to the origin.
    ///
    /// When `self == b` the `0/0` ratio clamps to `-1`, giving `t = 1`.
    pub fn closest_t(self, b: Vector) -> f32 {
        let delta = b - self;
        -clamp(delta.dot(self + b) / delta.length_sq(), -1.0, 1.0)
    }

    pub fn lerp_t(self, b: Vector, t: f32) -> Vector {
        let ht = 0.5 * t;
        self * (0.5 - ht) + b * (0.5 + ht)
    }

    /// Squared distance from the origin to the segment between `self` and `v1`.
    pub fn closest_dist(self, v1: Vector) -> f32 {
        self.lerp_t(v1, self.closest_t(v1)).length_sq()
    }

    /// Nearest point to `self` on the segment `a`-`b`.
    ///
    /// A zero-length segment (`a == b`) divides zero by zero. The NaN parameter clamps to
    /// the far end, so the segment's single point comes back.
    pub fn closest_point_on_segment(self, a: Vector, b: Vector) -> Vector {
        let delta = a - b;
        let t = clamp01(delta.dot(self - b) / delta.length_sq());
        b + delta * t
    }
}

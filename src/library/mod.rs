//! Vector type and the free helpers built around it.
//!
//! - [`vector`] holds [`Vector`] itself: construction, algebra and interpolation
//! - [`collision`] adds the narrow-phase geometry predicates to [`Vector`]
//! - [`scalar`] holds the `f32` clamp and interpolation helpers

pub mod collision;
pub mod scalar;
pub mod vector;

pub use scalar::{clamp, clamp01, lerp, lerp_const};
pub use vector::{Vector, vec};

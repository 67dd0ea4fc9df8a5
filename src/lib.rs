//! Planar vector algebra for small 2D games.
//!
//! Everything lives under [`library`]: the [`library::Vector`] value type with its
//! arithmetic, interpolation and collision helpers, plus a handful of scalar helpers
//! that share the same clamping and constant-speed semantics.
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod library;

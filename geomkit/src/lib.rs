//! Vectors, points, lines and shapes for 2D (and a little 3D) geometry.
//!
//! The plain operations never fail: a zero-length vector normalizes to NaN
//! components and an out-of-range cosine makes `angle` NaN, exactly as the
//! underlying IEEE-754 arithmetic dictates. The `try_*` operations check
//! their inputs and report a [`error::GeomError`] instead.
//!
//! None of the types carry interior mutability. Sharing a mutable vector
//! between threads needs the caller's own synchronization.

pub mod error;
pub mod geom;

//! Geometry primitives used across trellis.
//!
//! Widget coordinates are signed: a child may sit partly outside its
//! parent's children area, and absolute positions are computed by summing
//! offsets along the parent chain.

/// Error types for geometry operations.
mod error;
/// Bevel frame helpers.
mod frame;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use error::{Error, Result};
pub use frame::Frame;
pub use point::Point;
pub use rect::Rect;

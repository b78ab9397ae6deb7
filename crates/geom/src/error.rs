use std::{error, fmt};

use crate::Point;

/// Geometry errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A point expected inside a rectangle fell outside it.
    OutsideRect(Point),
    /// A border is too thick for the rectangle it is applied to.
    BorderTooLarge {
        /// Requested border width.
        border: u32,
        /// Width of the rectangle.
        w: u32,
        /// Height of the rectangle.
        h: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideRect(p) => write!(f, "point ({}, {}) outside rectangle", p.x, p.y),
            Self::BorderTooLarge { border, w, h } => {
                write!(f, "border {border} does not fit a {w}x{h} rectangle")
            }
        }
    }
}

impl error::Error for Error {}

/// Result alias for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

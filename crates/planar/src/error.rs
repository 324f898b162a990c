//! Construction errors shared by every shape.

use std::fmt;

use thiserror::Error;

/// Named invariant a constructor enforces. Display gives the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Invariant {
    /// Both endpoints of a line coincide.
    LineDistinctPoints,
    /// Both corners of a rectangle (or square) coincide.
    RectangleDistinctPoints,
    /// Corners share an x or a y coordinate.
    NonDegenerateDimensions,
    /// Width and height differ.
    EqualSides,
    /// Two of the triangle's vertices coincide.
    TriangleDistinctPoints,
    /// Triangle vertices lie on one line (|det| < `EPSILON`).
    NonCollinear,
    /// A radius is below `EPSILON`.
    PositiveRadius,
}

impl Invariant {
    pub fn message(self) -> &'static str {
        match self {
            Invariant::LineDistinctPoints => {
                "A line cannot be formed by identical points (a and b must be distinct)."
            }
            Invariant::RectangleDistinctPoints => "A rectangle cannot be formed by identical points.",
            Invariant::NonDegenerateDimensions => {
                "A rectangle cannot be formed without width or height."
            }
            Invariant::EqualSides => "A square cannot be formed with unequal length and width.",
            Invariant::TriangleDistinctPoints => "A triangle cannot be formed by identical points.",
            Invariant::NonCollinear => "A triangle cannot be formed by collinear points",
            Invariant::PositiveRadius => "An ellipse cannot be formed with a non-positive radius.",
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors surfaced by shape constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{0}")]
    InvalidGeometry(Invariant),
}

impl GeometryError {
    /// The invariant that was violated.
    pub fn invariant(&self) -> Invariant {
        match self {
            GeometryError::InvalidGeometry(inv) => *inv,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Fail construction with `inv` unless `ok` holds.
#[inline]
pub(crate) fn require(ok: bool, shape: &'static str, inv: Invariant) -> Result<()> {
    if ok {
        Ok(())
    } else {
        tracing::debug!(shape, invariant = ?inv, "rejected construction: {inv}");
        Err(GeometryError::InvalidGeometry(inv))
    }
}

//! Planar shapes with construction-time validation.
//!
//! Layout
//! - `point`: `Point` values and shared `PointRef` handles.
//! - `shapes`: `Line`, `Ellipse` (and circles), `Rectangle`, `Square`, `Triangle`.
//! - `shape`: the `Translate` and `Area` capabilities.
//! - `error`: `GeometryError::InvalidGeometry` with the violated `Invariant`.
//! - `cfg`: fixed tolerances.
//!
//! Conventions
//! - Constructors fail fast; a rejected input never yields a shape.
//! - `translate`, `area`, `slope` and `length` are total on valid shapes.

pub mod cfg;
pub mod error;
pub mod point;
pub mod shape;
pub mod shapes;

pub use error::{GeometryError, Invariant, Result};
pub use point::{Point, PointRef};
pub use shape::{Area, Translate};
pub use shapes::{Ellipse, Line, Rectangle, Square, Triangle};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::EPSILON;
    pub use crate::error::{GeometryError, Invariant};
    pub use crate::point::{Point, PointRef};
    pub use crate::shape::{Area, Translate};
    pub use crate::shapes::{Ellipse, Line, Rectangle, Square, Triangle};
}

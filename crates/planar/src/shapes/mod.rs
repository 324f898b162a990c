//! Composite shapes built from `PointRef`s.
//!
//! Every constructor validates eagerly and returns `GeometryError` on the first
//! violated invariant; there is no partially built shape.
//! Translation delegates to each owned point handle.

mod ellipse;
mod line;
mod rectangle;
mod triangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::{Rectangle, Square};
pub use triangle::{signed_determinant, Triangle};

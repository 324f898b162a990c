//! Capabilities shared across shapes.
//!
//! - `Translate`: in-place translation; composite shapes delegate to every owned point.
//! - `Area`: enclosed area, recomputed from current coordinates on each call.

/// In-place translation by `(dx, dy)`. Total; never allocates a new shape.
pub trait Translate {
    fn translate(&mut self, dx: f64, dy: f64);
}

/// Shapes that enclose a region.
pub trait Area {
    fn area(&self) -> f64;
}

//! Axis-aligned rectangles and squares given by two opposite corners.
//!
//! `Square` wraps a `Rectangle` and adds the equal-sides check; everything else
//! (area, translation, corner access) delegates to the inner rectangle, so a
//! square can be used wherever `AsRef<Rectangle>` is accepted.

use crate::error::{require, Invariant, Result};
use crate::point::PointRef;
use crate::shape::{Area, Translate};

/// Invariants (checked at construction):
/// - `p1 != p2`.
/// - `p1.x != p2.x` and `p1.y != p2.y` (non-zero width and height).
#[derive(Clone, Debug)]
pub struct Rectangle {
    p1: PointRef,
    p2: PointRef,
}

impl Rectangle {
    pub fn new(p1: impl Into<PointRef>, p2: impl Into<PointRef>) -> Result<Self> {
        let (p1, p2) = (p1.into(), p2.into());
        let (a, b) = (p1.get(), p2.get());
        require(a != b, "rectangle", Invariant::RectangleDistinctPoints)?;
        require(
            a.x() != b.x() && a.y() != b.y(),
            "rectangle",
            Invariant::NonDegenerateDimensions,
        )?;
        Ok(Self { p1, p2 })
    }
    #[inline]
    pub fn p1(&self) -> &PointRef {
        &self.p1
    }
    #[inline]
    pub fn p2(&self) -> &PointRef {
        &self.p2
    }
    /// `|p1.x - p2.x|`
    #[inline]
    pub fn width(&self) -> f64 {
        (self.p1.x() - self.p2.x()).abs()
    }
    /// `|p1.y - p2.y|`
    #[inline]
    pub fn height(&self) -> f64 {
        (self.p1.y() - self.p2.y()).abs()
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl Translate for Rectangle {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.p1.translate(dx, dy);
        self.p2.translate(dx, dy);
    }
}

/// Rectangle with `width == height` exactly (no tolerance).
#[derive(Clone, Debug)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Rectangle checks first, then equal sides.
    pub fn new(p1: impl Into<PointRef>, p2: impl Into<PointRef>) -> Result<Self> {
        let rect = Rectangle::new(p1, p2)?;
        require(rect.width() == rect.height(), "square", Invariant::EqualSides)?;
        Ok(Self { rect })
    }
    #[inline]
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }
    #[inline]
    pub fn p1(&self) -> &PointRef {
        self.rect.p1()
    }
    #[inline]
    pub fn p2(&self) -> &PointRef {
        self.rect.p2()
    }
    #[inline]
    pub fn side(&self) -> f64 {
        self.rect.width()
    }
}

impl AsRef<Rectangle> for Square {
    #[inline]
    fn as_ref(&self) -> &Rectangle {
        &self.rect
    }
}

impl AsRef<Rectangle> for Rectangle {
    #[inline]
    fn as_ref(&self) -> &Rectangle {
        self
    }
}

impl From<Square> for Rectangle {
    #[inline]
    fn from(sq: Square) -> Self {
        sq.rect
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.rect.area()
    }
}

impl Translate for Square {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.rect.translate(dx, dy);
    }
}

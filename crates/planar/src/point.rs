//! Points: the plain `Point` value and the shared `PointRef` handle shapes hold.
//!
//! Aliasing contract
//! - Shapes store `PointRef`s. Handing the same `PointRef` (cloned) to several
//!   shapes makes them share that point: translating any owner moves it for all.
//! - Handing a `Point` value creates a fresh, exclusively owned handle.
//! - Handles are `Rc`-based and therefore single-threaded.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use nalgebra::Vector2;

use crate::shape::Translate;

/// A 2D coordinate. Equality is exact on both coordinates (no tolerance).
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }
}

impl Translate for Point {
    #[inline]
    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// Coordinates are assumed finite; NaN is outside the domain.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so fold the sign of zero before hashing the bits.
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Shared, mutable handle to a `Point`. `clone()` aliases; `detach()` copies.
#[derive(Clone, Debug, Default)]
pub struct PointRef(Rc<RefCell<Point>>);

impl PointRef {
    pub fn new(p: Point) -> Self {
        Self(Rc::new(RefCell::new(p)))
    }
    /// Current value of the shared point.
    #[inline]
    pub fn get(&self) -> Point {
        *self.0.borrow()
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.get().x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.get().y
    }
    /// True if both handles refer to the same point instance.
    #[inline]
    pub fn ptr_eq(&self, other: &PointRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
    /// Independent handle with the current coordinates.
    pub fn detach(&self) -> PointRef {
        PointRef::new(self.get())
    }
}

impl Translate for PointRef {
    #[inline]
    fn translate(&mut self, dx: f64, dy: f64) {
        self.0.borrow_mut().translate(dx, dy);
    }
}

impl From<Point> for PointRef {
    #[inline]
    fn from(p: Point) -> Self {
        PointRef::new(p)
    }
}

impl From<&PointRef> for PointRef {
    #[inline]
    fn from(p: &PointRef) -> Self {
        p.clone()
    }
}

impl fmt::Display for PointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(p: &Point) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    #[test]
    fn construction_sets_coordinates() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }

    #[test]
    fn translate_updates_in_place() {
        let mut p = Point::new(5.0, 7.0);
        p.translate(2.0, -3.0);
        assert_eq!((p.x(), p.y()), (7.0, 4.0));
        p.translate(-7.0, -4.0);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn copies_are_independent() {
        let original = Point::new(1.0, 2.0);
        let mut copy = original;
        copy.translate(10.0, 10.0);
        assert_eq!(original, Point::new(1.0, 2.0));
        assert_eq!(copy, Point::new(11.0, 12.0));
    }

    #[test]
    fn equality_and_hash_agree() {
        let a = Point::new(3.5, -1.25);
        let b = Point::new(3.5, -1.25);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Point::new(-1.25, 3.5));
        // Signed zeros compare equal and must hash alike.
        assert_eq!(Point::new(0.0, -0.0), Point::new(-0.0, 0.0));
        assert_eq!(hash_of(&Point::new(0.0, -0.0)), hash_of(&Point::new(-0.0, 0.0)));
    }

    #[test]
    fn never_equal_to_absence() {
        let p = Some(Point::new(1.0, 1.0));
        assert_ne!(p, None);
    }

    #[test]
    fn hash_set_distinguishes_points() {
        let set: HashSet<Point> = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn distance_and_vector_bridge() {
        let a = Point::new(0.0, 0.0);
        let b = Point::from(Vector2::new(3.0, 4.0));
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(b.to_vector(), Vector2::new(3.0, 4.0));
        assert_eq!(b.to_string(), "(3, 4)");
    }

    #[test]
    fn cloned_handles_alias_detached_do_not() {
        let mut shared = PointRef::new(Point::new(1.0, 1.0));
        let alias = shared.clone();
        let detached = shared.detach();
        shared.translate(2.0, 3.0);
        assert!(alias.ptr_eq(&shared));
        assert_eq!(alias.get(), Point::new(3.0, 4.0));
        assert!(!detached.ptr_eq(&shared));
        assert_eq!(detached.get(), Point::new(1.0, 1.0));
    }
}

use std::f64::consts::PI;

use crate::cfg::EPSILON;
use crate::error::{require, Invariant, Result};
use crate::point::PointRef;
use crate::shape::{Area, Translate};

/// Axis-aligned ellipse. A circle is the case `radius_x == radius_y`.
///
/// Invariants:
/// - Both radii are `>= EPSILON`.
/// - Radii never change; translation only moves the center.
#[derive(Clone, Debug)]
pub struct Ellipse {
    center: PointRef,
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(center: impl Into<PointRef>, radius_x: f64, radius_y: f64) -> Result<Self> {
        // Written so that NaN radii are rejected as well.
        let ok = radius_x >= EPSILON && radius_y >= EPSILON;
        require(ok, "ellipse", Invariant::PositiveRadius)?;
        Ok(Self {
            center: center.into(),
            radius_x,
            radius_y,
        })
    }

    /// Circle of the given radius.
    pub fn circle(center: impl Into<PointRef>, radius: f64) -> Result<Self> {
        Self::new(center, radius, radius)
    }

    #[inline]
    pub fn center(&self) -> &PointRef {
        &self.center
    }
    #[inline]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }
    #[inline]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
    #[inline]
    pub fn is_circle(&self) -> bool {
        self.radius_x == self.radius_y
    }
}

impl Area for Ellipse {
    fn area(&self) -> f64 {
        PI * self.radius_x * self.radius_y
    }
}

impl Translate for Ellipse {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.center.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    const ORIGIN: Point = Point::new(0.0, 0.0);

    #[test]
    fn area_is_pi_rx_ry() {
        let e = Ellipse::new(ORIGIN, 5.0, 3.0).unwrap();
        assert!((e.area() - 15.0 * PI).abs() < 1e-9);
        let e = Ellipse::new(ORIGIN, 1.5, 2.5).unwrap();
        assert!((e.area() - 3.75 * PI).abs() < 1e-9);
        assert!(!e.is_circle());
    }

    #[test]
    fn circle_uses_one_radius() {
        let c = Ellipse::circle(Point::new(1.0, 2.0), 2.5).unwrap();
        assert!(c.is_circle());
        assert_eq!((c.radius_x(), c.radius_y()), (2.5, 2.5));
        assert!((c.area() - 6.25 * PI).abs() < 1e-9);
    }

    #[test]
    fn non_positive_radius_rejected() {
        for (rx, ry) in [(0.0, 3.0), (-5.0, 3.0), (5.0, 0.0), (5.0, -3.0), (1e-10, 1.0)] {
            let err = Ellipse::new(ORIGIN, rx, ry).unwrap_err();
            assert_eq!(err.invariant(), Invariant::PositiveRadius, "rx={rx} ry={ry}");
        }
        let err = Ellipse::circle(ORIGIN, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "An ellipse cannot be formed with a non-positive radius."
        );
        assert!(Ellipse::circle(ORIGIN, f64::NAN).is_err());
        assert!(Ellipse::circle(ORIGIN, EPSILON).is_ok());
    }

    #[test]
    fn translate_moves_center_only() {
        let mut e = Ellipse::new(Point::new(1.0, 1.0), 5.0, 3.0).unwrap();
        let before = e.area();
        e.translate(2.0, -4.0);
        assert_eq!(e.center().get(), Point::new(3.0, -3.0));
        assert_eq!((e.radius_x(), e.radius_y()), (5.0, 3.0));
        assert!((e.area() - before).abs() < 1e-9);
    }
}

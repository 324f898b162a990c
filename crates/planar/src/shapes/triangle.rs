use nalgebra::Matrix2;

use crate::cfg::EPSILON;
use crate::error::{require, Invariant, Result};
use crate::point::{Point, PointRef};
use crate::shape::{Area, Translate};

/// Triangle with three pairwise distinct, non-collinear vertices.
///
/// Area is recomputed from the current vertex positions on every call.
#[derive(Clone, Debug)]
pub struct Triangle {
    p1: PointRef,
    p2: PointRef,
    p3: PointRef,
}

/// Signed area of the parallelogram spanned by `p2 - p1` and `p3 - p1`.
/// Positive for counterclockwise order, zero iff the points are collinear.
#[inline]
pub fn signed_determinant(p1: Point, p2: Point, p3: Point) -> f64 {
    let m = Matrix2::from_columns(&[
        p2.to_vector() - p1.to_vector(),
        p3.to_vector() - p1.to_vector(),
    ]);
    m.determinant()
}

impl Triangle {
    /// Checks all three pairs for identical points, then collinearity.
    pub fn new(
        p1: impl Into<PointRef>,
        p2: impl Into<PointRef>,
        p3: impl Into<PointRef>,
    ) -> Result<Self> {
        let (p1, p2, p3) = (p1.into(), p2.into(), p3.into());
        let (a, b, c) = (p1.get(), p2.get(), p3.get());
        require(
            a != b && a != c && b != c,
            "triangle",
            Invariant::TriangleDistinctPoints,
        )?;
        require(
            signed_determinant(a, b, c).abs() >= EPSILON,
            "triangle",
            Invariant::NonCollinear,
        )?;
        Ok(Self { p1, p2, p3 })
    }
    #[inline]
    pub fn p1(&self) -> &PointRef {
        &self.p1
    }
    #[inline]
    pub fn p2(&self) -> &PointRef {
        &self.p2
    }
    #[inline]
    pub fn p3(&self) -> &PointRef {
        &self.p3
    }
    /// Signed determinant of the current vertices.
    pub fn determinant(&self) -> f64 {
        signed_determinant(self.p1.get(), self.p2.get(), self.p3.get())
    }
}

impl Area for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.determinant().abs()
    }
}

impl Translate for Triangle {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.p1.translate(dx, dy);
        self.p2.translate(dx, dy);
        self.p3.translate(dx, dy);
    }
}

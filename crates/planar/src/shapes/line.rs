use crate::error::{require, Invariant, Result};
use crate::point::PointRef;
use crate::shape::Translate;

/// Segment between two distinct points. Slope and length are derived on demand.
#[derive(Clone, Debug)]
pub struct Line {
    a: PointRef,
    b: PointRef,
}

impl Line {
    /// Fails with `LineDistinctPoints` if `a == b` by value.
    pub fn new(a: impl Into<PointRef>, b: impl Into<PointRef>) -> Result<Self> {
        let (a, b) = (a.into(), b.into());
        require(a.get() != b.get(), "line", Invariant::LineDistinctPoints)?;
        Ok(Self { a, b })
    }
    #[inline]
    pub fn a(&self) -> &PointRef {
        &self.a
    }
    #[inline]
    pub fn b(&self) -> &PointRef {
        &self.b
    }

    /// `dy / dx`; `f64::INFINITY` for a vertical line.
    pub fn slope(&self) -> f64 {
        let (a, b) = (self.a.get(), self.b.get());
        if a.x() == b.x() {
            return f64::INFINITY;
        }
        (b.y() - a.y()) / (b.x() - a.x())
    }

    pub fn length(&self) -> f64 {
        self.a.get().distance(&self.b.get())
    }
}

impl Translate for Line {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.a.translate(dx, dy);
        self.b.translate(dx, dy);
    }
}

//! Tolerance defaults for shape validation.
//!
//! Policy
//! - Fixed constants; there is no runtime knob. Ellipse radii and triangle
//!   collinearity use `EPSILON`. Square's equal-sides check is exact and does
//!   not consult this module.

/// Smallest admissible radius and smallest |determinant| of a non-collinear triple.
pub const EPSILON: f64 = 1e-9;

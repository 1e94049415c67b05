// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic-interpolation solvers.
//!
//! Two solvers back the curved line modes: a natural cubic spline (C²
//! through the knots, zero boundary curvature) and Fritsch–Carlson monotone
//! cubic Hermite tangents. Both operate on raw coordinate sequences; path
//! emission lives in [`crate::curve`].

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::GeomError;

/// Bézier control values for the segments of a natural cubic spline.
///
/// Segment `i` runs between knots `i` and `i + 1` and uses `c1[i]`/`c2[i]`
/// as its two cubic control values along the solved coordinate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplineControls {
    /// First control value per segment.
    pub c1: Vec<f64>,
    /// Second control value per segment.
    pub c2: Vec<f64>,
}

/// Solves natural-cubic-spline control values for knots at `values`.
///
/// Knots are treated as uniformly spaced (unit spacing) and the boundary
/// second derivatives are zero, giving a C² continuous curve through every
/// knot. Fewer than two knots produce empty control vectors; callers are
/// expected to fall back to straight segments below three knots.
pub fn natural_controls(values: &[f64]) -> SplineControls {
    let n = values.len().saturating_sub(1);
    let mut c1 = alloc::vec![0.0_f64; n];
    let mut c2 = alloc::vec![0.0_f64; n];
    if n == 0 {
        return SplineControls { c1, c2 };
    }

    // Thomas-algorithm solve of the tridiagonal system for the first
    // control values; the second control values follow by reflection.
    let mut sub = alloc::vec![0.0_f64; n];
    let mut diag = alloc::vec![0.0_f64; n];
    let mut sup = alloc::vec![0.0_f64; n];
    let mut rhs = alloc::vec![0.0_f64; n];

    diag[0] = 2.0;
    sup[0] = 1.0;
    rhs[0] = values[0] + 2.0 * values[1];

    for i in 1..n.saturating_sub(1) {
        sub[i] = 1.0;
        diag[i] = 4.0;
        sup[i] = 1.0;
        rhs[i] = 4.0 * values[i] + 2.0 * values[i + 1];
    }

    if n > 1 {
        sub[n - 1] = 2.0;
        diag[n - 1] = 7.0;
        rhs[n - 1] = 8.0 * values[n - 1] + values[n];
    } else {
        // Single segment (2 knots): the caller renders a straight line, but
        // keep the solver stable anyway.
        rhs[0] = values[0] + values[1];
    }

    for i in 1..n {
        let m = sub[i] / diag[i - 1];
        diag[i] -= m * sup[i - 1];
        rhs[i] -= m * rhs[i - 1];
    }

    c1[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n.saturating_sub(1)).rev() {
        c1[i] = (rhs[i] - sup[i] * c1[i + 1]) / diag[i];
    }

    for i in 0..n.saturating_sub(1) {
        c2[i] = 2.0 * values[i + 1] - c1[i + 1];
    }
    c2[n - 1] = (values[n] + c1[n - 1]) / 2.0;

    SplineControls { c1, c2 }
}

/// Threshold below which a secant slope is treated as flat.
const FLAT_SLOPE: f64 = 1e-10;

/// Computes Fritsch–Carlson monotone-cubic Hermite tangents for the points
/// `(xs[i], ys[i])`.
///
/// Returns one tangent (dy/dx) per point, chosen so the Hermite curve
/// through the points preserves local monotonicity and never overshoots
/// between adjacent points:
/// - endpoint tangents are the boundary secant slopes;
/// - interior tangents start as the average of the two adjacent secants, or
///   zero when those secants disagree in sign;
/// - tangents at a flat segment (`|secant| < 1e-10`) are forced to zero;
/// - a tangent pair whose combined magnitude exceeds three times its
///   segment's secant slope is rescaled onto that limit.
///
/// Errors with [`GeomError::MismatchedLengths`] when the two sequences have
/// different lengths. Fewer than two points yield all-zero tangents.
pub fn monotone_tangents(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>, GeomError> {
    if xs.len() != ys.len() {
        return Err(GeomError::MismatchedLengths {
            left: xs.len(),
            right: ys.len(),
        });
    }
    let n = xs.len();
    let mut tangents = alloc::vec![0.0_f64; n];
    if n < 2 {
        return Ok(tangents);
    }

    let mut secants = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let dx = xs[i + 1] - xs[i];
        let dy = ys[i + 1] - ys[i];
        secants.push(if dx != 0.0 { dy / dx } else { 0.0 });
    }

    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        let (left, right) = (secants[i - 1], secants[i]);
        tangents[i] = if left * right <= 0.0 {
            0.0
        } else {
            (left + right) / 2.0
        };
    }

    for i in 0..n - 1 {
        let m = secants[i];
        if m.abs() < FLAT_SLOPE {
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
            continue;
        }
        let alpha = tangents[i] / m;
        let beta = tangents[i + 1] / m;
        let magnitude = alpha * alpha + beta * beta;
        if magnitude > 9.0 {
            let tau = 3.0 / magnitude.sqrt();
            tangents[i] = tau * alpha * m;
            tangents[i + 1] = tau * beta * m;
        }
    }

    Ok(tangents)
}

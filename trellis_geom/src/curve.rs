// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and area path construction.
//!
//! Points arriving here are already projected through scales; this module
//! only decides how to connect them. Output is a [`BezPath`] of
//! move/line/cubic/close elements, byte-identical across calls for
//! identical input.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::spline::{monotone_tangents, natural_controls};

/// Interpolation mode used to connect plotted points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurveMode {
    /// Straight segments between consecutive points.
    #[default]
    Linear,
    /// Horizontal-then-vertical steps: each value holds until the next x.
    StepAfter,
    /// Natural cubic spline, C² continuous with zero boundary curvature.
    Natural,
    /// Fritsch–Carlson monotone cubic; never overshoots between points.
    MonotoneX,
}

/// Builds an open polyline/curve through `points` using `mode`.
///
/// Empty input produces an empty path; a single point produces a lone move
/// command. The spline modes need at least three points and fall back to
/// [`CurveMode::Linear`] below that.
pub fn line_path(points: &[Point], mode: CurveMode) -> BezPath {
    let mut path = BezPath::new();
    append_edge(&mut path, points, mode, Join::Move);
    path
}

/// Builds a closed, fillable region: the curve through `points` joined to a
/// flat baseline at `baseline_y`.
///
/// The outline follows the top edge in `mode`, drops to
/// `(last.x, baseline_y)`, runs back to `(first.x, baseline_y)` and closes.
/// Any non-empty input therefore yields a path ending in a close command
/// whose start and end coincide, regardless of curve mode.
pub fn area_path(points: &[Point], baseline_y: f64, mode: CurveMode) -> BezPath {
    let mut path = BezPath::new();
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return path;
    };
    append_edge(&mut path, points, mode, Join::Move);
    path.line_to(Point::new(last.x, baseline_y));
    path.line_to(Point::new(first.x, baseline_y));
    path.close_path();
    path
}

/// How an edge attaches to the path being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Join {
    /// Start a new subpath at the first point.
    Move,
    /// Continue the current subpath with a line to the first point.
    Line,
}

/// Appends the curve through `points` to `path`.
///
/// Used directly by the stacked-area builder to trace a band: top edge with
/// `Join::Move`, then the reversed bottom edge with `Join::Line`.
pub(crate) fn append_edge(path: &mut BezPath, points: &[Point], mode: CurveMode, join: Join) {
    let Some(&first) = points.first() else {
        return;
    };
    match join {
        Join::Move => path.move_to(first),
        Join::Line => path.line_to(first),
    }
    if points.len() == 1 {
        return;
    }

    let mode = if points.len() < 3 && matches!(mode, CurveMode::Natural | CurveMode::MonotoneX) {
        CurveMode::Linear
    } else {
        mode
    };

    match mode {
        CurveMode::Linear => {
            for &p in &points[1..] {
                path.line_to(p);
            }
        }
        CurveMode::StepAfter => {
            let mut prev = first;
            for &p in &points[1..] {
                path.line_to(Point::new(p.x, prev.y));
                path.line_to(p);
                prev = p;
            }
        }
        CurveMode::Natural => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let cx = natural_controls(&xs);
            let cy = natural_controls(&ys);
            for i in 0..points.len() - 1 {
                path.curve_to(
                    Point::new(cx.c1[i], cy.c1[i]),
                    Point::new(cx.c2[i], cy.c2[i]),
                    points[i + 1],
                );
            }
        }
        CurveMode::MonotoneX => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            // The sequences are split from one point list, so the solver's
            // length check cannot fire here.
            if let Ok(tangents) = monotone_tangents(&xs, &ys) {
                for i in 0..points.len() - 1 {
                    let (p0, p1) = (points[i], points[i + 1]);
                    let dx = (p1.x - p0.x) / 3.0;
                    path.curve_to(
                        Point::new(p0.x + dx, p0.y + dx * tangents[i]),
                        Point::new(p1.x - dx, p1.y - dx * tangents[i + 1]),
                        p1,
                    );
                }
            }
        }
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar and arc geometry: slice allocation, sector paths, radar vertices.
//!
//! Angles throughout this module are radians in the chart convention:
//! 0 points at 12 o'clock and angles increase clockwise. Internally this is
//! the standard trigonometric placement rotated by `-π/2`; the screen y
//! axis points down, so increasing standard angle reads as clockwise.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::stack::SeriesKey;

/// Curve flattening tolerance used when converting circular arcs into
/// cubic path elements.
const ARC_TOLERANCE: f64 = 0.1;

/// One value entering polar slice allocation.
///
/// `color` and `label` are resolved upstream (theme/token resolution is a
/// rendering-layer concern) and carried through untouched.
#[derive(Clone, Debug)]
pub struct SliceEntry {
    /// Series key this value belongs to.
    pub key: SeriesKey,
    /// The raw value.
    pub value: f64,
    /// Resolved display color, passed through opaquely.
    pub color: Option<Color>,
    /// Display label, passed through opaquely.
    pub label: Option<String>,
}

impl SliceEntry {
    /// Creates an entry with no color or label attached.
    pub fn new(key: impl Into<SeriesKey>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
            color: None,
            label: None,
        }
    }

    /// Attaches a resolved display color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Attaches a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// One allocated wedge or ring segment of a polar chart.
///
/// `start_angle <= end_angle` always holds; zero-valued entries get a
/// zero-span slice.
#[derive(Clone, Debug)]
pub struct Slice {
    /// Series key.
    pub key: SeriesKey,
    /// The original value.
    pub value: f64,
    /// This value's share of the total, in `[0, 1]`.
    pub percentage: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Pass-through resolved color.
    pub color: Option<Color>,
    /// Pass-through display label.
    pub label: Option<String>,
}

impl Slice {
    /// Returns the slice's angular span.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns the slice's mid-angle, the usual label anchor.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Converts a polar coordinate to Cartesian.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> Point {
    let theta = angle - FRAC_PI_2;
    Point::new(cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// Allocates consecutive angular slices for `entries` over
/// `[start_angle, end_angle]`.
///
/// The sweep available to values is the full span minus `pad_angle` per
/// slice (clamped at zero); each slice's span is proportional to its share
/// of the total, and each slice is followed by `pad_angle` of gap.
/// Negative or non-finite values contribute nothing to the total. A zero
/// total yields an empty list — there is nothing to draw — rather than a
/// division by zero.
pub fn allocate_slices(
    entries: &[SliceEntry],
    start_angle: f64,
    end_angle: f64,
    pad_angle: f64,
) -> Vec<Slice> {
    let shares: Vec<f64> = entries
        .iter()
        .map(|e| {
            if e.value.is_finite() && e.value > 0.0 {
                e.value
            } else {
                0.0
            }
        })
        .collect();
    let total: f64 = shares.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let pad = pad_angle.max(0.0);
    let available = ((end_angle - start_angle) - pad * entries.len() as f64).max(0.0);

    let mut out = Vec::with_capacity(entries.len());
    let mut cursor = start_angle;
    for (entry, share) in entries.iter().zip(&shares) {
        let span = share / total * available;
        out.push(Slice {
            key: entry.key.clone(),
            value: entry.value,
            percentage: share / total,
            start_angle: cursor,
            end_angle: cursor + span,
            color: entry.color,
            label: entry.label.clone(),
        });
        cursor += span + pad;
    }
    out
}

/// Builds the closed path of a pie wedge or annular (donut) sector.
///
/// With `inner_radius <= 0` the result is a wedge with its apex at the
/// center; otherwise it is an annular sector bounded by both radii, with
/// radial joins between the outer and inner arcs. A non-positive or
/// non-finite outer radius yields an empty path; the inner radius is
/// clamped to `[0, outer_radius]`.
pub fn describe_arc(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> BezPath {
    if !outer_radius.is_finite() || outer_radius <= 0.0 {
        return BezPath::new();
    }
    let inner = if inner_radius.is_finite() {
        inner_radius.clamp(0.0, outer_radius)
    } else {
        0.0
    };
    let circle = Circle::new(Point::new(cx, cy), outer_radius);
    let segment = circle.segment(inner, start_angle - FRAC_PI_2, end_angle - start_angle);
    segment.path_elements(ARC_TOLERANCE).collect()
}

/// Places vertex `index` of `total` vertices spaced evenly around a full
/// circle of `radius`.
///
/// Vertex 0 sits at 12 o'clock and successive vertices advance clockwise
/// by `2π / total`. `total == 0` returns the center.
pub fn vertex_position(cx: f64, cy: f64, radius: f64, index: usize, total: usize) -> Point {
    if total == 0 {
        return Point::new(cx, cy);
    }
    polar_to_cartesian(cx, cy, radius, TAU * index as f64 / total as f64)
}

/// Builds one closed radar polygon for `values`, one vertex per category.
///
/// Vertex `i` sits on spoke `i` at `values[i] / max_value` of `radius`.
/// A non-positive `max_value` collapses every vertex to the center; an
/// empty value list yields an empty path.
pub fn radar_polygon(cx: f64, cy: f64, radius: f64, values: &[f64], max_value: f64) -> BezPath {
    let mut path = BezPath::new();
    if values.is_empty() {
        return path;
    }
    let total = values.len();
    for (i, &value) in values.iter().enumerate() {
        let r = if max_value > 0.0 {
            value / max_value * radius
        } else {
            0.0
        };
        let p = vertex_position(cx, cy, r, i, total);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use core::f64::consts::PI;

    use kurbo::PathEl;

    use super::*;

    #[test]
    fn polar_conversion_puts_angle_zero_at_twelve_oclock() {
        let p = polar_to_cartesian(50.0, 50.0, 10.0, 0.0);
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn polar_conversion_advances_clockwise() {
        // A quarter turn lands at 3 o'clock in screen coordinates.
        let p = polar_to_cartesian(0.0, 0.0, 10.0, FRAC_PI_2);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn simple_pie_spans_are_proportional() {
        let entries = vec![
            SliceEntry::new("a", 400.0),
            SliceEntry::new("b", 300.0),
            SliceEntry::new("c", 200.0),
            SliceEntry::new("d", 100.0),
        ];
        let slices = allocate_slices(&entries, 0.0, TAU, 0.0);
        let expected = [PI, 0.75 * PI, 0.5 * PI, 0.25 * PI];
        for (slice, want) in slices.iter().zip(expected) {
            assert!((slice.span() - want).abs() < 1e-9, "{}: {}", slice.key, slice.span());
        }
        let sum: f64 = slices.iter().map(Slice::span).sum();
        assert!((sum - TAU).abs() < 1e-9);
    }

    #[test]
    fn slice_sweep_plus_padding_is_conserved() {
        let entries = vec![
            SliceEntry::new("a", 5.0),
            SliceEntry::new("b", 3.0),
            SliceEntry::new("c", 2.0),
        ];
        let pad = 0.05;
        let slices = allocate_slices(&entries, 0.5, 4.5, pad);
        let sum: f64 = slices.iter().map(Slice::span).sum();
        assert!(
            (sum + pad * 3.0 - 4.0).abs() < 1e-9,
            "spans {sum} plus padding should fill the 4.0 sweep"
        );
        assert_eq!(slices[0].start_angle, 0.5);
    }

    #[test]
    fn zero_total_yields_no_slices() {
        let entries = vec![
            SliceEntry::new("a", 0.0),
            SliceEntry::new("b", 0.0),
            SliceEntry::new("c", 0.0),
        ];
        assert!(allocate_slices(&entries, 0.0, TAU, 0.0).is_empty());
    }

    #[test]
    fn negative_values_contribute_nothing() {
        let entries = vec![SliceEntry::new("a", -5.0), SliceEntry::new("b", 5.0)];
        let slices = allocate_slices(&entries, 0.0, TAU, 0.0);
        assert_eq!(slices[0].span(), 0.0);
        assert!((slices[1].span() - TAU).abs() < 1e-9);
        assert_eq!(slices[1].percentage, 1.0);
    }

    #[test]
    fn percentages_sum_to_one() {
        let entries = vec![
            SliceEntry::new("a", 1.0),
            SliceEntry::new("b", 2.0),
            SliceEntry::new("c", 7.0),
        ];
        let slices = allocate_slices(&entries, 0.0, TAU, 0.0);
        let sum: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn wedge_path_touches_the_center() {
        let path = describe_arc(10.0, 10.0, 5.0, 0.0, 0.0, PI);
        assert!(!path.elements().is_empty());
        let touches_center = path.elements().iter().any(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => (p.x - 10.0).abs() < 1e-6 && (p.y - 10.0).abs() < 1e-6,
            _ => false,
        });
        assert!(touches_center, "a pie wedge should have its apex at the center");
    }

    #[test]
    fn annular_sector_stays_between_the_radii() {
        let (outer, inner) = (20.0, 8.0);
        let path = describe_arc(0.0, 0.0, outer, inner, 0.0, 1.5 * PI);
        for el in path.elements() {
            let pts: &[Point] = match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => core::slice::from_ref(p),
                PathEl::CurveTo(_, _, p) => core::slice::from_ref(p),
                _ => &[],
            };
            for p in pts {
                let r = (p.x * p.x + p.y * p.y).sqrt();
                assert!(
                    r >= inner - 1e-6 && r <= outer + 1e-6,
                    "on-curve point at radius {r}"
                );
            }
        }
    }

    #[test]
    fn invalid_outer_radius_yields_an_empty_path() {
        assert!(describe_arc(0.0, 0.0, -3.0, 0.0, 0.0, PI).elements().is_empty());
        assert!(describe_arc(0.0, 0.0, f64::NAN, 0.0, 0.0, PI).elements().is_empty());
    }

    #[test]
    fn radar_vertices_are_spaced_evenly() {
        let total = 5;
        for i in 0..total {
            let p = vertex_position(0.0, 0.0, 1.0, i, total);
            let q = vertex_position(0.0, 0.0, 1.0, (i + 1) % total, total);
            let dot = p.x * q.x + p.y * q.y;
            let expected = (TAU / total as f64).cos();
            assert!((dot - expected).abs() < 1e-9, "vertices {i} and {}", i + 1);
        }
    }

    #[test]
    fn radar_polygon_closes_and_scales_by_max() {
        let path = radar_polygon(0.0, 0.0, 10.0, &[5.0, 10.0, 5.0], 10.0);
        let els = path.elements();
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
        // First vertex: half the max, straight up.
        assert_eq!(els.first(), Some(&PathEl::MoveTo(polar_to_cartesian(0.0, 0.0, 5.0, 0.0))));
    }
}

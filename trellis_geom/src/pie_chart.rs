// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut chart composition.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{BezPath, Point};

use crate::polar::{Slice, SliceEntry, allocate_slices, describe_arc, polar_to_cartesian};

/// Configuration for pie/donut slice geometry.
#[derive(Clone, Copy, Debug)]
pub struct PieChartSpec {
    /// Center in output pixels.
    pub center: Point,
    /// Inner radius; 0 for a pie, positive for a donut.
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in radians (chart convention, 0 at 12 o'clock).
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Gap between consecutive slices, in radians.
    pub pad_angle: f64,
}

impl PieChartSpec {
    /// Creates a full-circle pie spec with no inner radius or padding.
    pub fn new(center: Point, outer_radius: f64) -> Self {
        Self {
            center,
            inner_radius: 0.0,
            outer_radius,
            start_angle: 0.0,
            end_angle: TAU,
            pad_angle: 0.0,
        }
    }

    /// Sets the inner radius, turning the pie into a donut.
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Restricts the chart to the angular span `[start, end]`.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Sets the per-slice gap angle.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Allocates slices for `entries` and builds one sector path per slice.
    ///
    /// A zero-total entry list yields an empty chart (nothing is drawn);
    /// colors and labels on the entries pass through to the slices.
    pub fn build(&self, entries: &[SliceEntry]) -> PieChart {
        let slices = allocate_slices(entries, self.start_angle, self.end_angle, self.pad_angle);
        let paths = slices
            .iter()
            .map(|s| {
                describe_arc(
                    self.center.x,
                    self.center.y,
                    self.outer_radius,
                    self.inner_radius,
                    s.start_angle,
                    s.end_angle,
                )
            })
            .collect();
        PieChart { slices, paths }
    }

    /// Returns the label anchor for `slice`: its mid-angle at `radius` from
    /// the center.
    pub fn label_position(&self, slice: &Slice, radius: f64) -> Point {
        polar_to_cartesian(self.center.x, self.center.y, radius, slice.mid_angle())
    }
}

/// Computed pie geometry. `slices` and `paths` are index-aligned.
#[derive(Clone, Debug)]
pub struct PieChart {
    /// Allocated slices, in entry order.
    pub slices: Vec<Slice>,
    /// One sector path per slice.
    pub paths: Vec<BezPath>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn slices_and_paths_are_index_aligned() {
        let spec = PieChartSpec::new(Point::new(50.0, 50.0), 40.0);
        let chart = spec.build(&[
            SliceEntry::new("a", 2.0),
            SliceEntry::new("b", 1.0),
            SliceEntry::new("c", 1.0),
        ]);
        assert_eq!(chart.slices.len(), 3);
        assert_eq!(chart.paths.len(), 3);
        assert!(chart.paths.iter().all(|p| !p.elements().is_empty()));
    }

    #[test]
    fn zero_total_builds_an_empty_chart() {
        let spec = PieChartSpec::new(Point::new(0.0, 0.0), 40.0);
        let chart = spec.build(&[SliceEntry::new("a", 0.0), SliceEntry::new("b", 0.0)]);
        assert!(chart.slices.is_empty());
        assert!(chart.paths.is_empty());
    }

    #[test]
    fn label_position_sits_on_the_mid_angle() {
        let spec = PieChartSpec::new(Point::new(0.0, 0.0), 40.0);
        let chart = spec.build(&vec![SliceEntry::new("only", 1.0)]);
        // A lone full-circle slice has its mid-angle at 6 o'clock.
        let p = spec.label_position(&chart.slices[0], 10.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn entry_color_and_label_pass_through() {
        use peniko::color::palette::css;

        let spec = PieChartSpec::new(Point::new(0.0, 0.0), 40.0);
        let chart = spec.build(&[
            SliceEntry::new("a", 1.0)
                .with_color(css::TOMATO)
                .with_label("Alpha"),
        ]);
        assert_eq!(chart.slices[0].color, Some(css::TOMATO));
        assert_eq!(chart.slices[0].label.as_deref(), Some("Alpha"));
    }
}

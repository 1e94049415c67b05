// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial bar chart composition.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{BezPath, Point};

use crate::polar::describe_arc;
use crate::stack::{DataPoint, SeriesKey};

/// How series rings are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadialBarLayout {
    /// One ring per series, the largest total sweeping the full span.
    #[default]
    Concentric,
    /// One shared ring with the series' arcs laid end to end.
    StackedRing,
}

/// Configuration for radial bar geometry.
#[derive(Clone, Copy, Debug)]
pub struct RadialBarChartSpec {
    /// Center in output pixels.
    pub center: Point,
    /// Outer radius of the outermost ring.
    pub outer_radius: f64,
    /// Radial thickness of each ring.
    pub bar_width: f64,
    /// Radial gap between consecutive rings.
    pub gap: f64,
    /// Start angle in radians (chart convention, 0 at 12 o'clock).
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Ring arrangement.
    pub layout: RadialBarLayout,
}

impl RadialBarChartSpec {
    /// Creates a full-circle concentric spec.
    pub fn new(center: Point, outer_radius: f64, bar_width: f64) -> Self {
        Self {
            center,
            outer_radius,
            bar_width,
            gap: 2.0,
            start_angle: 0.0,
            end_angle: TAU,
            layout: RadialBarLayout::Concentric,
        }
    }

    /// Sets the radial gap between rings.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Restricts the chart to the angular span `[start, end]`.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Sets the ring arrangement.
    pub fn with_layout(mut self, layout: RadialBarLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Builds one annular arc per series from the series' totals over
    /// `data`.
    ///
    /// Negative and non-finite values contribute nothing to a total. In the
    /// concentric layout, rings shrink inward in caller key order and each
    /// sweep is proportional to the series' share of the largest total; in
    /// the stacked-ring layout, all arcs sit on the outermost ring end to
    /// end, proportional to the grand total. Either way a zero denominator
    /// means nothing to draw, so the result is empty.
    pub fn build(&self, data: &[DataPoint], series: &[SeriesKey]) -> Vec<RadialBar> {
        let totals: Vec<f64> = series
            .iter()
            .map(|key| {
                data.iter()
                    .map(|p| p.value(key))
                    .filter(|v| v.is_finite() && *v > 0.0)
                    .sum()
            })
            .collect();
        let span = self.end_angle - self.start_angle;

        match self.layout {
            RadialBarLayout::Concentric => {
                let max_total = totals.iter().fold(0.0, |a: f64, &b| a.max(b));
                if max_total <= 0.0 {
                    return Vec::new();
                }
                series
                    .iter()
                    .zip(&totals)
                    .enumerate()
                    .map(|(i, (key, &total))| {
                        let ring_radius =
                            self.outer_radius - i as f64 * (self.bar_width + self.gap);
                        let end_angle = self.start_angle + span * total / max_total;
                        RadialBar {
                            key: key.clone(),
                            ring_radius,
                            start_angle: self.start_angle,
                            end_angle,
                            path: self.arc(ring_radius, self.start_angle, end_angle),
                        }
                    })
                    .collect()
            }
            RadialBarLayout::StackedRing => {
                let grand_total: f64 = totals.iter().sum();
                if grand_total <= 0.0 {
                    return Vec::new();
                }
                let mut cursor = self.start_angle;
                series
                    .iter()
                    .zip(&totals)
                    .map(|(key, &total)| {
                        let start_angle = cursor;
                        cursor += span * total / grand_total;
                        RadialBar {
                            key: key.clone(),
                            ring_radius: self.outer_radius,
                            start_angle,
                            end_angle: cursor,
                            path: self.arc(self.outer_radius, start_angle, cursor),
                        }
                    })
                    .collect()
            }
        }
    }

    fn arc(&self, ring_radius: f64, start_angle: f64, end_angle: f64) -> BezPath {
        let inner = (ring_radius - self.bar_width).max(0.0);
        describe_arc(
            self.center.x,
            self.center.y,
            ring_radius,
            inner,
            start_angle,
            end_angle,
        )
    }
}

/// One series' ring arc.
#[derive(Clone, Debug)]
pub struct RadialBar {
    /// Series key.
    pub key: SeriesKey,
    /// Outer radius of this ring.
    pub ring_radius: f64,
    /// Arc start angle in radians.
    pub start_angle: f64,
    /// Arc end angle in radians.
    pub end_angle: f64,
    /// Annular sector path for the arc.
    pub path: BezPath,
}

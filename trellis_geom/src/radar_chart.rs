// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar (spider) chart composition.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::polar::{radar_polygon, vertex_position};
use crate::stack::{DataPoint, SeriesKey};

/// Configuration for radar chart geometry.
#[derive(Clone, Copy, Debug)]
pub struct RadarChartSpec {
    /// Center in output pixels.
    pub center: Point,
    /// Radius of the outermost grid ring.
    pub radius: f64,
    /// Number of concentric grid rings.
    pub grid_levels: usize,
}

impl RadarChartSpec {
    /// Creates a spec with five grid rings.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            grid_levels: 5,
        }
    }

    /// Sets the number of concentric grid rings.
    pub fn with_grid_levels(mut self, grid_levels: usize) -> Self {
        self.grid_levels = grid_levels;
        self
    }

    /// Builds grid rings, spokes and one closed polygon per series.
    ///
    /// One spoke (and one polygon vertex) exists per data point, evenly
    /// spaced clockwise from 12 o'clock. Every series shares one value
    /// scale — the maximum value across all series and points — so shapes
    /// are directly comparable. Empty data yields an empty chart.
    pub fn build(&self, data: &[DataPoint], series: &[SeriesKey]) -> RadarChart {
        if data.is_empty() {
            return RadarChart {
                grid: Vec::new(),
                spokes: Vec::new(),
                series: Vec::new(),
                max_value: 0.0,
            };
        }

        let max_value = data
            .iter()
            .flat_map(|p| series.iter().map(|k| p.value(k)))
            .fold(0.0, f64::max);

        let count = data.len();
        let full: Vec<f64> = alloc::vec![1.0; count];
        let grid = (1..=self.grid_levels)
            .map(|level| {
                let r = self.radius * level as f64 / self.grid_levels.max(1) as f64;
                radar_polygon(self.center.x, self.center.y, r, &full, 1.0)
            })
            .collect();

        let spokes = (0..count)
            .map(|i| {
                (
                    self.center,
                    vertex_position(self.center.x, self.center.y, self.radius, i, count),
                )
            })
            .collect();

        let series = series
            .iter()
            .map(|key| {
                let values: Vec<f64> = data.iter().map(|p| p.value(key)).collect();
                RadarSeries {
                    key: key.clone(),
                    path: radar_polygon(
                        self.center.x,
                        self.center.y,
                        self.radius,
                        &values,
                        max_value,
                    ),
                }
            })
            .collect();

        RadarChart {
            grid,
            spokes,
            series,
            max_value,
        }
    }
}

/// Computed radar geometry.
#[derive(Clone, Debug)]
pub struct RadarChart {
    /// Concentric grid polygons, innermost first.
    pub grid: Vec<BezPath>,
    /// One `(center, rim)` spoke segment per data point.
    pub spokes: Vec<(Point, Point)>,
    /// Per-series polygons, in caller key order.
    pub series: Vec<RadarSeries>,
    /// The shared value scale maximum.
    pub max_value: f64,
}

/// One series' closed radar polygon.
#[derive(Clone, Debug)]
pub struct RadarSeries {
    /// Series key.
    pub key: SeriesKey,
    /// Closed polygon through this series' vertices.
    pub path: BezPath,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::PathEl;

    use super::*;

    fn sample() -> (Vec<DataPoint>, Vec<SeriesKey>) {
        let data = vec![
            DataPoint::new("speed", [("a".to_string(), 4.0)]),
            DataPoint::new("power", [("a".to_string(), 8.0)]),
            DataPoint::new("range", [("a".to_string(), 2.0)]),
        ];
        (data, vec!["a".to_string()])
    }

    #[test]
    fn one_spoke_per_category() {
        let (data, series) = sample();
        let chart = RadarChartSpec::new(Point::new(0.0, 0.0), 100.0).build(&data, &series);
        assert_eq!(chart.spokes.len(), 3);
        assert_eq!(chart.grid.len(), 5);
        assert_eq!(chart.max_value, 8.0);
    }

    #[test]
    fn series_polygons_are_closed_and_scaled() {
        let (data, series) = sample();
        let chart = RadarChartSpec::new(Point::new(0.0, 0.0), 100.0).build(&data, &series);
        let path = &chart.series[0].path;
        assert_eq!(path.elements().last(), Some(&PathEl::ClosePath));
        // First category is at half the max: 50 px straight up.
        let PathEl::MoveTo(p) = path.elements()[0] else {
            panic!("expected a move");
        };
        assert!((p.y + 50.0).abs() < 1e-9, "got {p:?}");
    }

    #[test]
    fn grid_rings_reach_the_rim() {
        let (data, series) = sample();
        let chart = RadarChartSpec::new(Point::new(0.0, 0.0), 80.0)
            .with_grid_levels(4)
            .build(&data, &series);
        let PathEl::MoveTo(p) = chart.grid[3].elements()[0] else {
            panic!("expected a move");
        };
        assert!((p.y + 80.0).abs() < 1e-9, "outer ring should touch the rim");
    }

    #[test]
    fn empty_data_yields_an_empty_chart() {
        let chart =
            RadarChartSpec::new(Point::new(0.0, 0.0), 80.0).build(&[], &["a".to_string()]);
        assert!(chart.grid.is_empty());
        assert!(chart.spokes.is_empty());
        assert!(chart.series.is_empty());
    }
}

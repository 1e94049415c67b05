// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area chart composition: scales plus per-series line and area paths.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};

use crate::curve::{CurveMode, Join, append_edge, area_path, line_path};
use crate::error::GeomError;
use crate::scale::{
    ScaleLinear, ScalePoint, nice_ticks, percent_domain, stacked_domain, value_domain,
};
use crate::stack::{DataPoint, SeriesKey, normalize_to_percentage, stack};

/// How multiple series are laid on top of one another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackMode {
    /// Each series is drawn from the baseline independently.
    #[default]
    None,
    /// Series are stacked cumulatively in caller key order.
    Stacked,
    /// Series are stacked and normalized to 100% per category.
    Percent,
}

/// Configuration for building area-chart geometry.
#[derive(Clone, Debug)]
pub struct AreaChartSpec {
    /// Plot rectangle in output pixels.
    pub plot: Rect,
    /// Interpolation mode for series edges.
    pub curve: CurveMode,
    /// Stacking behavior.
    pub stacking: StackMode,
    /// Requested y tick count.
    pub tick_count: usize,
}

impl AreaChartSpec {
    /// Creates a spec with linear curves, no stacking and five ticks.
    pub fn new(plot: Rect) -> Self {
        Self {
            plot,
            curve: CurveMode::Linear,
            stacking: StackMode::None,
            tick_count: 5,
        }
    }

    /// Sets the interpolation mode.
    pub fn with_curve(mut self, curve: CurveMode) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the stacking behavior.
    pub fn with_stacking(mut self, stacking: StackMode) -> Self {
        self.stacking = stacking;
        self
    }

    /// Sets the requested y tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Builds scales, ticks and per-series geometry for `data` and `series`.
    ///
    /// Series appear in caller key order. With stacking enabled, each
    /// series' area is the band between the cumulative totals below and
    /// including it; the percent mode normalizes every category to 100
    /// first. Errors with [`GeomError::EmptyDomain`] when `data` is empty,
    /// since the categorical x scale needs at least one label.
    pub fn build(&self, data: &[DataPoint], series: &[SeriesKey]) -> Result<AreaChart, GeomError> {
        let labels: Vec<String> = data.iter().map(|p| p.x.label()).collect();
        let x_scale = ScalePoint::new(labels, (self.plot.x0, self.plot.x1))?;

        // Screen y grows downward: the domain maps onto (bottom, top).
        let y_range = (self.plot.y1, self.plot.y0);

        let normalized;
        let data = if self.stacking == StackMode::Percent {
            normalized = normalize_to_percentage(data, series);
            &normalized[..]
        } else {
            data
        };

        let domain = match self.stacking {
            StackMode::None => value_domain(data, series),
            StackMode::Stacked => stacked_domain(data, series),
            StackMode::Percent => percent_domain(),
        };
        let y_scale = ScaleLinear::new(domain, y_range);
        let y_ticks = nice_ticks(domain.0, domain.1, self.tick_count);

        let mut out = Vec::with_capacity(series.len());
        match self.stacking {
            StackMode::None => {
                let baseline = y_scale.map(0.0);
                for key in series {
                    let points: Vec<Point> = data
                        .iter()
                        .enumerate()
                        .map(|(i, p)| Point::new(x_scale.x(i), y_scale.map(p.value(key))))
                        .collect();
                    out.push(AreaSeries {
                        key: key.clone(),
                        line: line_path(&points, self.curve),
                        area: area_path(&points, baseline, self.curve),
                    });
                }
            }
            StackMode::Stacked | StackMode::Percent => {
                let frames = stack(data, series);
                for (key, row) in series.iter().zip(&frames) {
                    let top: Vec<Point> = row
                        .iter()
                        .enumerate()
                        .map(|(i, f)| Point::new(x_scale.x(i), y_scale.map(f.top)))
                        .collect();
                    let bottom: Vec<Point> = row
                        .iter()
                        .enumerate()
                        .rev()
                        .map(|(i, f)| Point::new(x_scale.x(i), y_scale.map(f.base)))
                        .collect();
                    // Band outline: top edge forward, bottom edge back.
                    let mut area = BezPath::new();
                    append_edge(&mut area, &top, self.curve, Join::Move);
                    append_edge(&mut area, &bottom, self.curve, Join::Line);
                    area.close_path();
                    out.push(AreaSeries {
                        key: key.clone(),
                        line: line_path(&top, self.curve),
                        area,
                    });
                }
            }
        }

        Ok(AreaChart {
            x_scale,
            y_scale,
            y_ticks,
            series: out,
        })
    }
}

/// Computed area-chart geometry.
#[derive(Clone, Debug)]
pub struct AreaChart {
    /// Categorical x scale over the data's x labels.
    pub x_scale: ScalePoint,
    /// Continuous y scale.
    pub y_scale: ScaleLinear,
    /// Nice tick values over the y domain.
    pub y_ticks: Vec<f64>,
    /// Per-series geometry, in caller key order.
    pub series: Vec<AreaSeries>,
}

/// Line and fill geometry for one series.
#[derive(Clone, Debug)]
pub struct AreaSeries {
    /// Series key.
    pub key: SeriesKey,
    /// Open path along the series' top edge.
    pub line: BezPath,
    /// Closed, fillable region for the series.
    pub area: BezPath,
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
            DataPoint::new("jan", [("a".to_string(), 10.0), ("b".to_string(), 30.0)]),
            DataPoint::new("feb", [("a".to_string(), 20.0), ("b".to_string(), 10.0)]),
            DataPoint::new("mar", [("a".to_string(), 30.0), ("b".to_string(), 20.0)]),
        ];
        (data, vec!["a".to_string(), "b".to_string()])
    }

    #[test]
    fn empty_data_is_a_domain_error() {
        let spec = AreaChartSpec::new(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(
            spec.build(&[], &["a".to_string()]).unwrap_err(),
            GeomError::EmptyDomain
        );
    }

    #[test]
    fn series_are_emitted_in_caller_order() {
        let (data, series) = sample();
        let chart = AreaChartSpec::new(Rect::new(0.0, 0.0, 100.0, 50.0))
            .build(&data, &series)
            .unwrap();
        let keys: Vec<_> = chart.series.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn every_area_is_closed() {
        let (data, series) = sample();
        for stacking in [StackMode::None, StackMode::Stacked, StackMode::Percent] {
            let chart = AreaChartSpec::new(Rect::new(0.0, 0.0, 100.0, 50.0))
                .with_stacking(stacking)
                .build(&data, &series)
                .unwrap();
            for s in &chart.series {
                assert_eq!(
                    s.area.elements().last(),
                    Some(&PathEl::ClosePath),
                    "{stacking:?}/{}",
                    s.key
                );
            }
        }
    }

    #[test]
    fn stacked_upper_band_sits_on_the_lower_series_top() {
        let (data, series) = sample();
        let plot = Rect::new(0.0, 0.0, 100.0, 100.0);
        let chart = AreaChartSpec::new(plot)
            .with_stacking(StackMode::Stacked)
            .build(&data, &series)
            .unwrap();
        // Series "b" band at jan: base 10, top 40 in data units.
        let y = |v: f64| chart.y_scale.map(v);
        let PathEl::MoveTo(p) = chart.series[1].area.elements()[0] else {
            panic!("expected a move at the band start");
        };
        assert!((p.y - y(40.0)).abs() < 1e-9);
    }

    #[test]
    fn percent_mode_fixes_the_domain_to_one_hundred() {
        let (data, series) = sample();
        let chart = AreaChartSpec::new(Rect::new(0.0, 0.0, 100.0, 50.0))
            .with_stacking(StackMode::Percent)
            .build(&data, &series)
            .unwrap();
        assert_eq!(chart.y_scale.domain_min(), 0.0);
        assert_eq!(chart.y_scale.domain_max(), 100.0);
        // Every category sums to 100, so the top band's edge hugs the plot top.
        let PathEl::MoveTo(p) = chart.series[1].area.elements()[0] else {
            panic!("expected a move at the band start");
        };
        assert!((p.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn x_positions_span_the_plot_width() {
        let (data, series) = sample();
        let chart = AreaChartSpec::new(Rect::new(10.0, 0.0, 90.0, 50.0))
            .build(&data, &series)
            .unwrap();
        assert_eq!(chart.x_scale.x(0), 10.0);
        assert_eq!(chart.x_scale.x(1), 50.0);
        assert_eq!(chart.x_scale.x(2), 90.0);
    }
}

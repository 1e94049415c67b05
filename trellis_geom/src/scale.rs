// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales and tick generation.
//!
//! A scale maps a data-space domain onto a pixel-space range. Two kinds are
//! provided: a continuous linear scale and a discrete point scale over
//! category labels. Both are plain values; instantiate them fresh from the
//! current data on every build.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::GeomError;
use crate::stack::{DataPoint, SeriesKey, stacked_max};

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-span domain is treated as having span 1, so the mapping stays
    /// finite for any input instead of dividing by zero.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let mut span = d1 - d0;
        if span == 0.0 {
            span = 1.0;
        }
        let t = (x - d0) / span;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns "nice" tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A discrete point scale over an ordered list of category labels.
///
/// Labels are spaced evenly across the range; the mapping is an exact
/// per-label table, not an interpolation.
#[derive(Clone, Debug)]
pub struct ScalePoint {
    labels: Vec<String>,
    range: (f64, f64),
}

impl ScalePoint {
    /// Creates a point scale over `labels`.
    ///
    /// Errors with [`GeomError::EmptyDomain`] when `labels` is empty; a
    /// categorical axis with no categories has no usable positions.
    pub fn new(labels: Vec<String>, range: (f64, f64)) -> Result<Self, GeomError> {
        if labels.is_empty() {
            return Err(GeomError::EmptyDomain);
        }
        Ok(Self { labels, range })
    }

    fn step(&self) -> f64 {
        let n = self.labels.len();
        if n <= 1 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / (n - 1) as f64
    }

    /// Returns the x-position for the label at `index`.
    ///
    /// Indices past the end clamp to the last label's position.
    pub fn x(&self, index: usize) -> f64 {
        let index = index.min(self.labels.len() - 1);
        self.range.0 + self.step() * index as f64
    }

    /// Returns the x-position of `label`.
    ///
    /// Unknown labels map to the start of the range; this is a documented
    /// fallback, not an error.
    pub fn position(&self, label: &str) -> f64 {
        match self.labels.iter().position(|l| l == label) {
            Some(index) => self.x(index),
            None => self.range.0,
        }
    }

    /// Returns the number of labels.
    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the ordered label list.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Returns "nice" tick values covering `[min, max]`.
///
/// The step is the closest value of {1, 2, 5, 10} × 10^k to the raw step
/// `(max - min) / (count - 1)`; ticks run from `floor(min / step) * step`
/// to `ceil(max / step) * step` inclusive, so the first tick is `<= min`
/// and the last is `>= max`. Each tick is snapped to 10 decimal places to
/// suppress accumulated floating-point noise.
///
/// `min == max` yields the single tick `[min]`. Reversed bounds are
/// swapped. `count` below 2 is treated as 2.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let slots = count.max(2) - 1;
    let step = nice_step((max - min) / slots as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| snap(start + step * i as f64)).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Rounds `v` to 10 decimal places.
fn snap(v: f64) -> f64 {
    (v * 1e10).round() / 1e10
}

/// Computes the y-domain for ungrouped series.
///
/// The bottom is `min(0, data_min)` and the top is `data_max` plus 10% of
/// the data span as headroom. Empty data (or series keys that match
/// nothing) yields `(0, 0)`; the zero-span guard in [`ScaleLinear::map`]
/// keeps such a domain usable.
pub fn value_domain(data: &[DataPoint], series: &[SeriesKey]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for point in data {
        for key in series {
            let v = point.value(key);
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 0.0);
    }
    (lo.min(0.0), hi + 0.1 * (hi - lo))
}

/// Computes the y-domain for stacked series: `[0, max cumulative total]`.
///
/// The top is the largest per-category sum across all series, not the
/// largest individual value.
pub fn stacked_domain(data: &[DataPoint], series: &[SeriesKey]) -> (f64, f64) {
    (0.0, stacked_max(data, series))
}

/// Returns the fixed domain for percentage-normalized series.
pub fn percent_domain() -> (f64, f64) {
    (0.0, 100.0)
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framework-agnostic chart geometry.
//!
//! This crate is the numeric core shared by area/pie/radar/radial-bar chart
//! renderers:
//! - **Scales** map data domains into pixel ranges and produce "nice" ticks.
//! - **Curves** connect plotted points as [`kurbo::BezPath`]s under four
//!   interpolation modes (linear, step-after, natural cubic spline,
//!   monotone cubic).
//! - **Stacking** lays series on top of one another cumulatively, with
//!   optional percentage normalization.
//! - **Polar geometry** allocates angular slices and builds sector, radar
//!   and radial-bar paths.
//!
//! Every operation is a pure function from caller-supplied records to
//! freshly built geometry; the crate holds no state between calls, performs
//! no I/O and can be called concurrently without coordination. Rendering,
//! theming, label formatting and hit testing are out of scope: resolved
//! colors and labels pass through [`Slice`] records untouched, and the path
//! output is left for a drawing layer to consume.

#![no_std]

extern crate alloc;

mod area_chart;
mod curve;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod pie_chart;
mod polar;
mod radar_chart;
mod radial_bar_chart;
mod scale;
mod spline;
mod stack;

pub use area_chart::{AreaChart, AreaChartSpec, AreaSeries, StackMode};
pub use curve::{CurveMode, area_path, line_path};
pub use error::GeomError;
pub use pie_chart::{PieChart, PieChartSpec};
pub use polar::{
    Slice, SliceEntry, allocate_slices, describe_arc, polar_to_cartesian, radar_polygon,
    vertex_position,
};
pub use radar_chart::{RadarChart, RadarChartSpec, RadarSeries};
pub use radial_bar_chart::{RadialBar, RadialBarChartSpec, RadialBarLayout};
pub use scale::{
    ScaleLinear, ScalePoint, nice_ticks, percent_domain, stacked_domain, value_domain,
};
pub use spline::{SplineControls, monotone_tangents, natural_controls};
pub use stack::{
    Category, DataPoint, SeriesKey, StackFrame, normalize_to_percentage, stack, stacked_max,
};

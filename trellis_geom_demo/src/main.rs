// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry demos for `trellis_geom`.
mod html;
mod svg;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use trellis_geom::{
    AreaChartSpec, CurveMode, DataPoint, PieChartSpec, RadarChartSpec, RadialBarChartSpec,
    RadialBarLayout, SeriesKey, SliceEntry, StackMode,
};

const SERIES_FILLS: [Color; 3] = [css::CORNFLOWER_BLUE, css::ORANGE, css::MEDIUM_SEA_GREEN];

fn main() {
    let sections = vec![
        area_demo(),
        stacked_area_demo(),
        percent_stack_demo(),
        pie_demo(),
        radar_demo(),
        radial_bar_demo(),
    ];

    let html = html::render_report("Trellis geometry demo", &sections);
    std::fs::write("trellis_geom_demo.html", html).expect("write trellis_geom_demo.html");
    println!("wrote trellis_geom_demo.html");
}

fn monthly_data() -> (Vec<DataPoint>, Vec<SeriesKey>) {
    let series: Vec<SeriesKey> = vec!["desktop".into(), "mobile".into(), "tablet".into()];
    let months = ["jan", "feb", "mar", "apr", "may", "jun"];
    let desktop = [40.0, 30.0, 20.0, 27.8, 18.9, 23.9];
    let mobile = [24.0, 13.9, 48.0, 39.0, 18.0, 38.0];
    let tablet = [10.0, 22.1, 22.9, 20.0, 21.8, 25.0];
    let data = months
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            DataPoint::new(
                m,
                [
                    (series[0].clone(), desktop[i]),
                    (series[1].clone(), mobile[i]),
                    (series[2].clone(), tablet[i]),
                ],
            )
        })
        .collect();
    (data, series)
}

fn render_area(spec: &AreaChartSpec, view: Rect) -> String {
    let (data, series) = monthly_data();
    let chart = spec.build(&data, &series).expect("non-empty data");

    let mut scene = svg::SvgScene::new(view);
    let plot = spec.plot;

    // Grid lines and tick labels from the nice y ticks.
    for &tick in &chart.y_ticks {
        let y = chart.y_scale.map(tick);
        scene.line(
            Point::new(plot.x0, y),
            Point::new(plot.x1, y),
            css::LIGHT_GRAY,
            1.0,
        );
        scene.text(Point::new(plot.x0 - 28.0, y + 3.0), 9.0, css::DIM_GRAY, &format!("{tick}"));
    }
    for (i, label) in chart.x_scale.labels().iter().enumerate() {
        scene.text(
            Point::new(chart.x_scale.x(i) - 8.0, plot.y1 + 14.0),
            9.0,
            css::DIM_GRAY,
            label,
        );
    }

    // Fills back-to-front, then the series edges on top.
    for (s, &fill) in chart.series.iter().zip(&SERIES_FILLS) {
        scene.fill_path(&s.area, fill.with_alpha(0.6));
    }
    for (s, &fill) in chart.series.iter().zip(&SERIES_FILLS) {
        scene.stroke_path(&s.line, fill, 2.0);
    }
    scene.to_svg_string()
}

fn area_demo() -> html::HtmlSection {
    let view = Rect::new(0.0, 0.0, 360.0, 200.0);
    let spec = AreaChartSpec::new(Rect::new(40.0, 20.0, 340.0, 170.0))
        .with_curve(CurveMode::MonotoneX);
    html::HtmlSection {
        title: "Area",
        description: "Overlapping per-series areas from a shared baseline, monotone-cubic interpolation.",
        svg: render_area(&spec, view),
    }
}

fn stacked_area_demo() -> html::HtmlSection {
    let view = Rect::new(0.0, 0.0, 360.0, 200.0);
    let spec = AreaChartSpec::new(Rect::new(40.0, 20.0, 340.0, 170.0))
        .with_curve(CurveMode::Natural)
        .with_stacking(StackMode::Stacked);
    html::HtmlSection {
        title: "Stacked Area",
        description: "Per-category accumulation: each band sits on the cumulative total below it.",
        svg: render_area(&spec, view),
    }
}

fn percent_stack_demo() -> html::HtmlSection {
    let view = Rect::new(0.0, 0.0, 360.0, 200.0);
    let spec = AreaChartSpec::new(Rect::new(40.0, 20.0, 340.0, 170.0))
        .with_stacking(StackMode::Percent);
    html::HtmlSection {
        title: "Percent Stacked Area",
        description: "Values normalized per category so the bands tile the full plot height.",
        svg: render_area(&spec, view),
    }
}

fn pie_demo() -> html::HtmlSection {
    let entries = [
        SliceEntry::new("desktop", 186.0).with_color(SERIES_FILLS[0]),
        SliceEntry::new("mobile", 305.0).with_color(SERIES_FILLS[1]),
        SliceEntry::new("tablet", 237.0).with_color(SERIES_FILLS[2]),
        SliceEntry::new("other", 73.0).with_color(css::LIGHT_SLATE_GRAY),
    ];

    let view = Rect::new(0.0, 0.0, 400.0, 200.0);
    let mut scene = svg::SvgScene::new(view);

    let pie = PieChartSpec::new(Point::new(100.0, 100.0), 80.0);
    let chart = pie.build(&entries);
    for (slice, path) in chart.slices.iter().zip(&chart.paths) {
        scene.fill_path(path, slice.color.unwrap_or(css::GRAY));
        let anchor = pie.label_position(slice, 50.0);
        scene.text(anchor, 9.0, css::WHITE, &format!("{:.0}%", slice.percentage * 100.0));
    }

    let donut = PieChartSpec::new(Point::new(300.0, 100.0), 80.0)
        .with_inner_radius(50.0)
        .with_pad_angle(0.04);
    let chart = donut.build(&entries);
    for (slice, path) in chart.slices.iter().zip(&chart.paths) {
        scene.fill_path(path, slice.color.unwrap_or(css::GRAY));
    }

    html::HtmlSection {
        title: "Pie + Donut",
        description: "Proportional slice allocation; the donut adds an inner radius and pad angle.",
        svg: scene.to_svg_string(),
    }
}

fn radar_demo() -> html::HtmlSection {
    let series: Vec<SeriesKey> = vec!["this year".into(), "last year".into()];
    let axes = ["speed", "power", "range", "comfort", "price"];
    let this_year = [8.0, 6.5, 7.0, 5.0, 4.0];
    let last_year = [6.0, 7.0, 5.5, 6.0, 6.5];
    let data: Vec<DataPoint> = axes
        .iter()
        .enumerate()
        .map(|(i, &axis)| {
            DataPoint::new(
                axis,
                [
                    (series[0].clone(), this_year[i]),
                    (series[1].clone(), last_year[i]),
                ],
            )
        })
        .collect();

    let view = Rect::new(0.0, 0.0, 240.0, 240.0);
    let mut scene = svg::SvgScene::new(view);
    let chart = RadarChartSpec::new(Point::new(120.0, 120.0), 90.0).build(&data, &series);

    for ring in &chart.grid {
        scene.stroke_path(ring, css::LIGHT_GRAY, 1.0);
    }
    for &(from, to) in &chart.spokes {
        scene.line(from, to, css::LIGHT_GRAY, 1.0);
    }
    for (s, &fill) in chart.series.iter().zip(&SERIES_FILLS) {
        scene.fill_path(&s.path, fill.with_alpha(0.35));
        scene.stroke_path(&s.path, fill, 2.0);
    }

    html::HtmlSection {
        title: "Radar",
        description: "One polygon per series over shared spokes, scaled by the global maximum.",
        svg: scene.to_svg_string(),
    }
}

fn radial_bar_demo() -> html::HtmlSection {
    let (data, series) = monthly_data();
    let view = Rect::new(0.0, 0.0, 400.0, 200.0);
    let mut scene = svg::SvgScene::new(view);

    let concentric = RadialBarChartSpec::new(Point::new(100.0, 100.0), 80.0, 16.0)
        .with_gap(4.0)
        .build(&data, &series);
    for (bar, &fill) in concentric.iter().zip(&SERIES_FILLS) {
        scene.fill_path(&bar.path, fill);
    }

    let ring = RadialBarChartSpec::new(Point::new(300.0, 100.0), 80.0, 24.0)
        .with_layout(RadialBarLayout::StackedRing)
        .build(&data, &series);
    for (bar, &fill) in ring.iter().zip(&SERIES_FILLS) {
        scene.fill_path(&bar.path, fill);
    }

    html::HtmlSection {
        title: "Radial Bars",
        description: "Series totals as arcs: concentric rings scaled to the leader, and one stacked ring laid end to end.",
        svg: scene.to_svg_string(),
    }
}

// Copyright 2025 the Axisfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout demos for `axisfit`.
//!
//! Each demo lays out an x and a y axis for a 640×400 view and prints the resulting
//! geometry together with the plot rectangle left after reserving axis space.

use axisfit::{
    AxisGeometry, AxisLayout, AxisOrient, AxisSpec, FieldSummary, TickValue, Transform,
};
use kurbo::{Insets, Rect};
use tracing_subscriber::EnvFilter;

const VIEW: Rect = Rect::new(0.0, 0.0, 640.0, 400.0);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sections = [
        bar_demo(),
        crowded_bar_demo(),
        millions_demo(),
        log_demo(),
        binned_demo(),
        summary_title_demo(),
    ];
    for section in sections {
        println!("{section}");
    }
}

/// Lays out `x` along the bottom and `y` along the left, then reports both.
fn chart(name: &str, x: AxisSpec, y: AxisSpec, fill_to_edge: bool) -> String {
    let x = x
        .build()
        .layout(AxisOrient::Bottom, VIEW.width(), fill_to_edge);
    let y = y.build().layout(AxisOrient::Left, VIEW.height(), false);

    let reserved = combined_insets(&x, &y);
    let plot = VIEW - reserved;

    let mut lines = vec![format!("== {name}")];
    lines.extend(describe("x", &x));
    lines.extend(describe("y", &y));
    lines.push(format!(
        "   plot: ({:.0}, {:.0}) - ({:.0}, {:.0})",
        plot.x0, plot.y0, plot.x1, plot.y1
    ));
    lines.join("\n")
}

/// Space around the plot: axis thickness on the bottom/left plus every gutter.
fn combined_insets(x: &AxisLayout, y: &AxisLayout) -> Insets {
    let gx = x.geometry().insets();
    let gy = y.geometry().insets();
    Insets::new(
        gx.x0.max(f64::from(y.geometry().size)),
        gy.y0,
        gx.x1,
        gy.y1.max(f64::from(x.geometry().size)),
    )
}

fn describe(which: &str, layout: &AxisLayout) -> Vec<String> {
    let axis = layout.axis();
    let AxisGeometry {
        rotated_ticks,
        tick_values,
        tick_count,
        size,
        left_gutter,
        right_gutter,
        top_gutter,
        bottom_gutter,
    } = layout.geometry();
    let mut lines = vec![
        format!(
            "   {which}: {} title={:?} millions={} log={} size={size} rotated={rotated_ticks}",
            axis.scale_name(),
            axis.title(),
            axis.in_millions(),
            axis.is_log(),
        ),
        format!(
            "      gutters l/r/t/b = {left_gutter}/{right_gutter}/{top_gutter}/{bottom_gutter} \
             tick_count={tick_count:?}"
        ),
    ];
    if let Some(ticks) = tick_values {
        let shown: Vec<String> = ticks.iter().map(ToString::to_string).collect();
        lines.push(format!("      ticks: {}", shown.join(" ")));
    }
    lines
}

fn bar_demo() -> String {
    let x = AxisSpec::categorical("x").with_field(FieldSummary::categorical(
        "region",
        "Region",
        ["North", "South", "East", "West", "Central"].map(TickValue::text),
    ));
    let y = AxisSpec::numeric("y").with_field(FieldSummary::numeric("sales", "Sales", 0.0, 840.0));
    chart("bar", x, y, false)
}

fn crowded_bar_demo() -> String {
    let countries: Vec<TickValue> = (0..60)
        .map(|i| TickValue::text(&format!("Country {i:02}")))
        .collect();
    let country = FieldSummary::categorical("country", "Country", countries);
    let x = AxisSpec::categorical("x").with_field(country);
    let y = AxisSpec::numeric("y").with_field(FieldSummary::numeric("gdp", "GDP", 0.0, 95.5));
    chart("crowded bar", x, y, false)
}

fn millions_demo() -> String {
    let x = AxisSpec::numeric("x")
        .with_field(FieldSummary::numeric("year", "Year", 1990.0, 2024.0).with_date(true));
    let y = AxisSpec::numeric("y").with_field(FieldSummary::numeric(
        "population",
        "Population",
        0.0,
        38_000_000.0,
    ));
    chart("millions", x, y, true)
}

fn log_demo() -> String {
    let x = AxisSpec::numeric("x").with_field(
        FieldSummary::numeric("income", "Income", 300.0, 120_000.0).with_transform(Transform::Log),
    );
    let y = AxisSpec::numeric("y")
        .with_field(FieldSummary::numeric("life", "Life expectancy", 40.0, 85.0))
        .with_tick_count(5);
    chart("log", x, y, true)
}

fn binned_demo() -> String {
    let bins: Vec<TickValue> = (0..12)
        .map(|i| TickValue::range(f64::from(i) * 2.5, f64::from(i + 1) * 2.5))
        .collect();
    let x = AxisSpec::numeric("x").with_field(FieldSummary::numeric("count", "Count", 0.0, 48.0));
    let y = AxisSpec::categorical("y").with_field(FieldSummary::categorical("temp", "Temp", bins));
    chart("binned", x, y, false)
}

fn summary_title_demo() -> String {
    let sum = FieldSummary::numeric("sum_sales", "Sum(Sales)", 0.0, 9_000.0)
        .with_original_label("Sales");
    let mean = FieldSummary::numeric("mean_sales", "Mean(Sales)", 0.0, 400.0)
        .with_original_label("Sales");
    let y = AxisSpec::numeric("y").with_field(sum).with_field(mean);
    let x = AxisSpec::categorical("x")
        .with_field(FieldSummary::categorical(
            "quarter",
            "Quarter",
            ["Q1", "Q2", "Q3", "Q4"].map(TickValue::text),
        ))
        .with_title("Fiscal quarter");
    chart("summary title", x, y, false)
}

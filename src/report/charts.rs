//! Chart descriptions and their ECharts rendering.
//!
//! Each renderer is a pure function from input rows to a chart description:
//! - **Daily trend**: daily rides and temperature on two y-axes sharing the date axis
//! - **Top stations**: one bar per station in ranking order, coloured by value
//! - **Top routes**: the ten most ridden round-trip and point-to-point routes side by side
//!
//! Descriptions are converted into ECharts options with [charming] and
//! initialized in the browser by [charts_script].

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title, VisualMap, VisualMapPiece},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::{Line, bar::Bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dataset::{DailyMetrics, RankedRoute, StationRanking},
    html::HeadElement,
};

pub(super) const DAILY_TREND_TITLE: &str = "Daily bike trips and temperatures in NYC 2022";
pub(super) const TOP_STATIONS_TITLE: &str = "Top 20 most popular bike stations in New York City";
pub(super) const TOP_ROUND_TRIPS_TITLE: &str = "Top 10 Round Trips";
pub(super) const TOP_POINT_TO_POINT_TITLE: &str = "Top 10 Point-to-Point Trips";

/// How many routes of each trip type are charted.
pub(super) const TOP_ROUTE_COUNT: usize = 10;

const RIDES_COLOR: &str = "blue";
const TEMPERATURE_COLOR: &str = "orange";
const ROUND_TRIP_COLOR: &str = "#1f77b4";
const POINT_TO_POINT_COLOR: &str = "#ff7f0e";

/// Light to dark, lower values get lighter bars.
const BLUES: [&str; 5] = ["#c6dbef", "#9ecae1", "#6baed6", "#3182bd", "#08519c"];

/// A chart with its HTML container ID, display height and ECharts configuration.
pub(super) struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The height of the chart container in pixels
    pub height: u32,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl ReportChart {
    pub fn new(id: &'static str, height: u32, chart: Chart) -> Self {
        Self {
            id,
            height,
            options: chart.to_string(),
        }
    }
}

/// Renders the HTML container for a chart.
pub(super) fn chart_container(chart: &ReportChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="w-full rounded dark:bg-gray-100 mb-4"
            style=(format!("height: {}px;", chart.height))
        {}
    )
}

/// Generates JavaScript initialization code for report charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[ReportChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Daily ride counts and temperatures against the date, one point pair per row.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrendChart {
    /// The x-axis labels, one per day.
    pub dates: Vec<String>,
    /// The ride counts, plotted on the left y-axis.
    pub ride_counts: Vec<u64>,
    /// The average temperatures, plotted on the right y-axis.
    pub temperatures: Vec<f64>,
}

/// Plot the raw daily values in the order given, without resampling.
pub fn daily_trend_chart<'a>(rows: impl IntoIterator<Item = &'a DailyMetrics>) -> DailyTrendChart {
    let mut chart = DailyTrendChart {
        dates: Vec::new(),
        ride_counts: Vec::new(),
        temperatures: Vec::new(),
    };

    for row in rows {
        chart.dates.push(row.date.to_string());
        chart.ride_counts.push(row.daily_ride_count);
        chart.temperatures.push(row.average_temperature);
    }

    chart
}

impl DailyTrendChart {
    pub fn to_chart(&self) -> Chart {
        let ride_counts: Vec<f64> = self.ride_counts.iter().map(|&count| count as f64).collect();

        Chart::new()
            .title(Title::new().text(DAILY_TREND_TITLE))
            .tooltip(Tooltip::new().trigger(Trigger::Axis))
            .legend(Legend::new().left(450))
            .grid(
                Grid::new()
                    .left("3%")
                    .right("4%")
                    .bottom("3%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(self.dates.clone()),
            )
            .y_axis(Axis::new().type_(AxisType::Value).name("Daily bike rides"))
            .y_axis(Axis::new().type_(AxisType::Value).name("Daily temperature"))
            .series(
                Line::new()
                    .name("Daily bike rides")
                    .item_style(ItemStyle::new().color(RIDES_COLOR))
                    .data(ride_counts),
            )
            .series(
                Line::new()
                    .name("Daily temperature")
                    .y_axis_index(1)
                    .item_style(ItemStyle::new().color(TEMPERATURE_COLOR))
                    .data(self.temperatures.clone()),
            )
    }
}

/// An inclusive range of values drawn in one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    pub min: u64,
    pub max: u64,
    pub color: &'static str,
}

/// How the bars of a [RankedBarChart] are coloured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarColoring {
    /// Every bar has the same colour.
    Fixed(&'static str),
    /// Bars are coloured by the band their value falls in.
    ValueScale(Vec<ColorBand>),
}

/// A bar chart of labelled values, drawn in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedBarChart {
    pub title: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub coloring: BarColoring,
}

impl RankedBarChart {
    pub fn to_chart(&self) -> Chart {
        let values: Vec<f64> = self.values.iter().map(|&value| value as f64).collect();

        let mut bar = Bar::new().name(self.y_axis_title).data(values);

        let mut chart = Chart::new()
            .title(Title::new().text(self.title))
            .tooltip(
                Tooltip::new()
                    .trigger(Trigger::Axis)
                    .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
            )
            .grid(
                Grid::new()
                    .left("3%")
                    .right("4%")
                    .bottom("3%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .name(self.x_axis_title)
                    .data(self.labels.clone()),
            )
            .y_axis(Axis::new().type_(AxisType::Value).name(self.y_axis_title));

        match &self.coloring {
            BarColoring::Fixed(color) => {
                bar = bar.item_style(ItemStyle::new().color(*color));
            }
            BarColoring::ValueScale(bands) => {
                chart = chart.visual_map(
                    VisualMap::new().show(false).pieces(
                        bands
                            .iter()
                            .map(|band| {
                                VisualMapPiece::new()
                                    .gte(band.min as f64)
                                    .lte(band.max as f64)
                                    .color(band.color)
                            })
                            .collect::<Vec<_>>(),
                    ),
                );
            }
        }

        chart.series(bar)
    }
}

/// Split the range of `values` into at most five contiguous, non-overlapping
/// bands from light to dark blue.
///
/// Every value falls in exactly one band. Returns no bands for no values.
pub fn value_color_bands(values: &[u64]) -> Vec<ColorBand> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };

    let span = max - min;
    let band_count = BLUES.len() as u64;
    let edge = |index: u64| min + span * index / band_count;

    BLUES
        .iter()
        .enumerate()
        .filter_map(|(index, &color)| {
            let index = index as u64;
            let lower = edge(index);

            if index + 1 == band_count {
                return Some(ColorBand {
                    min: lower,
                    max,
                    color,
                });
            }

            let upper_exclusive = edge(index + 1);
            (upper_exclusive > lower).then(|| ColorBand {
                min: lower,
                max: upper_exclusive - 1,
                color,
            })
        })
        .collect()
}

/// One bar per station in the order given, coloured by trip count.
pub fn top_stations_chart(stations: &[StationRanking]) -> RankedBarChart {
    let values: Vec<u64> = stations.iter().map(|station| station.trip_count).collect();

    RankedBarChart {
        title: TOP_STATIONS_TITLE,
        x_axis_title: "Start stations",
        y_axis_title: "Sum of trips",
        labels: stations
            .iter()
            .map(|station| station.station_name.clone())
            .collect(),
        coloring: BarColoring::ValueScale(value_color_bands(&values)),
        values,
    }
}

/// The `n` routes with the highest value, highest first.
///
/// Ties keep their original order.
pub fn top_n(routes: &[RankedRoute], n: usize) -> Vec<&RankedRoute> {
    let mut ranked: Vec<&RankedRoute> = routes.iter().collect();
    // `sort_by` is stable, so equal values stay in file order.
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(n);

    ranked
}

/// The round-trip and point-to-point top-10 charts shown side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRoutesCharts {
    pub round_trips: RankedBarChart,
    pub point_to_point: RankedBarChart,
}

/// Select the top routes of each trip type independently and chart them
/// with a fixed colour per side.
pub fn top_routes_charts(
    round_trip_routes: &[RankedRoute],
    point_to_point_routes: &[RankedRoute],
) -> TopRoutesCharts {
    TopRoutesCharts {
        round_trips: routes_chart(
            TOP_ROUND_TRIPS_TITLE,
            &top_n(round_trip_routes, TOP_ROUTE_COUNT),
            ROUND_TRIP_COLOR,
        ),
        point_to_point: routes_chart(
            TOP_POINT_TO_POINT_TITLE,
            &top_n(point_to_point_routes, TOP_ROUTE_COUNT),
            POINT_TO_POINT_COLOR,
        ),
    }
}

fn routes_chart(title: &'static str, routes: &[&RankedRoute], color: &'static str) -> RankedBarChart {
    RankedBarChart {
        title,
        x_axis_title: "Route",
        y_axis_title: "value",
        labels: routes.iter().map(|route| route.route_label.clone()).collect(),
        values: routes.iter().map(|route| route.value).collect(),
        coloring: BarColoring::Fixed(color),
    }
}

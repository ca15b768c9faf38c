//! The interactive map chapter: the embedded trip map, the trip type split
//! and the most ridden routes of each type.

use maud::html;

use crate::{
    Error,
    dataset::{Datasets, TripType},
    html::{HEADER_STYLE, PARAGRAPH_STYLE, SUBHEADER_STYLE},
    report::{
        PageContent,
        charts::{ReportChart, chart_container, top_routes_charts},
        metrics::{Metric, metric_view, trip_total},
    },
};

const MAP_HEIGHT: u32 = 1000;
const ROUND_TRIPS_CHART_ID: &str = "top-round-trips-chart";
const ROUND_TRIPS_CHART_HEIGHT: u32 = 825;
const POINT_TO_POINT_CHART_ID: &str = "top-point-to-point-chart";
const POINT_TO_POINT_CHART_HEIGHT: u32 = 800;

/// # Errors
/// Returns [Error::MissingTripType] if the route totals lost a trip type.
pub(super) fn page(datasets: &Datasets) -> Result<PageContent, Error> {
    let round_trips = Metric {
        label: "Qty. of Round Trips",
        value: trip_total(&datasets.route_totals, TripType::RoundTrip)?.to_string(),
    };
    let point_to_point = Metric {
        label: "Qty. of Point-to-Point Trips",
        value: trip_total(&datasets.route_totals, TripType::PointToPoint)?.to_string(),
    };

    let route_charts = top_routes_charts(
        &datasets.round_trip_routes,
        &datasets.point_to_point_routes,
    );
    let charts = vec![
        ReportChart::new(
            ROUND_TRIPS_CHART_ID,
            ROUND_TRIPS_CHART_HEIGHT,
            route_charts.round_trips.to_chart(),
        ),
        ReportChart::new(
            POINT_TO_POINT_CHART_ID,
            POINT_TO_POINT_CHART_HEIGHT,
            route_charts.point_to_point.to_chart(),
        ),
    ];

    let body = html!(
        p class=(PARAGRAPH_STYLE)
        {
            "Interactive map showing aggregated bike trips over New York City"
        }

        h2 class=(HEADER_STYLE) { "Aggregated Bike Trips in New York City" }

        // The map is a complete HTML document and is embedded as is.
        iframe
            title="Aggregated bike trips map"
            srcdoc=(datasets.map_document)
            class="w-full mb-4 border-0"
            style=(format!("height: {MAP_HEIGHT}px;"))
        {}

        h4 class=(SUBHEADER_STYLE)
        {
            "Use the filter on the left-hand side of the map to check whether the \
            most popular start stations also appear in the most popular trips."
        }

        p class=(PARAGRAPH_STYLE)
        {
            "Usage is spread across several cultural centres in the city, with \
            three main hubs: the Hudson River Greenway, Central Park and Midtown \
            Manhattan, home to the Empire State Building, MoMA, Times Square and \
            many other points of interest."
        }

        p class=(PARAGRAPH_STYLE)
        {
            "The map also shows how start locations relate to end points. Riders \
            around each hub tend to travel in the same direction, which tells us \
            where bikes need to be collected and where they should be returned \
            at the end of the day. Along the Hudson River route most journeys \
            start near Tribeca and Rockefeller Park, the orange points in the \
            south, and end further north, the blue points. Many riders make \
            one-way journeys rather than loops, which drains the inventory at \
            the most popular stations."
        }

        p class=(PARAGRAPH_STYLE)
        {
            "The map does not call out or weight the most popular routes, and \
            point-to-point routes are far more visible on it than round trips. \
            Point-to-point routes are very popular, but round trips make up the \
            majority of journeys. The metrics and charts below show the split."
        }

        div class="grid grid-cols-1 md:grid-cols-2 gap-4"
        {
            (metric_view(&round_trips))
            (metric_view(&point_to_point))
        }

        div class="grid grid-cols-1 md:grid-cols-2 gap-4"
        {
            @for chart in &charts {
                div { (chart_container(chart)) }
            }
        }
    );

    Ok(PageContent {
        body,
        charts,
        sidebar_controls: None,
    })
}

#![allow(missing_docs)]

pub(crate) mod html;

use time::{Date, macros::date};

use crate::dataset::{
    DailyMetrics, Datasets, RankedRoute, RouteAggregate, Season, StationRanking, TripType,
};

pub(crate) use html::{assert_valid_html, element_texts, parse_html_document, parse_html_str};

pub(crate) const SAMPLE_MAP_DOCUMENT: &str =
    "<html><body><div id=\"map\">Aggregated trips</div></body></html>";

pub(crate) fn day(date: Date, rides: u64, temperature: f64, season: &str) -> DailyMetrics {
    DailyMetrics {
        date,
        daily_ride_count: rides,
        average_temperature: temperature,
        season: Season::new(season),
    }
}

fn stations(count: u64, prefix: &str) -> Vec<StationRanking> {
    (0..count)
        .map(|rank| StationRanking {
            station_name: format!("{prefix} {rank}"),
            trip_count: 10_000 - rank * 100,
        })
        .collect()
}

fn routes(count: u64, prefix: &str) -> Vec<RankedRoute> {
    (0..count)
        .map(|index| RankedRoute {
            route_label: format!("{prefix} {index}"),
            value: 100 + index * 10,
        })
        .collect()
}

/// A small but complete set of tables.
///
/// Two days (Winter and Summer), 25 ranked stations of which the top 20 are
/// listed separately, route totals of 700 round trips and 500 point-to-point
/// trips, 12 round-trip routes and 15 point-to-point routes.
pub(crate) fn sample_datasets() -> Datasets {
    let station_rankings = stations(25, "Station");

    Datasets {
        daily_metrics: vec![
            day(date!(2022 - 01 - 01), 100, 30.0, "Winter"),
            day(date!(2022 - 07 - 01), 800, 85.0, "Summer"),
        ],
        top_stations: station_rankings[..20].to_vec(),
        station_rankings,
        route_totals: vec![
            RouteAggregate {
                trip_type: TripType::PointToPoint,
                total_count: 500,
            },
            RouteAggregate {
                trip_type: TripType::RoundTrip,
                total_count: 700,
            },
        ],
        round_trip_routes: routes(12, "Round"),
        point_to_point_routes: routes(15, "Point"),
        map_document: SAMPLE_MAP_DOCUMENT.to_owned(),
    }
}

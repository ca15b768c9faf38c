//! Single-value metrics shown above the charts.

use maud::{Markup, html};

use crate::{
    Error,
    dataset::{RouteAggregate, StationRanking, TripType},
};

/// A labelled value displayed as a card.
pub(super) struct Metric {
    pub label: &'static str,
    pub value: String,
}

pub(super) fn metric_view(metric: &Metric) -> Markup {
    html!(
        div class="flex flex-col p-4 mb-4 bg-white rounded-lg shadow dark:bg-gray-800"
        {
            span class="text-sm text-gray-600 dark:text-gray-400" { (metric.label) }
            span class="text-3xl font-semibold" data-metric=(metric.label) { (metric.value) }
        }
    )
}

const SUFFIXES: [&str; 4] = ["K", "M", "B", "T"];

/// Abbreviate a count for display.
///
/// Counts below 1000 are shown as is. Larger counts are scaled to the
/// largest unit of thousands, millions, billions or trillions they reach and
/// rounded to two decimal places, dropping trailing zeros: 1500 is "1.5K" and
/// 2000000 is "2M". Rounding stays within the unit, so 999999 is "1000K".
pub fn format_count(count: u64) -> String {
    if count < 1000 {
        return count.to_string();
    }

    let mut scaled = count as f64;
    let mut suffix = SUFFIXES[0];
    for candidate in SUFFIXES {
        if scaled < 1000.0 {
            break;
        }
        scaled /= 1000.0;
        suffix = candidate;
    }

    let formatted = format!("{scaled:.2}");
    let formatted = formatted.trim_end_matches('0').trim_end_matches('.');

    format!("{formatted}{suffix}")
}

/// The total number of trips of `trip_type`.
///
/// # Errors
/// Returns [Error::MissingTripType] if `rows` has no row for `trip_type`.
pub fn trip_total(rows: &[RouteAggregate], trip_type: TripType) -> Result<u64, Error> {
    rows.iter()
        .find(|row| row.trip_type == trip_type)
        .map(|row| row.total_count)
        .ok_or(Error::MissingTripType(trip_type))
}

/// The total number of trips for the trip type labelled `label`.
///
/// # Errors
/// Returns [Error::UnknownTripType] if `label` is not "Round-Trip" or
/// "Point-to-Point", or [Error::MissingTripType] if `rows` has no row for it.
pub fn trip_total_by_label(rows: &[RouteAggregate], label: &str) -> Result<u64, Error> {
    trip_total(rows, label.parse()?)
}

/// The top stations' trips as a percentage of all stations' trips, e.g. "12.5%".
///
/// Returns "n/a" when the full ranking has no trips.
pub(super) fn top_station_share(
    top_stations: &[StationRanking],
    all_stations: &[StationRanking],
) -> String {
    let all_trips = trip_sum(all_stations);
    if all_trips == 0 {
        return "n/a".to_owned();
    }

    let share = trip_sum(top_stations) as f64 / all_trips as f64 * 100.0;

    format!("{share:.1}%")
}

fn trip_sum(stations: &[StationRanking]) -> u64 {
    stations
        .iter()
        .fold(0, |sum, station| sum.saturating_add(station.trip_count))
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        dataset::{RouteAggregate, StationRanking, TripType},
    };

    use super::{format_count, top_station_share, trip_total, trip_total_by_label};

    fn totals() -> Vec<RouteAggregate> {
        vec![
            RouteAggregate {
                trip_type: TripType::PointToPoint,
                total_count: 500,
            },
            RouteAggregate {
                trip_type: TripType::RoundTrip,
                total_count: 700,
            },
        ]
    }

    fn station(name: &str, trip_count: u64) -> StationRanking {
        StationRanking {
            station_name: name.to_owned(),
            trip_count,
        }
    }

    #[test]
    fn small_counts_are_plain_integers() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1), "1");
        assert_eq!(format_count(365), "365");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn large_counts_are_abbreviated() {
        assert_eq!(format_count(1000), "1K");
        assert_eq!(format_count(1234), "1.23K");
        assert_eq!(format_count(1500), "1.5K");
        assert_eq!(format_count(29_838_806), "29.84M");
        assert_eq!(format_count(2_000_000), "2M");
        assert_eq!(format_count(3_100_000_000), "3.1B");
        assert_eq!(format_count(7_000_000_000_000), "7T");
    }

    #[test]
    fn rounding_stays_within_the_unit() {
        assert_eq!(format_count(999_999), "1000K");
        assert_eq!(format_count(999_994), "999.99K");
        assert_eq!(format_count(1_000_000), "1M");
    }

    #[test]
    fn trip_totals_are_independent_of_row_order() {
        let rows = totals();
        let mut reversed = totals();
        reversed.reverse();

        for rows in [rows, reversed] {
            assert_eq!(trip_total(&rows, TripType::RoundTrip), Ok(700));
            assert_eq!(trip_total(&rows, TripType::PointToPoint), Ok(500));
        }
    }

    #[test]
    fn trip_total_by_label_finds_both_trip_types() {
        let rows = totals();

        assert_eq!(trip_total_by_label(&rows, "Round-Trip"), Ok(700));
        assert_eq!(trip_total_by_label(&rows, "Point-to-Point"), Ok(500));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let rows = totals();

        assert_eq!(
            trip_total_by_label(&rows, "One-Way"),
            Err(Error::UnknownTripType("One-Way".to_owned()))
        );
    }

    #[test]
    fn missing_trip_type_is_an_error() {
        let rows = vec![RouteAggregate {
            trip_type: TripType::PointToPoint,
            total_count: 500,
        }];

        assert_eq!(
            trip_total(&rows, TripType::RoundTrip),
            Err(Error::MissingTripType(TripType::RoundTrip))
        );
    }

    #[test]
    fn top_station_share_is_a_percentage() {
        let all = vec![station("A", 50), station("B", 30), station("C", 20)];

        assert_eq!(top_station_share(&all[..2], &all), "80.0%");
        assert_eq!(top_station_share(&all, &all), "100.0%");
    }

    #[test]
    fn top_station_share_saturates_instead_of_overflowing() {
        let all = vec![station("A", u64::MAX), station("B", u64::MAX)];

        assert_eq!(top_station_share(&all, &all), "100.0%");
    }

    #[test]
    fn top_station_share_without_trips_is_not_available() {
        assert_eq!(top_station_share(&[], &[]), "n/a");
        assert_eq!(top_station_share(&[], &[station("A", 0)]), "n/a");
    }
}

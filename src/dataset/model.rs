//! Row types for the input tables.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// A season label as it appears in the daily metrics, e.g. "Summer".
///
/// Seasons are categorical; the set of seasons is whatever the data contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Season(String);

impl Season {
    /// Create a season from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The season's label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ride count and weather for one calendar day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyMetrics {
    /// The day the metrics were recorded.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Date,
    /// The number of bike rides that started on this day.
    #[serde(rename = "bike_rides_daily")]
    pub daily_ride_count: u64,
    /// The average temperature of the day.
    #[serde(rename = "avgTemp")]
    pub average_temperature: f64,
    /// The season the day falls in.
    pub season: Season,
}

/// A station and the number of trips that started there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationRanking {
    /// The name of the start station, usually an intersection.
    #[serde(rename = "start_station_name")]
    pub station_name: String,
    /// The number of trips that started at the station.
    #[serde(rename = "value")]
    pub trip_count: u64,
}

/// Whether a trip ended where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TripType {
    /// The trip ended at a different station.
    #[serde(rename = "Point-to-Point")]
    PointToPoint,
    /// The trip ended at the station it started from.
    #[serde(rename = "Round-Trip")]
    RoundTrip,
}

impl TripType {
    /// Every trip type, each of which must have exactly one route total.
    pub const ALL: [TripType; 2] = [TripType::PointToPoint, TripType::RoundTrip];

    /// The label used for the trip type in the input data.
    pub fn label(self) -> &'static str {
        match self {
            TripType::PointToPoint => "Point-to-Point",
            TripType::RoundTrip => "Round-Trip",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TripType {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        TripType::ALL
            .into_iter()
            .find(|trip_type| trip_type.label() == label)
            .ok_or_else(|| Error::UnknownTripType(label.to_owned()))
    }
}

/// The total number of trips of one trip type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RouteAggregate {
    /// The trip type being counted.
    #[serde(rename = "Trip_Type")]
    pub trip_type: TripType,
    /// The number of trips of this type.
    #[serde(rename = "value")]
    pub total_count: u64,
}

/// A route between two stations and how often it was ridden.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankedRoute {
    /// A human readable label for the route, e.g. "A St -> B St".
    #[serde(rename = "Route")]
    pub route_label: String,
    /// The number of trips along the route.
    pub value: u64,
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    parse_date(&text).map_err(serde::de::Error::custom)
}

/// Parse an ISO 8601 calendar date, ignoring any trailing time component
/// such as "2022-01-01 00:00:00".
fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    let date = text.trim().split([' ', 'T']).next().unwrap_or_default();

    Date::parse(date, DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, dataset::TripType};

    use super::parse_date;

    #[test]
    fn parses_plain_date() {
        assert_eq!(parse_date("2022-07-01").ok(), Some(date!(2022 - 07 - 01)));
    }

    #[test]
    fn ignores_time_component() {
        assert_eq!(
            parse_date("2022-07-01 00:00:00").ok(),
            Some(date!(2022 - 07 - 01))
        );
        assert_eq!(
            parse_date("2022-07-01T13:45:00").ok(),
            Some(date!(2022 - 07 - 01))
        );
    }

    #[test]
    fn rejects_other_date_formats() {
        assert!(parse_date("01/07/2022").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn trip_type_round_trips_through_label() {
        for trip_type in TripType::ALL {
            assert_eq!(trip_type.label().parse::<TripType>(), Ok(trip_type));
        }
    }

    #[test]
    fn unknown_trip_type_label_is_an_error() {
        assert_eq!(
            "One-Way".parse::<TripType>(),
            Err(Error::UnknownTripType("One-Way".to_owned()))
        );
        assert_eq!(
            "round-trip".parse::<TripType>(),
            Err(Error::UnknownTripType("round-trip".to_owned()))
        );
    }
}

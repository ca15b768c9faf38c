//! Reads and validates the input tables.

use std::{
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    dataset::model::{DailyMetrics, RankedRoute, RouteAggregate, StationRanking, TripType},
};

const DAILY_METRICS_FILE: &str = "reduced_data_to_plot_7.csv";
const STATION_RANKINGS_FILE: &str = "reduced_data_to_plot.csv";
const TOP_STATIONS_FILE: &str = "top20.csv";
const ROUTE_TOTALS_FILE: &str = "aggregated_trips.csv";
const ROUND_TRIP_ROUTES_FILE: &str = "top_round_routes.csv";
const POINT_TO_POINT_ROUTES_FILE: &str = "top_point_routes.csv";
const MAP_DOCUMENT_FILE: &str = "nyc_bikesv2_kepler.gl.html";

const DAILY_METRICS_COLUMNS: &[&str] = &["date", "bike_rides_daily", "avgTemp", "season"];
const STATION_RANKING_COLUMNS: &[&str] = &["start_station_name", "value"];
const ROUTE_TOTAL_COLUMNS: &[&str] = &["Trip_Type", "value"];
const RANKED_ROUTE_COLUMNS: &[&str] = &["Route", "value"];

/// The locations of every input the dashboard needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    /// One row per day: ride count, average temperature and season.
    pub daily_metrics: PathBuf,
    /// Trip counts for every start station, ranked descending.
    pub station_rankings: PathBuf,
    /// The twenty most popular start stations, ranked descending.
    pub top_stations: PathBuf,
    /// The total number of trips for each trip type.
    pub route_totals: PathBuf,
    /// The most ridden round-trip routes.
    pub round_trip_routes: PathBuf,
    /// The most ridden point-to-point routes.
    pub point_to_point_routes: PathBuf,
    /// The pre-rendered interactive map.
    pub map_document: PathBuf,
}

impl DataFiles {
    /// The default file names inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();

        Self {
            daily_metrics: data_dir.join(DAILY_METRICS_FILE),
            station_rankings: data_dir.join(STATION_RANKINGS_FILE),
            top_stations: data_dir.join(TOP_STATIONS_FILE),
            route_totals: data_dir.join(ROUTE_TOTALS_FILE),
            round_trip_routes: data_dir.join(ROUND_TRIP_ROUTES_FILE),
            point_to_point_routes: data_dir.join(POINT_TO_POINT_ROUTES_FILE),
            map_document: data_dir.join(MAP_DOCUMENT_FILE),
        }
    }
}

/// Every table the report renders from, loaded once and never modified.
///
/// Row order is the order of the input files. The ranking tables are
/// expected to be sorted already and are displayed in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    /// Daily ride counts and temperatures in chronological order.
    pub daily_metrics: Vec<DailyMetrics>,
    /// Trip counts for every start station.
    pub station_rankings: Vec<StationRanking>,
    /// The twenty most popular start stations.
    pub top_stations: Vec<StationRanking>,
    /// One total per trip type, validated to hold each type exactly once.
    pub route_totals: Vec<RouteAggregate>,
    /// Round-trip routes and their trip counts.
    pub round_trip_routes: Vec<RankedRoute>,
    /// Point-to-point routes and their trip counts.
    pub point_to_point_routes: Vec<RankedRoute>,
    /// The interactive map as a complete HTML document.
    pub map_document: String,
}

impl Datasets {
    /// Load and validate every input in `files`.
    ///
    /// # Errors
    /// Returns an error if any file is missing or unreadable, if a table is
    /// missing a column or has a row that cannot be parsed, or if the route
    /// totals do not hold exactly one row per trip type. There is no
    /// partial load: the first problem found is returned.
    pub fn load(files: &DataFiles) -> Result<Self, Error> {
        let daily_metrics = read_daily_metrics(
            open(&files.daily_metrics)?,
            &file_name(&files.daily_metrics),
        )?;
        let station_rankings = read_station_rankings(
            open(&files.station_rankings)?,
            &file_name(&files.station_rankings),
        )?;
        let top_stations = read_station_rankings(
            open(&files.top_stations)?,
            &file_name(&files.top_stations),
        )?;
        let route_totals = read_route_totals(
            open(&files.route_totals)?,
            &file_name(&files.route_totals),
        )?;
        let round_trip_routes = read_ranked_routes(
            open(&files.round_trip_routes)?,
            &file_name(&files.round_trip_routes),
        )?;
        let point_to_point_routes = read_ranked_routes(
            open(&files.point_to_point_routes)?,
            &file_name(&files.point_to_point_routes),
        )?;
        let map_document = fs::read_to_string(&files.map_document)
            .map_err(|error| io_error(&files.map_document, error))?;

        tracing::info!(
            "Loaded {} days of metrics, {} stations ({} in the top list), \
            {} round-trip routes, {} point-to-point routes and a {} byte map",
            daily_metrics.len(),
            station_rankings.len(),
            top_stations.len(),
            round_trip_routes.len(),
            point_to_point_routes.len(),
            map_document.len()
        );

        Ok(Self {
            daily_metrics,
            station_rankings,
            top_stations,
            route_totals,
            round_trip_routes,
            point_to_point_routes,
            map_document,
        })
    }
}

/// Parse the daily metrics table from CSV. `file` names the source in errors.
pub(crate) fn read_daily_metrics(
    reader: impl Read,
    file: &str,
) -> Result<Vec<DailyMetrics>, Error> {
    read_table(reader, file, DAILY_METRICS_COLUMNS)
}

/// Parse a station ranking table from CSV. `file` names the source in errors.
pub(crate) fn read_station_rankings(
    reader: impl Read,
    file: &str,
) -> Result<Vec<StationRanking>, Error> {
    read_table(reader, file, STATION_RANKING_COLUMNS)
}

/// Parse the route totals from CSV and check that each trip type appears
/// exactly once. `file` names the source in errors.
pub(crate) fn read_route_totals(
    reader: impl Read,
    file: &str,
) -> Result<Vec<RouteAggregate>, Error> {
    let route_totals = read_table(reader, file, ROUTE_TOTAL_COLUMNS)?;
    validate_route_totals(&route_totals)
        .inspect_err(|error| tracing::error!("Invalid route totals in {file}: {error}"))?;

    Ok(route_totals)
}

/// Parse a ranked route table from CSV. `file` names the source in errors.
pub(crate) fn read_ranked_routes(
    reader: impl Read,
    file: &str,
) -> Result<Vec<RankedRoute>, Error> {
    read_table(reader, file, RANKED_ROUTE_COLUMNS)
}

fn validate_route_totals(route_totals: &[RouteAggregate]) -> Result<(), Error> {
    for trip_type in TripType::ALL {
        let count = route_totals
            .iter()
            .filter(|total| total.trip_type == trip_type)
            .count();

        match count {
            0 => return Err(Error::MissingTripType(trip_type)),
            1 => {}
            _ => return Err(Error::DuplicateTripType(trip_type)),
        }
    }

    Ok(())
}

/// Deserialize every row of a CSV table with a header row.
///
/// Columns are matched by name, so leading index columns and other extra
/// columns are ignored. The header must contain every column in
/// `required_columns`.
fn read_table<T: DeserializeOwned>(
    reader: impl Read,
    file: &str,
    required_columns: &[&'static str],
) -> Result<Vec<T>, Error> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|error| malformed_row(file, &error))?
        .clone();

    if let Some(column) = required_columns
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(Error::MissingColumn {
            file: file.to_owned(),
            column,
        });
    }

    csv_reader
        .deserialize()
        .map(|record| record.map_err(|error| malformed_row(file, &error)))
        .collect()
}

fn malformed_row(file: &str, error: &csv::Error) -> Error {
    let line = error.position().map(|position| position.line()).unwrap_or(0);

    Error::MalformedRow {
        file: file.to_owned(),
        line,
        reason: error.to_string(),
    }
}

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|error| io_error(path, error))
}

fn io_error(path: &Path, error: io::Error) -> Error {
    match error.kind() {
        io::ErrorKind::NotFound => Error::MissingInputFile(path.to_path_buf()),
        _ => Error::ReadInputFile {
            path: path.to_path_buf(),
            reason: error.to_string(),
        },
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use time::macros::date;

    use crate::{
        Error,
        dataset::{DailyMetrics, RouteAggregate, Season, StationRanking, TripType},
    };

    use super::{
        DataFiles, Datasets, read_daily_metrics, read_ranked_routes, read_route_totals,
        read_station_rankings,
    };

    const DAILY_METRICS_CSV: &str = "\
date,bike_rides_daily,avgTemp,season
2022-01-01,100,30.0,Winter
2022-07-01 00:00:00,800,85.5,Summer
";

    const TOP_STATIONS_CSV: &str = "\
,start_station_name,value
0,W 21 St & 6 Ave,129016
1,West St & Chambers St,123397
";

    const ROUTE_TOTALS_CSV: &str = "\
,Trip_Type,value
0,Point-to-Point,500
1,Round-Trip,700
";

    const ROUTES_CSV: &str = "\
,Route,value
0,Central Park S & 6 Ave -> Central Park S & 6 Ave,1200
1,W 21 St & 6 Ave -> 9 Ave & W 22 St,980
";

    #[test]
    fn reads_daily_metrics_in_file_order() {
        let rows = read_daily_metrics(DAILY_METRICS_CSV.as_bytes(), "daily.csv").unwrap();

        assert_eq!(
            rows,
            vec![
                DailyMetrics {
                    date: date!(2022 - 01 - 01),
                    daily_ride_count: 100,
                    average_temperature: 30.0,
                    season: Season::new("Winter"),
                },
                DailyMetrics {
                    date: date!(2022 - 07 - 01),
                    daily_ride_count: 800,
                    average_temperature: 85.5,
                    season: Season::new("Summer"),
                },
            ]
        );
    }

    #[test]
    fn ignores_index_column() {
        let rows = read_station_rankings(TOP_STATIONS_CSV.as_bytes(), "top20.csv").unwrap();

        assert_eq!(
            rows,
            vec![
                StationRanking {
                    station_name: "W 21 St & 6 Ave".to_owned(),
                    trip_count: 129016,
                },
                StationRanking {
                    station_name: "West St & Chambers St".to_owned(),
                    trip_count: 123397,
                },
            ]
        );
    }

    #[test]
    fn reads_ranked_routes() {
        let rows = read_ranked_routes(ROUTES_CSV.as_bytes(), "routes.csv").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].route_label,
            "Central Park S & 6 Ave -> Central Park S & 6 Ave"
        );
        assert_eq!(rows[1].value, 980);
    }

    #[test]
    fn empty_table_has_no_rows() {
        let rows = read_ranked_routes("Route,value\n".as_bytes(), "routes.csv").unwrap();

        assert!(rows.is_empty());
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "date,bike_rides_daily,season\n2022-01-01,100,Winter\n";

        let result = read_daily_metrics(csv.as_bytes(), "daily.csv");

        assert_eq!(
            result,
            Err(Error::MissingColumn {
                file: "daily.csv".to_owned(),
                column: "avgTemp",
            })
        );
    }

    #[test]
    fn empty_file_is_missing_columns() {
        let result = read_station_rankings("".as_bytes(), "top20.csv");

        assert_eq!(
            result,
            Err(Error::MissingColumn {
                file: "top20.csv".to_owned(),
                column: "start_station_name",
            })
        );
    }

    #[test]
    fn negative_count_is_a_malformed_row() {
        let csv = "start_station_name,value\nA St,10\nB St,-3\n";

        let result = read_station_rankings(csv.as_bytes(), "top20.csv");

        match result {
            Err(Error::MalformedRow { file, line, .. }) => {
                assert_eq!(file, "top20.csv");
                assert_eq!(line, 3);
            }
            other => panic!("want malformed row error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_date_is_a_malformed_row() {
        let csv = "date,bike_rides_daily,avgTemp,season\nyesterday,100,30.0,Winter\n";

        let result = read_daily_metrics(csv.as_bytes(), "daily.csv");

        assert!(
            matches!(result, Err(Error::MalformedRow { line: 2, .. })),
            "want malformed row on line 2, got {result:?}"
        );
    }

    #[test]
    fn reads_route_totals() {
        let rows = read_route_totals(ROUTE_TOTALS_CSV.as_bytes(), "aggregated_trips.csv").unwrap();

        assert_eq!(
            rows,
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
        );
    }

    #[test]
    fn route_totals_missing_trip_type() {
        let csv = "Trip_Type,value\nPoint-to-Point,500\n";

        let result = read_route_totals(csv.as_bytes(), "aggregated_trips.csv");

        assert_eq!(result, Err(Error::MissingTripType(TripType::RoundTrip)));
    }

    #[test]
    fn route_totals_duplicate_trip_type() {
        let csv = "Trip_Type,value\nPoint-to-Point,500\nRound-Trip,700\nRound-Trip,1\n";

        let result = read_route_totals(csv.as_bytes(), "aggregated_trips.csv");

        assert_eq!(result, Err(Error::DuplicateTripType(TripType::RoundTrip)));
    }

    #[test]
    fn route_totals_unknown_trip_type() {
        let csv = "Trip_Type,value\nPoint-to-Point,500\nRound-Trip,700\nOne-Way,3\n";

        let result = read_route_totals(csv.as_bytes(), "aggregated_trips.csv");

        assert!(
            matches!(result, Err(Error::MalformedRow { line: 4, .. })),
            "want malformed row on line 4, got {result:?}"
        );
    }

    fn write_data_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("Could not create temporary directory");
        let files = DataFiles::in_dir(dir.path());

        fs::write(&files.daily_metrics, DAILY_METRICS_CSV).unwrap();
        fs::write(&files.station_rankings, TOP_STATIONS_CSV).unwrap();
        fs::write(&files.top_stations, TOP_STATIONS_CSV).unwrap();
        fs::write(&files.route_totals, ROUTE_TOTALS_CSV).unwrap();
        fs::write(&files.round_trip_routes, ROUTES_CSV).unwrap();
        fs::write(&files.point_to_point_routes, ROUTES_CSV).unwrap();
        fs::write(&files.map_document, "<html><body>map</body></html>").unwrap();

        dir
    }

    #[test]
    fn loads_all_tables_from_directory() {
        let dir = write_data_dir();

        let datasets = Datasets::load(&DataFiles::in_dir(dir.path())).unwrap();

        assert_eq!(datasets.daily_metrics.len(), 2);
        assert_eq!(datasets.station_rankings.len(), 2);
        assert_eq!(datasets.top_stations.len(), 2);
        assert_eq!(datasets.route_totals.len(), 2);
        assert_eq!(datasets.round_trip_routes.len(), 2);
        assert_eq!(datasets.point_to_point_routes.len(), 2);
        assert_eq!(datasets.map_document, "<html><body>map</body></html>");
    }

    #[test]
    fn missing_table_fails_the_whole_load() {
        let dir = write_data_dir();
        let files = DataFiles::in_dir(dir.path());
        fs::remove_file(&files.top_stations).unwrap();

        let result = Datasets::load(&files);

        assert_eq!(result, Err(Error::MissingInputFile(files.top_stations)));
    }

    #[test]
    fn missing_map_document_fails_the_whole_load() {
        let dir = write_data_dir();
        let files = DataFiles::in_dir(dir.path());
        fs::remove_file(&files.map_document).unwrap();

        let result = Datasets::load(&files);

        assert_eq!(result, Err(Error::MissingInputFile(files.map_document)));
    }

    #[test]
    fn malformed_table_names_the_file() {
        let dir = write_data_dir();
        let files = DataFiles::in_dir(dir.path());
        fs::write(&files.round_trip_routes, "Route\nA -> A\n").unwrap();

        let result = Datasets::load(&files);

        assert_eq!(
            result,
            Err(Error::MissingColumn {
                file: "top_round_routes.csv".to_owned(),
                column: "value",
            })
        );
    }
}

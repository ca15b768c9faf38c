//! NYC CitiBike strategy dashboard.
//!
//! A web app that presents precomputed bike-share summaries (daily rides and
//! temperatures, the most popular stations, round-trip vs point-to-point
//! routes) as a five-chapter report with charts, metrics and an embedded map.
//!
//! This library loads the input tables once at start up and provides a
//! router that serves the report as server-rendered HTML.

#![warn(missing_docs)]

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dataset;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod report;
mod routing;
mod season_filter;
mod selection;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use dataset::{
    DailyMetrics, DataFiles, Datasets, RankedRoute, RouteAggregate, Season, StationRanking,
    TripType,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use report::{
    format_count, missing_static_assets, render, trip_total, trip_total_by_label,
};
pub use routing::build_router;
pub use season_filter::{SeasonSelection, distinct_seasons, filter_by_season};
pub use selection::{Page, Selection, SelectionEvent};

use crate::{internal_server_error::InternalServerError, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required input file does not exist.
    ///
    /// Every page depends on the shared load step, so the server cannot
    /// start without all of its inputs.
    #[error("required input file {} does not exist", .0.display())]
    MissingInputFile(PathBuf),

    /// A required input file exists but could not be read.
    #[error("could not read input file {}: {reason}", path.display())]
    ReadInputFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error as a string.
        reason: String,
    },

    /// A table is missing one of the columns the dashboard needs.
    #[error("{file} is missing the required column \"{column}\"")]
    MissingColumn {
        /// The name of the table's file.
        file: String,
        /// The missing column name.
        column: &'static str,
    },

    /// A row of a table could not be parsed into the expected types.
    #[error("{file} has a malformed row on line {line}: {reason}")]
    MalformedRow {
        /// The name of the table's file.
        file: String,
        /// The 1-based line number of the row, or 0 if unknown.
        line: u64,
        /// Why the row could not be parsed.
        reason: String,
    },

    /// The route totals do not contain a row for the trip type.
    ///
    /// Exactly one row per trip type is required, there is no fallback value.
    #[error("the route totals have no row for the trip type \"{0}\"")]
    MissingTripType(TripType),

    /// The route totals contain more than one row for the trip type.
    #[error("the route totals have more than one row for the trip type \"{0}\"")]
    DuplicateTripType(TripType),

    /// A trip type label other than "Round-Trip" or "Point-to-Point".
    #[error("\"{0}\" is not a known trip type")]
    UnknownTripType(String),

    /// The requested chapter does not exist.
    #[error("\"{0}\" is not a chapter of the report")]
    UnknownPage(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UnknownPage(slug) => {
                tracing::debug!("Requested unknown chapter \"{slug}\"");
                get_404_not_found_response()
            }
            Error::MissingTripType(trip_type) => {
                tracing::error!("Could not render page: missing route total for {trip_type}");
                InternalServerError::missing_trip_data(trip_type).into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

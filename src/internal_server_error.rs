//! Defines the page to display when a report page cannot be rendered.
use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{TripType, html::error_view};

pub struct InternalServerError {
    pub description: Cow<'static, str>,
    pub fix: Cow<'static, str>,
}

impl Default for InternalServerError {
    fn default() -> Self {
        Self {
            description: Cow::Borrowed("Sorry, something went wrong."),
            fix: Cow::Borrowed("Try again later or check the server logs"),
        }
    }
}

impl InternalServerError {
    /// The route totals lost the row for `trip_type`, so the map page has no value to show.
    pub fn missing_trip_data(trip_type: TripType) -> Self {
        Self {
            description: Cow::Borrowed("Missing Trip Data"),
            fix: Cow::Owned(format!(
                "The route totals have no \"{trip_type}\" row. \
                Check the input data and restart the server."
            )),
        }
    }

    pub fn into_html(self) -> Html<String> {
        Html(error_view("Internal Server Error", "500", &self.description, &self.fix).into_string())
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

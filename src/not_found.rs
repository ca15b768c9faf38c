use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    let view = error_view(
        "Not Found",
        "404",
        "Page not found",
        "The page you are looking for is not part of this report. \
        Pick a chapter from the dashboard instead.",
    );

    (StatusCode::NOT_FOUND, Html(view.into_string())).into_response()
}

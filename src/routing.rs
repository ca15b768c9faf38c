//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints, internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found, report::get_report_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_report_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new(state.static_dir.clone()))
        .fallback(get_404_not_found)
        .with_state(state)
}

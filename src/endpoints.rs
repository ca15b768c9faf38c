//! The endpoint URIs.
//!
//! The report chapters share the root route and are selected with the
//! `page` query parameter, see [crate::Page::slug].

/// The report page.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The ECharts library, served from the static directory.
pub const ECHARTS_SCRIPT: &str = "/static/echarts.6.0.0.min.js";
/// The compiled stylesheet, served from the static directory.
pub const STYLESHEET: &str = "/static/main.css";

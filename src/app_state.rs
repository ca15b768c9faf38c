//! Implements a struct that holds the state of the REST server.

use std::{path::PathBuf, sync::Arc};

use crate::dataset::Datasets;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The tables every page renders from, shared read-only between requests.
    pub datasets: Arc<Datasets>,

    /// The directory served under `/static`: scripts, stylesheets and images.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] from the datasets loaded at start up.
    pub fn new(datasets: Datasets, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            datasets: Arc::new(datasets),
            static_dir: static_dir.into(),
        }
    }
}

//! The precomputed tables behind the report and how they are loaded.
//!
//! All aggregation happens upstream; this module only reads the finished
//! tables, checks that they have the shape the report expects, and keeps
//! them in memory for the lifetime of the process.

mod loader;
mod model;

pub use loader::{DataFiles, Datasets};
pub use model::{DailyMetrics, RankedRoute, RouteAggregate, Season, StationRanking, TripType};


//! Narrowing the daily metrics down to a set of seasons.

use std::collections::BTreeSet;

use crate::dataset::{DailyMetrics, Season};

/// The seasons selected in the stations page filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeasonSelection {
    /// No restriction, every row is kept.
    #[default]
    All,
    /// Only rows in one of these seasons are kept. May be empty.
    Only(BTreeSet<Season>),
}

impl SeasonSelection {
    /// Restrict to exactly `seasons`.
    pub fn only(seasons: impl IntoIterator<Item = Season>) -> Self {
        Self::Only(seasons.into_iter().collect())
    }

    /// Whether rows in `season` pass the filter.
    pub fn contains(&self, season: &Season) -> bool {
        match self {
            SeasonSelection::All => true,
            SeasonSelection::Only(seasons) => seasons.contains(season),
        }
    }
}

/// The distinct seasons in `rows`, in the order they first appear.
pub fn distinct_seasons(rows: &[DailyMetrics]) -> Vec<Season> {
    let mut seasons: Vec<Season> = Vec::new();

    for row in rows {
        if !seasons.contains(&row.season) {
            seasons.push(row.season.clone());
        }
    }

    seasons
}

/// The rows of `rows` whose season passes `selection`, in their original order.
///
/// An empty selection yields no rows; labels that do not occur in the data
/// simply match nothing.
pub fn filter_by_season<'a>(
    rows: &'a [DailyMetrics],
    selection: &SeasonSelection,
) -> Vec<&'a DailyMetrics> {
    rows.iter()
        .filter(|row| selection.contains(&row.season))
        .collect()
}

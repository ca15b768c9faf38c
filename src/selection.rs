//! The viewer's selection: which chapter is shown and which seasons the
//! stations page counts.
//!
//! A [Selection] only changes through a [SelectionEvent]. Each request
//! starts from the default selection and replays the events encoded in its
//! query string, so rendering is a pure function of the tables and the
//! selection.

use serde::Deserialize;

use crate::{Error, dataset::Season, season_filter::SeasonSelection};

/// One of the five mutually exclusive chapters of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// What the dashboard is for and how to navigate it.
    #[default]
    Intro,
    /// Daily rides plotted against temperature.
    Weather,
    /// The most popular start stations, with the season filter.
    PopularStations,
    /// The embedded map of aggregated trips and the route rankings.
    InteractiveMap,
    /// Conclusions, recommendations and limitations.
    Recommendations,
}

impl Page {
    /// Every page, in the order shown in the chapter selector.
    pub const ALL: [Page; 5] = [
        Page::Intro,
        Page::Weather,
        Page::PopularStations,
        Page::InteractiveMap,
        Page::Recommendations,
    ];

    /// The value used for the page in URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Intro => "intro",
            Page::Weather => "weather",
            Page::PopularStations => "popular-stations",
            Page::InteractiveMap => "map",
            Page::Recommendations => "recommendations",
        }
    }

    /// The label shown in the chapter selector.
    pub fn label(self) -> &'static str {
        match self {
            Page::Intro => "Intro page",
            Page::Weather => "Weather component and bike usage",
            Page::PopularStations => "Most popular stations",
            Page::InteractiveMap => "Interactive map with aggregated bike trips",
            Page::Recommendations => "Recommendations",
        }
    }

    /// Find the page for a URL slug.
    ///
    /// # Errors
    /// Returns [Error::UnknownPage] if no page uses `slug`.
    pub fn from_slug(slug: &str) -> Result<Self, Error> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .ok_or_else(|| Error::UnknownPage(slug.to_owned()))
    }
}

/// The complete state of the viewer's controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// The chapter being shown.
    pub page: Page,
    /// The seasons counted on the stations page. Always
    /// [SeasonSelection::All] on the other pages.
    pub seasons: SeasonSelection,
}

/// A change made through one of the two controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A chapter was picked in the chapter selector.
    PageSelected(Page),
    /// The season checkboxes on the stations page changed.
    SeasonsChanged(Vec<Season>),
}

impl Selection {
    /// Apply `event` and return the new selection.
    ///
    /// Selecting a page always resets the season filter to all seasons.
    /// Season changes only apply while the stations page is shown.
    pub fn apply(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::PageSelected(page) => Self {
                page,
                seasons: SeasonSelection::All,
            },
            SelectionEvent::SeasonsChanged(seasons) if self.page == Page::PopularStations => {
                Self {
                    seasons: SeasonSelection::only(seasons),
                    ..self
                }
            }
            SelectionEvent::SeasonsChanged(_) => {
                tracing::debug!(
                    "Ignoring season filter change on the \"{}\" page",
                    self.page.label()
                );
                self
            }
        }
    }
}

/// The query string of a report request.
///
/// The chapter selector submits only `page`. The season filter submits
/// `page`, `filtered=true` and one `season` per checked box, so an empty
/// season list is distinguishable from a plain page visit.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    /// The page slug, the intro page if absent.
    pub page: Option<String>,
    /// Whether the season filter form was submitted.
    #[serde(default)]
    pub filtered: bool,
    /// The checked seasons.
    #[serde(default)]
    pub season: Vec<String>,
}

impl SelectionQuery {
    /// Replay the events encoded in the query onto the default selection.
    ///
    /// # Errors
    /// Returns [Error::UnknownPage] if `page` is not a page slug.
    pub fn into_selection(self) -> Result<Selection, Error> {
        let page = match self.page.as_deref() {
            None | Some("") => Page::default(),
            Some(slug) => Page::from_slug(slug)?,
        };

        let mut selection = Selection::default().apply(SelectionEvent::PageSelected(page));

        if self.filtered {
            let seasons = self.season.into_iter().map(Season::new).collect();
            selection = selection.apply(SelectionEvent::SeasonsChanged(seasons));
        }

        Ok(selection)
    }
}

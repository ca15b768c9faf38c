//! The report: five chapters rendered from the loaded tables and the
//! viewer's selection.
//!
//! Exactly one chapter is rendered per request. Rendering never mutates the
//! tables, so the same selection always produces the same page.

mod charts;
mod intro;
mod map;
mod metrics;
mod recommendations;
mod stations;
mod weather;

use std::path::{Path, PathBuf};

use axum::extract::State;
use axum_extra::extract::Query;
use maud::{Markup, html};

use crate::{
    AppState, Error, Page, Selection,
    dataset::Datasets,
    endpoints,
    html::{DASHBOARD_TITLE, HEADER_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::{ChapterSelector, sidebar},
    selection::SelectionQuery,
};

use self::charts::{ReportChart, charts_script};

pub use self::metrics::{format_count, trip_total, trip_total_by_label};

/// What a chapter contributes to the page.
pub(crate) struct PageContent {
    /// The main content.
    body: Markup,
    /// The charts placed in `body`, initialized once the page loads.
    charts: Vec<ReportChart>,
    /// Controls shown in the sidebar below the chapter selector.
    sidebar_controls: Option<Markup>,
}

impl PageContent {
    fn without_charts(body: Markup) -> Self {
        Self {
            body,
            charts: Vec::new(),
            sidebar_controls: None,
        }
    }
}

/// Render the chapter chosen by `selection`.
///
/// # Errors
/// Returns [Error::MissingTripType] if the map chapter is selected and the
/// route totals lost one of the trip types.
pub fn render(datasets: &Datasets, selection: &Selection) -> Result<Markup, Error> {
    let content = match selection.page {
        Page::Intro => intro::page(),
        Page::Weather => weather::page(&datasets.daily_metrics),
        Page::PopularStations => stations::page(datasets, &selection.seasons),
        Page::InteractiveMap => map::page(datasets)?,
        Page::Recommendations => recommendations::page(),
    };

    let mut head_elements = Vec::new();
    if !content.charts.is_empty() {
        head_elements.push(HeadElement::ScriptLink(endpoints::ECHARTS_SCRIPT.to_owned()));
        head_elements.push(charts_script(&content.charts));
    }

    let page = html!(
        div class="flex flex-col lg:flex-row"
        {
            (sidebar(
                ChapterSelector::new(selection.page),
                content.sidebar_controls.as_ref(),
            ))

            main class=(PAGE_CONTAINER_STYLE)
            {
                h1 class=(HEADER_STYLE) { (DASHBOARD_TITLE) }
                (content.body)
            }
        }
    );

    Ok(base(selection.page.label(), &head_elements, &page))
}

/// Render the chapter and seasons encoded in the request's query string.
pub async fn get_report_page(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Markup, Error> {
    let selection = query.into_selection()?;

    render(&state.datasets, &selection)
}

/// The images shown in the narrative, relative to `/static/images`.
const NARRATIVE_IMAGES: [&str; 5] = [
    intro::HERO_IMAGE,
    stations::STREET_VIEW_IMAGES[0].0,
    stations::STREET_VIEW_IMAGES[1].0,
    stations::STREET_VIEW_IMAGES[2].0,
    recommendations::CLOSING_IMAGE,
];

/// The static files referenced by the report that do not exist in `static_dir`.
///
/// These are not inputs of the analysis, a missing file only leaves a gap
/// in the page.
pub fn missing_static_assets(static_dir: &Path) -> Vec<PathBuf> {
    let scripts_and_styles = [endpoints::ECHARTS_SCRIPT, endpoints::STYLESHEET]
        .into_iter()
        .map(|url| {
            static_dir.join(
                url.trim_start_matches(endpoints::STATIC)
                    .trim_start_matches('/'),
            )
        });
    let images = NARRATIVE_IMAGES
        .into_iter()
        .map(|file_name| static_dir.join("images").join(file_name));

    scripts_and_styles
        .chain(images)
        .filter(|path| !path.is_file())
        .collect()
}

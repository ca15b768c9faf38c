//! The most popular stations chapter and its season filter.

use maud::{Markup, html};

use crate::{
    Page,
    dataset::{Datasets, Season},
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE, PARAGRAPH_STYLE,
        SEASON_BADGE_STYLE, static_image,
    },
    report::{
        PageContent,
        charts::{ReportChart, chart_container, top_stations_chart},
        metrics::{Metric, format_count, metric_view, top_station_share},
    },
    season_filter::{SeasonSelection, distinct_seasons, filter_by_season},
};

const CHART_ID: &str = "top-stations-chart";
const CHART_HEIGHT: u32 = 600;

/// The street views of the three most popular stations and their captions.
pub(super) const STREET_VIEW_IMAGES: [(&str, &str); 3] = [
    ("W21st.PNG", "1. W 21 St & 6 Avenue:"),
    ("ChambersSt.PNG", "2. West St & Chambers St:"),
    ("Broadway.PNG", "3. Broadway & W 58 St:"),
];

pub(super) fn page(datasets: &Datasets, seasons: &SeasonSelection) -> PageContent {
    let filtered_days = filter_by_season(&datasets.daily_metrics, seasons);
    let total_rides = Metric {
        label: "Total Bike Rides",
        value: format_count(filtered_days.len() as u64),
    };
    let top_share = Metric {
        label: "Top 20 share of trips",
        value: top_station_share(&datasets.top_stations, &datasets.station_rankings),
    };

    let chart = ReportChart::new(
        CHART_ID,
        CHART_HEIGHT,
        top_stations_chart(&datasets.top_stations).to_chart(),
    );

    let body = html!(
        div class="grid grid-cols-1 md:grid-cols-2 gap-4"
        {
            (metric_view(&total_rides))
            (metric_view(&top_share))
        }

        (chart_container(&chart))

        p class=(PARAGRAPH_STYLE)
        {
            em class="font-semibold"
            {
                "The station names can be hard to place without a detailed \
                knowledge of the city's streets. If that is the case, skip ahead \
                to the interactive map chapter to see where these trips happen."
            }
        }

        p class=(PARAGRAPH_STYLE)
        {
            "Some start stations are clearly busier than others. The top three \
            are W 21 St & 6 Avenue in Midtown Manhattan, West St & Chambers St \
            halfway along the Hudson River Greenway, and Broadway & W 58 St at \
            the southwest corner of Central Park. Each combines popular tourist \
            attractions with a steady stream of locals commuting through. The \
            gap between the busiest and the least busy of the twenty is small, \
            which suggests that the city's points of interest are spread across \
            many neighbourhoods. The street views below show the areas these \
            stations serve."
        }

        div class="grid grid-cols-1 md:grid-cols-3 gap-4"
        {
            @for (file_name, caption) in STREET_VIEW_IMAGES {
                figure
                {
                    figcaption class="mb-2 font-medium" { (caption) }
                    (static_image(file_name, caption))
                }
            }
        }
    );

    PageContent {
        body,
        charts: vec![chart],
        sidebar_controls: Some(season_filter_form(
            &distinct_seasons(&datasets.daily_metrics),
            seasons,
        )),
    }
}

/// The season checkboxes, all checked unless a narrower selection is active.
fn season_filter_form(seasons: &[Season], selection: &SeasonSelection) -> Markup {
    html!(
        form method="get" action=(endpoints::ROOT)
        {
            input type="hidden" name="page" value=(Page::PopularStations.slug());
            input type="hidden" name="filtered" value="true";

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Select the season" }

                @for (index, season) in seasons.iter().enumerate() {
                    div class="flex items-center gap-2 mb-2"
                    {
                        input
                            type="checkbox"
                            id=(format!("season-{index}"))
                            name="season"
                            value=(season.as_str())
                            class=(FORM_CHECKBOX_STYLE)
                            checked[selection.contains(season)];

                        label for=(format!("season-{index}"))
                        {
                            span class=(SEASON_BADGE_STYLE) { (season.as_str()) }
                        }
                    }
                }
            }

            button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Apply" }
        }
    )
}

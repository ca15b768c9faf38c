use maud::html;

use crate::{
    dataset::DailyMetrics,
    html::{PARAGRAPH_STYLE, link},
    report::{
        PageContent,
        charts::{ReportChart, chart_container, daily_trend_chart},
    },
};

const CHART_ID: &str = "daily-trend-chart";
const CHART_HEIGHT: u32 = 600;
const TOURISM_SEASONALITY_URL: &str =
    "https://www.seathecity.com/when-is-the-best-time-to-visit-new-york-city/";

pub(super) fn page(daily_metrics: &[DailyMetrics]) -> PageContent {
    let chart = ReportChart::new(
        CHART_ID,
        CHART_HEIGHT,
        daily_trend_chart(daily_metrics).to_chart(),
    );

    let body = html!(
        (chart_container(&chart))

        p class=(PARAGRAPH_STYLE)
        {
            "The two lines mirror each other closely: daily bike usage rises and \
            falls with the temperature. When temperatures drop, so do the number \
            of trips. The inventory shortages customers notice are therefore \
            likely to be most common in the warmer months, roughly May to \
            October. That window also lines up with the peak season for \
            international tourism in New York City ("
            (link(TOURISM_SEASONALITY_URL, "more on tourism seasonality"))
            ")."
        }
    );

    PageContent {
        body,
        charts: vec![chart],
        sidebar_controls: None,
    }
}

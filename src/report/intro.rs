use maud::html;

use crate::{
    Page,
    html::{PARAGRAPH_STYLE, SUBHEADER_STYLE, bullet_list, static_image},
    report::PageContent,
};

pub(super) const HERO_IMAGE: &str = "Citi_Bike_Ride_experience_Hero_3x.webp";

pub(super) fn page() -> PageContent {
    let chapters: Vec<&str> = Page::ALL
        .into_iter()
        .filter(|page| *page != Page::Intro)
        .map(Page::label)
        .collect();

    let body = html!(
        h3 class=(SUBHEADER_STYLE)
        {
            "This dashboard gives insight into the expansion problems Citi Bike \
            currently faces in New York City."
        }

        p class=(PARAGRAPH_STYLE)
        {
            "Customers regularly report that no bikes are available at certain \
            stations and times of day. The following chapters look at the \
            likely causes behind these shortages:"
        }

        (bullet_list(&chapters))

        p class=(PARAGRAPH_STYLE)
        {
            "Use the 'Chapter Selector' dropdown on the left to move between \
            the different parts of the analysis."
        }

        (static_image(HERO_IMAGE, "Riding a Citi Bike through the city"))
    );

    PageContent::without_charts(body)
}

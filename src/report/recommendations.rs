use maud::html;

use crate::{
    html::{HEADER_STYLE, LIST_STYLE, SUBHEADER_STYLE, bullet_list, static_image},
    report::PageContent,
};

pub(super) const CLOSING_IMAGE: &str = "shutterstock_1528044107-1024x683.jpg";

pub(super) fn page() -> PageContent {
    let body = html!(
        h2 class=(HEADER_STYLE) { "Conclusions and Recommendations" }

        h3 class=(SUBHEADER_STYLE)
        {
            "The analysis suggests Citi Bike should focus on the following \
            objectives:"
        }

        ul class=(LIST_STYLE)
        {
            li
            {
                "Add stations around the Hudson River Greenway and other busy \
                tourist areas such as Central Park."
            }
            li
            {
                "Point-to-point trips are common in these tourist areas, so offer \
                casual riders an incentive to return bikes to the station they \
                started from."
                ul class="list-[circle] list-inside ml-6 mt-1"
                {
                    li
                    {
                        "For example, trial a 5% or 10% fare discount for bikes \
                        returned within a set distance of their starting station. \
                        This keeps inventory at or near the busiest areas and \
                        reduces the cost of restocking bikes at the end of each day."
                    }
                }
            }
            li
            {
                "Keep these stations fully stocked during the warmer months to \
                meet the higher demand, and reduce supply in winter and late \
                autumn to save on logistics."
            }
        }

        h2 class=(HEADER_STYLE) { "Project Limitations" }

        (bullet_list(&[
            "The analysis did not include demographics. Gender, age and bike \
            type could point to further operational improvements or new \
            revenue.",
            "Trip durations were looked at, but the rental system makes it hard \
            to tell which values are genuine. They were left out to avoid \
            misrepresenting the data and deserve a closer look in a follow-up \
            project.",
        ]))

        (static_image(CLOSING_IMAGE, "The Hudson River Greenway"))
    );

    PageContent::without_charts(body)
}

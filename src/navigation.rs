//! This file defines the sidebar and the chapter selector used to move between pages.

use maud::{Markup, html};

use crate::{
    Page, endpoints,
    html::{BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_SELECT_STYLE},
};

/// An option in the chapter selector.
///
/// Only one option should be marked as current at any one time.
#[derive(Clone)]
struct ChapterOption {
    page: Page,
    is_current: bool,
}

/// The single-select control that picks which chapter is shown.
pub struct ChapterSelector {
    options: Vec<ChapterOption>,
}

impl ChapterSelector {
    /// Get the chapter selector with `active_page` selected.
    pub fn new(active_page: Page) -> Self {
        let options = Page::ALL
            .into_iter()
            .map(|page| ChapterOption {
                page,
                is_current: page == active_page,
            })
            .collect();

        Self { options }
    }

    /// Render the selector as a form that loads the chosen chapter.
    ///
    /// Only the `page` parameter is submitted, so switching chapters always
    /// starts with an unfiltered selection.
    pub fn into_html(self) -> Markup {
        html!(
            form method="get" action=(endpoints::ROOT)
            {
                label for="page" class=(FORM_LABEL_STYLE)
                {
                    "Select a chapter of the analysis to navigate to"
                }

                select
                    id="page"
                    name="page"
                    class=(FORM_SELECT_STYLE)
                    onchange="this.form.submit()"
                {
                    @for option in self.options {
                        option value=(option.page.slug()) selected[option.is_current]
                        {
                            (option.page.label())
                        }
                    }
                }

                button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Go" }
            }
        )
    }
}

/// The sidebar with the chapter selector and any page specific controls below it.
pub fn sidebar(selector: ChapterSelector, page_controls: Option<&Markup>) -> Markup {
    html!(
        aside
            class="w-full lg:w-80 lg:min-h-screen shrink-0 p-6 bg-white
                border-b lg:border-b-0 lg:border-r border-gray-200
                dark:bg-gray-800 dark:border-gray-700 text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-semibold mb-4" { "Chapter Selector" }

            (selector.into_html())

            @if let Some(controls) = page_controls {
                div class="mt-8" { (controls) }
            }
        }
    )
}

#[cfg(test)]
mod chapter_selector_tests {
    use scraper::{Html, Selector};

    use crate::{Page, navigation::ChapterSelector};

    use super::sidebar;

    #[test]
    fn set_active_page() {
        for active_page in Page::ALL {
            let selector = ChapterSelector::new(active_page);

            assert_eq!(selector.options.len(), 5);
            for option in selector.options {
                assert_eq!(
                    option.is_current,
                    option.page == active_page,
                    "option {:?} with active page {active_page:?}",
                    option.page
                );
            }
        }
    }

    #[test]
    fn renders_one_selected_option_per_page() {
        let html = Html::parse_fragment(
            &ChapterSelector::new(Page::InteractiveMap)
                .into_html()
                .into_string(),
        );
        let option_selector = Selector::parse("select[name='page'] option").unwrap();
        let selected_selector = Selector::parse("select[name='page'] option[selected]").unwrap();

        let options: Vec<_> = html.select(&option_selector).collect();
        let selected: Vec<_> = html.select(&selected_selector).collect();

        assert_eq!(options.len(), 5);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value().attr("value"), Some("map"));
        assert_eq!(
            selected[0].text().collect::<String>(),
            "Interactive map with aggregated bike trips"
        );
    }

    #[test]
    fn selector_submits_only_the_page() {
        let html = Html::parse_fragment(&ChapterSelector::new(Page::Intro).into_html().into_string());
        let named_inputs = Selector::parse("form [name]").unwrap();

        let names: Vec<_> = html
            .select(&named_inputs)
            .filter_map(|element| element.value().attr("name"))
            .collect();

        assert_eq!(names, vec!["page"]);
    }

    #[test]
    fn sidebar_includes_page_controls() {
        let controls = maud::html!(p id="extra" { "Extra controls" });

        let with_controls = Html::parse_fragment(
            &sidebar(ChapterSelector::new(Page::PopularStations), Some(&controls)).into_string(),
        );
        let without_controls =
            Html::parse_fragment(&sidebar(ChapterSelector::new(Page::Intro), None).into_string());

        let extra = Selector::parse("#extra").unwrap();
        assert!(with_controls.select(&extra).next().is_some());
        assert!(without_controls.select(&extra).next().is_none());
    }
}

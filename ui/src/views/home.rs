use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "BookStats" }
            p { "A reading log, visualized." }
            p {
                "Every book tracked in the reading sheet shows up here: what was "
                "read in each language, when it was finished, and how long it took."
            }

            ul { class: "page-home__features",
                li { "Language breakdown as a pie chart" }
                li { "A wall of covers, filterable by year and month" }
                li { "Authors, timeline, duration, monthly, and calendar views" }
            }
            p { class: "page-home__cta", "Open the dashboard to browse the shelf." }
        }
    }
}

//! Route pages for the sidebar targets. The review screens themselves are
//! provided elsewhere; these only give each route a titled outlet.
use dioxus::prelude::*;

use crate::components::layout::NavTarget;

#[component]
pub fn ReviewList() -> Element {
    page("/")
}

#[component]
pub fn CreateReview() -> Element {
    page("/create")
}

fn page(path: &str) -> Element {
    let title = NavTarget::by_path(path).map(|t| t.label).unwrap_or_default();
    tracing::debug!(path, "rendering review page");

    rsx! {
        section { class: "page col-md-10",
            h1 { "{title}" }
        }
    }
}

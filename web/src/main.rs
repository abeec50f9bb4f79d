use dioxus::prelude::*;

use ui::components::Navigation;
use ui::views::{CreateReview, ReviewList};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    ReviewList {},
    #[route("/create")]
    CreateReview {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting web shell");

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Sidebar beside the routed page. `Navigation` falls back to router links,
/// which resolve against this `Route` table.
#[component]
fn WebLayout() -> Element {
    let route = use_route::<Route>();
    tracing::debug!(%route, "layout render");

    rsx! {
        div { class: "row",
            Navigation {}
            Outlet::<Route> {}
        }
    }
}

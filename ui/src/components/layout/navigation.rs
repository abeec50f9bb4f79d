use dioxus::prelude::*;

use super::links::use_link_renderer;

// Sidebar stylesheet (inlined as well for release native builds)
const NAVIGATION_CSS: Asset = asset!("/assets/styling/navigation.css");
const NAVIGATION_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navigation.css"
));

/// Class on the sidebar `nav` container.
pub const NAV_CLASS: &str = "col-md-2";
/// Class on the `div` wrapping each link.
pub const SIDEBAR_ITEM_CLASS: &str = "sidebar_item";

/// A fixed sidebar entry: the route path and the visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavTarget {
    pub path: &'static str,
    pub label: &'static str,
}

/// Sidebar entries in display order.
pub static NAV_TARGETS: [NavTarget; 2] = [
    NavTarget {
        path: "/create",
        label: "Add New Review",
    },
    NavTarget {
        path: "/",
        label: "List All Reviews",
    },
];

impl NavTarget {
    pub fn by_path(path: &str) -> Option<&'static NavTarget> {
        NAV_TARGETS.iter().find(|t| t.path == path)
    }
}

/// Sidebar with one link per [`NAV_TARGETS`] entry.
///
/// Links come from the nearest `LinkRenderer` in context (router `Link` when
/// none is installed). Rendering never navigates.
#[component]
pub fn Navigation() -> Element {
    let links = use_link_renderer();
    tracing::trace!(
        renderer = links.name(),
        targets = NAV_TARGETS.len(),
        "rendering sidebar navigation"
    );

    rsx! {
        document::Link { rel: "stylesheet", href: NAVIGATION_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVIGATION_CSS_INLINE}" }
        }

        nav { class: NAV_CLASS,
            ul {
                for target in NAV_TARGETS.iter() {
                    li { key: "{target.path}",
                        div { class: SIDEBAR_ITEM_CLASS,
                            {links.render_link(target.path, rsx! { "{target.label}" })}
                        }
                    }
                }
            }
        }
    }
}

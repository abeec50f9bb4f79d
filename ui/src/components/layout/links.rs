//! Link rendering seam between the shared layout and the platform router.
//!
//! `ui` never names a platform's `Route` enum. Components that emit navigation
//! links ask the nearest [`LinkRenderer`] in context to build them, so shells can
//! swap in their own link element and tests can swap in a recorder that never
//! navigates.
//!
//! ```ignore
//! use ui::components::layout::{provide_link_renderer, LinkRendererHandle};
//!
//! #[component]
//! fn Shell() -> Element {
//!     provide_link_renderer(LinkRendererHandle::new(MyLinks));
//!     rsx! { Navigation {} }
//! }
//! ```
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

/// Builds a navigable element for a route path.
///
/// Implementations must not navigate while rendering. Navigation is only
/// requested once the returned element is activated.
pub trait LinkRenderer {
    /// Wrap `children` in an element that navigates to `to` when activated.
    fn render_link(&self, to: &'static str, children: Element) -> Element;

    /// Short name used in render traces.
    fn name(&self) -> &'static str;
}

/// Default renderer backed by the Dioxus router `Link`.
///
/// Activation is intercepted by the router, so there is no document reload.
/// Requires a `Router` further up the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterLinks;

impl LinkRenderer for RouterLinks {
    fn render_link(&self, to: &'static str, children: Element) -> Element {
        rsx! {
            Link { to, {children} }
        }
    }

    fn name(&self) -> &'static str {
        "router"
    }
}

/// Cloneable handle stored in context.
#[derive(Clone)]
pub struct LinkRendererHandle(Rc<dyn LinkRenderer>);

impl LinkRendererHandle {
    pub fn new(renderer: impl LinkRenderer + 'static) -> Self {
        Self(Rc::new(renderer))
    }

    pub fn render_link(&self, to: &'static str, children: Element) -> Element {
        self.0.render_link(to, children)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for LinkRendererHandle {
    fn default() -> Self {
        Self::new(RouterLinks)
    }
}

impl fmt::Debug for LinkRendererHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkRendererHandle")
            .field(&self.name())
            .finish()
    }
}

/// Install `handle` as the link renderer for the calling component's subtree.
///
/// Hook: call unconditionally at the top of a component, like any `use_*`.
pub fn provide_link_renderer(handle: LinkRendererHandle) -> LinkRendererHandle {
    use_context_provider(|| handle)
}

/// Renderer installed above the caller, or the router-backed default.
pub fn use_link_renderer() -> LinkRendererHandle {
    try_use_context::<LinkRendererHandle>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl LinkRenderer for Inert {
        fn render_link(&self, to: &'static str, children: Element) -> Element {
            rsx! { span { "data-to": to, {children} } }
        }

        fn name(&self) -> &'static str {
            "inert"
        }
    }

    #[test]
    fn default_handle_uses_router_links() {
        assert_eq!(LinkRendererHandle::default().name(), "router");
    }

    #[test]
    fn handle_forwards_to_wrapped_renderer() {
        let handle = LinkRendererHandle::new(Inert);
        assert_eq!(handle.name(), "inert");
        assert_eq!(format!("{handle:?}"), "LinkRendererHandle(\"inert\")");
    }

    #[component]
    fn InertChild() -> Element {
        let links = use_link_renderer();
        links.render_link("/create", rsx! { "Add" })
    }

    fn inert_shell() -> Element {
        provide_link_renderer(LinkRendererHandle::new(Inert));
        rsx! { InertChild {} }
    }

    #[test]
    fn provided_renderer_is_used_by_descendants() {
        let mut dom = VirtualDom::new(inert_shell);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("data-to=\"/create\""), "{html}");
        assert!(html.contains("Add"), "{html}");
    }
}

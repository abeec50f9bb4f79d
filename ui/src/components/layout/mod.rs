pub mod links;
pub mod navigation;

pub use links::{
    provide_link_renderer, use_link_renderer, LinkRenderer, LinkRendererHandle, RouterLinks,
};
pub use navigation::{NavTarget, Navigation, NAV_CLASS, NAV_TARGETS, SIDEBAR_ITEM_CLASS};

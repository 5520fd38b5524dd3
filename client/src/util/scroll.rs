//! Smooth scrolling to page regions.

use crate::state::ui::Scroller;

/// Scrolls with `behavior: "smooth"` via `Element::scrollIntoView`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScroller;

impl Scroller for SmoothScroller {
    fn scroll_to(&self, element_id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(element_id))
            else {
                return false;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = element_id;
            false
        }
    }
}

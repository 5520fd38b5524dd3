//! Local UI chrome state (mobile menu overlay) and section navigation.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the content and theme
//! stores. Scrolling goes through the `Scroller` seam so navigation can be
//! exercised without a document.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::section::SectionId;

/// Scrolls a region into view.
pub trait Scroller {
    /// Scroll the element with `element_id` into view. Returns `false` when
    /// no such element exists.
    fn scroll_to(&self, element_id: &str) -> bool;
}

/// UI state for the navigation chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scroll to `target` and close the mobile menu.
    ///
    /// The menu closes whether or not the region exists. Returns whether a
    /// scroll happened.
    pub fn navigate_to(&mut self, target: SectionId, scroller: &impl Scroller) -> bool {
        let scrolled = scroller.scroll_to(target.as_str());
        if !scrolled {
            log::debug!("navigation target #{target} not in document");
        }
        self.menu_open = false;
        scrolled
    }
}

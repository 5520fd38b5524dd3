use super::*;

use std::cell::RefCell;

/// Records scroll requests; only ids in `present` exist in the "document".
struct RecordingScroller {
    present: Vec<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl RecordingScroller {
    fn with(present: &[&'static str]) -> Self {
        Self { present: present.to_vec(), calls: RefCell::new(Vec::new()) }
    }
}

impl Scroller for RecordingScroller {
    fn scroll_to(&self, element_id: &str) -> bool {
        self.calls.borrow_mut().push(element_id.to_owned());
        self.present.contains(&element_id)
    }
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    assert!(!UiState::default().menu_open);
}

#[test]
fn toggle_menu_flips_overlay() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

// =============================================================
// navigate_to
// =============================================================

#[test]
fn navigate_to_projects_scrolls_and_closes_menu() {
    let scroller = RecordingScroller::with(&["home", "projects"]);
    let mut state = UiState { menu_open: true };

    assert!(state.navigate_to(SectionId::Projects, &scroller));
    assert_eq!(*scroller.calls.borrow(), vec!["projects".to_owned()]);
    assert!(!state.menu_open);
}

#[test]
fn navigate_to_missing_region_still_closes_menu() {
    let scroller = RecordingScroller::with(&[]);
    let mut state = UiState { menu_open: true };

    assert!(!state.navigate_to(SectionId::Certifications, &scroller));
    assert!(!state.menu_open);
}

#[test]
fn navigate_to_with_closed_menu_leaves_it_closed() {
    let scroller = RecordingScroller::with(&["contact"]);
    let mut state = UiState::default();

    assert!(state.navigate_to(SectionId::Contact, &scroller));
    assert!(!state.menu_open);
}

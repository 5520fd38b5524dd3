use super::*;

// =============================================================
// SectionId
// =============================================================

#[test]
fn default_section_is_home() {
    assert_eq!(SectionId::default(), SectionId::Home);
    assert_eq!(SectionId::ALL[0], SectionId::Home);
}

#[test]
fn section_order_matches_page_layout() {
    let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(
        ids,
        ["home", "about", "experience", "projects", "skills", "certifications", "contact"]
    );
}

#[test]
fn from_element_id_matches_every_section() {
    for section in SectionId::ALL {
        assert_eq!(SectionId::from_element_id(section.as_str()), Some(section));
    }
    assert_eq!(SectionId::from_element_id("blog"), None);
    assert_eq!(SectionId::from_element_id("Home"), None);
}

#[test]
fn labels_capitalize_the_element_id() {
    for section in SectionId::ALL {
        let id = section.as_str();
        let mut expected = id[..1].to_ascii_uppercase();
        expected.push_str(&id[1..]);
        assert_eq!(section.label(), expected);
    }
}

// =============================================================
// SectionTracker
// =============================================================

#[test]
fn tracker_starts_on_home() {
    assert_eq!(SectionTracker::default().active(), SectionId::Home);
}

#[test]
fn every_section_becomes_active_when_it_intersects() {
    let mut tracker = SectionTracker::default();
    for section in SectionId::ALL {
        tracker.observe([(section.as_str(), true)]);
        assert_eq!(tracker.active(), section);
    }
}

#[test]
fn non_intersecting_entries_do_not_change_active() {
    let mut tracker = SectionTracker::default();
    tracker.observe([("skills", true)]);
    let changed = tracker.observe([("skills", false), ("contact", false)]);
    assert!(!changed);
    assert_eq!(tracker.active(), SectionId::Skills);
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let mut tracker = SectionTracker::default();
    let changed = tracker.observe([("about", true), ("experience", false), ("projects", true)]);
    assert!(changed);
    assert_eq!(tracker.active(), SectionId::Projects);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut tracker = SectionTracker::default();
    tracker.observe([("about", true), ("footer", true)]);
    assert_eq!(tracker.active(), SectionId::About);
}

#[test]
fn observe_reports_no_change_when_same_section_reintersects() {
    let mut tracker = SectionTracker::default();
    assert!(tracker.observe([("contact", true)]));
    assert!(!tracker.observe([("contact", true)]));
}

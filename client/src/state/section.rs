//! Named page regions and the active-section tracker.
//!
//! DESIGN
//! ======
//! `SectionTracker` is the only writer of the active identifier. The page
//! feeds it intersection batches and republishes the result through a
//! read-only signal, so navigation can highlight but never reassign it.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// A named region of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl SectionId {
    /// Every section, top to bottom.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// Element id carried by the region in the rendered document.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Certifications => "Certifications",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which section is in focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionTracker {
    active: SectionId,
}

impl SectionTracker {
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Apply one batch of `(element_id, is_intersecting)` entries in
    /// delivery order.
    ///
    /// Each intersecting entry replaces the active section, so the last one
    /// in the batch wins. Entries for unknown ids are ignored. Returns `true`
    /// when the active section changed.
    pub fn observe<'a, I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let before = self.active;
        for (id, intersecting) in batch {
            if !intersecting {
                continue;
            }
            if let Some(section) = SectionId::from_element_id(id) {
                self.active = section;
            }
        }
        self.active != before
    }
}

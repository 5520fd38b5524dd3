//! Static portfolio content.
//!
//! The records are authored in `content/portfolio.json`, embedded at compile
//! time, and parsed once at startup. Nothing mutates them afterwards; the
//! rendering code only iterates them in order.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use serde::Deserialize;

const EMBEDDED: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("portfolio content is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pictograms referenced by content records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Briefcase,
    Code,
    Star,
    GraduationCap,
    Award,
    MapPin,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub socials: Vec<ContactLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub focus: String,
    pub location: String,
    pub experience_summary: String,
    #[serde(default)]
    pub about: Vec<String>,
    pub availability: Availability,
    pub resume: ResumeAsset,
    pub copyright_year: u16,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Availability {
    pub title: String,
    pub note: String,
}

/// Downloadable resume served by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ResumeAsset {
    pub href: String,
    pub download_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub subtitle: String,
    pub detail: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectLinks {
    pub live: Option<String>,
    pub code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Email,
    Phone,
    Linkedin,
    Github,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
}

impl ContactLink {
    /// Web links open in a new tab; `mailto:`/`tel:` stay in place.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }

    /// `(target, rel)` attributes for the anchor.
    pub fn anchor_attrs(&self) -> (Option<&'static str>, Option<&'static str>) {
        if self.is_external() {
            (Some("_blank"), Some("noreferrer"))
        } else {
            (None, None)
        }
    }
}

impl PortfolioContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Content compiled into the crate.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    /// Embedded content, or empty content when it fails to parse.
    pub fn load_or_default() -> Self {
        Self::embedded().unwrap_or_else(|e| {
            log::error!("{e}");
            Self::default()
        })
    }
}

//! Text glyphs standing in for an icon font.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

use crate::content::{Icon, LinkKind};

pub const SUN: &str = "☀";
pub const MOON: &str = "☾";
pub const MENU: &str = "☰";
pub const CLOSE: &str = "✕";
pub const CHEVRON: &str = "›";
pub const PREV: &str = "‹";
pub const EXTERNAL: &str = "↗";
pub const DOWNLOAD: &str = "⤓";

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Briefcase => "💼",
        Icon::Code => "</>",
        Icon::Star => "★",
        Icon::GraduationCap => "🎓",
        Icon::Award => "🏅",
        Icon::MapPin => "📍",
    }
}

pub fn link_glyph(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Email => "✉",
        LinkKind::Phone => "☎",
        LinkKind::Linkedin => "in",
        LinkKind::Github => "GH",
    }
}

/// Decorative content icon, hidden from assistive technology.
#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <span class="icon" aria-hidden="true">{glyph(icon)}</span> }
}

/// Decorative icon for a contact link.
#[component]
pub fn LinkGlyph(kind: LinkKind) -> impl IntoView {
    view! { <span class="icon icon--link" aria-hidden="true">{link_glyph(kind)}</span> }
}

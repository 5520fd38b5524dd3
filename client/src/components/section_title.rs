//! Heading block shared by every content section.

use leptos::prelude::*;

#[component]
pub fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2>{title}</h2>
            <div class="section-title__underline"></div>
            <p class="section-title__subtitle">{subtitle}</p>
        </div>
    }
}

//! Skill categories with accent colors cycling by position.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::icon::IconGlyph;
use crate::components::section_title::SectionTitle;
use crate::content::Icon;
use crate::state::section::SectionId;

const ACCENTS: [&str; 4] = ["accent--purple", "accent--pink", "accent--blue", "accent--green"];

/// Accent modifier class for the category at `index`.
pub fn accent_class(index: usize) -> &'static str {
    ACCENTS[index % ACCENTS.len()]
}

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let cards = content
        .with_value(|c| c.skills.clone())
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            let pills = category
                .skills
                .into_iter()
                .map(|skill| view! { <span class="skill-pill">{skill}</span> })
                .collect::<Vec<_>>();
            view! {
                <div class="card">
                    <div class="skills__header">
                        <div class=format!("skills__icon {}", accent_class(index))>
                            <IconGlyph icon=Icon::Code/>
                        </div>
                        <h3>{category.name}</h3>
                    </div>
                    <div class="skills__pills">{pills}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::Skills.as_str() class="section">
            <SectionTitle title="Technical Arsenal" subtitle="Technologies I use to bring ideas to life"/>
            <div class="grid grid-4">{cards}</div>
        </section>
    }
}

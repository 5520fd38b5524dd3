//! Work history rendered as a vertical timeline.

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::section_title::SectionTitle;
use crate::content::Experience;
use crate::state::section::SectionId;

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let items = content
        .with_value(|c| c.experiences.clone())
        .into_iter()
        .map(|entry| view! { <TimelineItem entry=entry/> })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::Experience.as_str() class="section">
            <SectionTitle
                title="Professional Journey"
                subtitle="Building impactful solutions across diverse industries"
            />
            <div class="timeline">{items}</div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: Experience) -> impl IntoView {
    let highlights = entry
        .highlights
        .into_iter()
        .map(|h| {
            view! {
                <div class="bullet bullet--hover">
                    <div class="bullet__dot bullet__dot--small"></div>
                    <p class="muted">{h}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="timeline__item">
            <div class="timeline__dot"></div>
            <div class="card">
                <div class="timeline__header">
                    <h3 class="timeline__role">{entry.role}</h3>
                    <p class="timeline__company">{entry.company}</p>
                    <span class="badge">{entry.period}</span>
                </div>
                <div>{highlights}</div>
            </div>
        </div>
    }
}

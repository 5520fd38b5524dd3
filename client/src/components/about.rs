//! About section: summary, stats, education/expertise cards, achievements.

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::icon::IconGlyph;
use crate::components::section_title::SectionTitle;
use crate::state::section::SectionId;

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let (about, stats, highlights, achievements) = content.with_value(|c| {
        (c.profile.about.clone(), c.stats.clone(), c.highlights.clone(), c.achievements.clone())
    });

    let paragraphs = about
        .into_iter()
        .map(|text| view! { <p class="about__paragraph">{text}</p> })
        .collect::<Vec<_>>();

    let stats = stats
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat">
                    <IconGlyph icon=stat.icon/>
                    <div class="stat__value">{stat.value}</div>
                    <div class="stat__label">{stat.label}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let highlights = highlights
        .into_iter()
        .enumerate()
        .map(|(index, h)| {
            let class = if index % 2 == 0 { "card highlight highlight--purple" } else { "card highlight highlight--pink" };
            view! {
                <div class=class>
                    <div class="highlight__header">
                        <div class="highlight__icon">
                            <IconGlyph icon=h.icon/>
                        </div>
                        <div>
                            <h3 class="highlight__title">{h.title}</h3>
                            <p class="highlight__subtitle">{h.subtitle}</p>
                        </div>
                    </div>
                    <p class="muted">{h.detail}</p>
                    <p class="muted muted--small">{h.note}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let achievements = achievements
        .into_iter()
        .map(|a| {
            view! {
                <div class="bullet">
                    <div class="bullet__dot"></div>
                    <p class="muted">{a}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::About.as_str() class="section">
            <SectionTitle title="About Me" subtitle="Passionate developer crafting digital experiences"/>
            <div class="grid grid-2 about">
                <div>
                    {paragraphs}
                    <div class="stats">{stats}</div>
                </div>
                <div>
                    <div class="grid">{highlights}</div>
                    <div class="about__achievements">
                        <h3>"Key Achievements"</h3>
                        {achievements}
                    </div>
                </div>
            </div>
        </section>
    }
}

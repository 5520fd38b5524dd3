//! Full-height banner with name, headline, contact chips and call to action.

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::icon::{CHEVRON, DOWNLOAD, EXTERNAL, IconGlyph, LinkGlyph};
use crate::content::{ContactLink, Icon};
use crate::state::section::SectionId;
use crate::state::ui::UiState;
use crate::util::scroll::SmoothScroller;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let (profile, contacts) = content.with_value(|c| (c.profile.clone(), c.contacts.clone()));

    let chips = contacts
        .into_iter()
        .map(|link| view! { <ContactChip link=link/> })
        .collect::<Vec<_>>();

    view! {
        <section id=SectionId::Home.as_str() class="hero">
            <div class="hero__content">
                <h1 class="hero__title animate-float">{profile.name}</h1>
                <p class="hero__subtitle">
                    "Frontend-focused "
                    <strong class="accent accent--purple">{profile.role}</strong>
                    " specializing in "
                    <strong class="accent accent--pink">{profile.focus}</strong>
                    " and modern web technologies"
                </p>

                <div class="hero__info">
                    <div class="info-item">
                        <IconGlyph icon=Icon::MapPin/>
                        <span>{profile.location}</span>
                    </div>
                    <div class="info-item">
                        <IconGlyph icon=Icon::Briefcase/>
                        <span>{profile.experience_summary}</span>
                    </div>
                </div>

                <div class="hero__info">{chips}</div>

                <div class="hero__buttons">
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            ui.update(|u| {
                                u.navigate_to(SectionId::About, &SmoothScroller);
                            });
                        }
                    >
                        "Explore My Work"
                        <span aria-hidden="true">{CHEVRON}</span>
                    </button>
                    <a
                        class="btn-secondary"
                        href=profile.resume.href
                        download=profile.resume.download_name
                    >
                        <span aria-hidden="true">{DOWNLOAD}</span>
                        "Download CV"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactChip(link: ContactLink) -> impl IntoView {
    let (target, rel) = link.anchor_attrs();
    let external = link.is_external();

    view! {
        <a class="info-item info-item--link" href=link.href target=target rel=rel>
            <LinkGlyph kind=link.kind/>
            <span>{link.label}</span>
            <Show when=move || external>
                <span class="icon" aria-hidden="true">{EXTERNAL}</span>
            </Show>
        </a>
    }
}

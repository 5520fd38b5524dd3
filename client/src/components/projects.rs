//! Project cards in a paged carousel.
//!
//! The carousel shows `DEFAULT_PAGE_SIZE` cards at a time with wrap-around
//! arrows and one dot per page. Controls are omitted when everything fits on
//! one page.

use leptos::prelude::*;

use crate::app::ContentContext;
use crate::components::icon::{CHEVRON, EXTERNAL, IconGlyph, PREV};
use crate::components::section_title::SectionTitle;
use crate::content::{Icon, Project};
use crate::state::carousel::{Carousel, DEFAULT_PAGE_SIZE};
use crate::state::section::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<ContentContext>();
    let projects = content.with_value(|c| c.projects.clone());
    let carousel = RwSignal::new(Carousel::new(projects.len(), DEFAULT_PAGE_SIZE));
    let projects = StoredValue::new(projects);

    let page_cards = move || {
        let range = carousel.get().visible();
        projects.with_value(|all| {
            all[range]
                .iter()
                .cloned()
                .map(|project| view! { <ProjectCard project=project/> })
                .collect::<Vec<_>>()
        })
    };

    let dots = move || {
        (0..carousel.with(Carousel::page_count))
            .map(|page| {
                view! {
                    <button
                        class="carousel__dot"
                        class:active=move || carousel.with(Carousel::page) == page
                        aria-label=format!("Go to page {}", page + 1)
                        on:click=move |_| {
                            carousel.update(|c| {
                                c.go_to(page);
                            });
                        }
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section id=SectionId::Projects.as_str() class="section">
            <SectionTitle title="Featured Projects" subtitle="Showcasing my latest work and achievements"/>
            <div class="carousel">
                <div class="grid grid-2 carousel__track">{page_cards}</div>
                <Show when=move || carousel.with(Carousel::has_controls)>
                    <div class="carousel__controls">
                        <button
                            class="carousel__arrow"
                            aria-label="Previous projects"
                            on:click=move |_| carousel.update(Carousel::prev)
                        >
                            {PREV}
                        </button>
                        <div class="carousel__dots">{dots}</div>
                        <button
                            class="carousel__arrow"
                            aria-label="Next projects"
                            on:click=move |_| carousel.update(Carousel::next)
                        >
                            {CHEVRON}
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let achievements = project
        .achievements
        .into_iter()
        .map(|a| {
            view! {
                <div class="project__achievement">
                    <span class="accent accent--purple" aria-hidden="true">{CHEVRON}</span>
                    <span>{a}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let tech = project
        .tech
        .into_iter()
        .map(|t| view! { <span class="skill-pill">{t}</span> })
        .collect::<Vec<_>>();

    let live = project.links.live.map(|href| {
        view! {
            <a class="btn-primary btn--small" href=href target="_blank" rel="noreferrer">
                <span>"Live Demo"</span>
                <span aria-hidden="true">{EXTERNAL}</span>
            </a>
        }
    });
    let code = project.links.code.map(|href| {
        view! {
            <a class="btn-secondary btn--small" href=href target="_blank" rel="noreferrer">
                <span>"Code"</span>
            </a>
        }
    });

    let featured = project.featured;

    view! {
        <div class="card project">
            <Show when=move || featured>
                <div class="project__badge">
                    <IconGlyph icon=Icon::Star/>
                    "Featured"
                </div>
            </Show>
            <div class="project__header">
                <h3 class="project__title">{project.title}</h3>
                <p class="project__period">{project.period}</p>
            </div>
            <p class="muted">{project.description}</p>
            <div class="project__achievements">{achievements}</div>
            <div class="project__tech">{tech}</div>
            <div class="project__links">{live} {code}</div>
        </div>
    }
}

//! Fixed top navigation: brand, section links, theme toggle, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the active section through a read-only signal owned by the page's
//! tracker. Clicks route through `UiState::navigate_to`, which scrolls and
//! closes the mobile overlay.

use leptos::prelude::*;

use crate::app::{ContentContext, ThemeContext};
use crate::components::icon::{CLOSE, MENU, MOON, SUN};
use crate::state::section::SectionId;
use crate::state::ui::UiState;
use crate::util::scroll::SmoothScroller;

#[component]
pub fn Navbar(active: ReadSignal<SectionId>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let content = expect_context::<ContentContext>();
    let brand = content.with_value(|c| c.profile.name.clone());

    let on_select = Callback::new(move |target: SectionId| {
        ui.update(|u| {
            u.navigate_to(target, &SmoothScroller);
        });
    });

    view! {
        <nav class="navbar">
            <div class="navbar__content">
                <button class="navbar__brand" on:click=move |_| on_select.run(SectionId::Home)>
                    {brand}
                </button>

                <div class="navbar__links">
                    <SectionButtons active=active on_select=on_select stacked=false/>
                    <ThemeToggle button_class="theme-toggle"/>
                </div>

                <div class="navbar__mobile">
                    <ThemeToggle button_class="menu-button"/>
                    <button
                        class="menu-button"
                        aria-label="Toggle menu"
                        aria-expanded=move || ui.with(|u| u.menu_open).to_string()
                        on:click=move |_| ui.update(UiState::toggle_menu)
                    >
                        {move || if ui.with(|u| u.menu_open) { CLOSE } else { MENU }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.with(|u| u.menu_open)>
                <div class="navbar__overlay">
                    <SectionButtons active=active on_select=on_select stacked=true/>
                </div>
            </Show>
        </nav>
    }
}

/// One button per section; the active one carries the `active` class.
#[component]
fn SectionButtons(active: ReadSignal<SectionId>, on_select: Callback<SectionId>, stacked: bool) -> impl IntoView {
    let class = if stacked { "nav-link nav-link--stacked" } else { "nav-link" };
    SectionId::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class=class
                    class:active=move || active.get() == section
                    on:click=move |_| on_select.run(section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect::<Vec<_>>()
}

/// Flips the theme store. Shows a sun in dark mode and a moon in light mode.
#[component]
pub fn ThemeToggle(button_class: &'static str) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class=button_class
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=move |_| {
                theme.update(|t| {
                    t.flip();
                });
            }
        >
            {move || if theme.with(|t| t.theme().is_dark()) { SUN } else { MOON }}
        </button>
    }
}

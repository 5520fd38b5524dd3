//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PortfolioContent;
use crate::pages::portfolio::PortfolioPage;
use crate::state::theme::ThemeStore;
use crate::state::ui::UiState;
use crate::util::dark_mode::BrowserTheme;

/// Theme store shared through context.
pub type ThemeContext = RwSignal<ThemeStore<BrowserTheme>>;

/// Immutable page content shared through context.
pub type ContentContext = StoredValue<PortfolioContent>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme store, UI chrome state, and page content, then routes
/// `/` to the portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme: ThemeContext = RwSignal::new(ThemeStore::new(BrowserTheme));
    let ui = RwSignal::new(UiState::default());
    let content: ContentContext = StoredValue::new(PortfolioContent::load_or_default());

    provide_context(theme);
    provide_context(ui);
    provide_context(content);

    // Effects only run in the browser, so the server renders the unresolved
    // fallback and hydration matches it before the real preference applies.
    Effect::new(move |_| {
        theme.update(|t| {
            if !t.is_initialized() {
                t.init();
            }
        });
    });

    let (title, description) = content.with_value(|c| {
        (
            format!("{} | {}", c.profile.name, c.profile.role),
            format!("{} specializing in {}", c.profile.role, c.profile.focus),
        )
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}

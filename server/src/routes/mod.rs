//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR page with a few static routes under a single Axum
//! router. There is no API: the page's contact form never posts here.

pub mod site;

use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portfolio_client::app::{App, shell};
use portfolio_client::content::PortfolioContent;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use site::SiteState;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Full site: static routes + Leptos SSR at `/` + compiled assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (the
/// `LEPTOS_*` environment normally provided by `cargo leptos`).
pub fn app(config: &ServerConfig) -> Result<Router, RouteError> {
    let conf = get_configuration(None).map_err(|e| RouteError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let content = PortfolioContent::load_or_default();
    let site = SiteState::new(config, &content.profile.resume);
    tracing::info!(route = %site.resume_route, file = %site.resume_file.display(), "resume download");

    Ok(site::routes(site)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

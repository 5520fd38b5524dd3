//! Non-Leptos routes: health check and the resume download.

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use portfolio_client::content::ResumeAsset;

use crate::config::ServerConfig;

pub const DEFAULT_RESUME_ROUTE: &str = "/Resume.pdf";
pub const DEFAULT_RESUME_NAME: &str = "Resume.pdf";

/// Where the resume lives on disk and how it is offered to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteState {
    pub resume_route: String,
    pub resume_file: PathBuf,
    pub download_name: String,
}

impl SiteState {
    /// Resolve the resume route and file from content. Blank or relative
    /// hrefs fall back to `/Resume.pdf`.
    pub fn new(config: &ServerConfig, resume: &ResumeAsset) -> Self {
        let resume_route = if resume.href.starts_with('/') && resume.href.len() > 1 {
            resume.href.clone()
        } else {
            DEFAULT_RESUME_ROUTE.to_owned()
        };
        let resume_file = config.assets_dir.join(resume_route.trim_start_matches('/'));
        let download_name = if resume.download_name.trim().is_empty() {
            DEFAULT_RESUME_NAME.to_owned()
        } else {
            resume.download_name.clone()
        };
        Self { resume_route, resume_file, download_name }
    }
}

pub fn routes(site: SiteState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(&site.resume_route, get(resume))
        .with_state(site)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn resume(State(site): State<SiteState>) -> Response {
    match tokio::fs::read(&site.resume_file).await {
        Ok(bytes) => {
            let headers = [
                (CONTENT_TYPE, "application/pdf".to_owned()),
                (CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", site.download_name)),
            ];
            (headers, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(path = %site.resume_file.display(), error = %e, "resume not available");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;

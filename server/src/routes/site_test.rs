use super::*;

use std::path::Path;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn config_with_assets(dir: &Path) -> ServerConfig {
    ServerConfig { host: crate::config::DEFAULT_HOST, port: 0, assets_dir: dir.to_path_buf() }
}

fn resume_asset() -> ResumeAsset {
    ResumeAsset { href: "/Resume.pdf".into(), download_name: "Aysha_Areej_Resume.pdf".into() }
}

// =============================================================================
// SiteState
// =============================================================================

#[test]
fn site_state_joins_resume_href_onto_assets_dir() {
    let site = SiteState::new(&config_with_assets(Path::new("/srv/assets")), &resume_asset());
    assert_eq!(site.resume_route, "/Resume.pdf");
    assert_eq!(site.resume_file, PathBuf::from("/srv/assets/Resume.pdf"));
    assert_eq!(site.download_name, "Aysha_Areej_Resume.pdf");
}

#[test]
fn site_state_falls_back_for_blank_resume() {
    let blank = ResumeAsset::default();
    let site = SiteState::new(&config_with_assets(Path::new("/a")), &blank);
    assert_eq!(site.resume_route, DEFAULT_RESUME_ROUTE);
    assert_eq!(site.download_name, DEFAULT_RESUME_NAME);
}

// =============================================================================
// Routes
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let site = SiteState::new(&config_with_assets(Path::new("/nonexistent")), &resume_asset());
    let response = routes(site)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_resume_is_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let site = SiteState::new(&config_with_assets(dir.path()), &resume_asset());
    let response = routes(site)
        .oneshot(Request::builder().uri("/Resume.pdf").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resume_is_served_as_attachment() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("Resume.pdf"), b"%PDF-1.4 test").unwrap();
    let site = SiteState::new(&config_with_assets(dir.path()), &resume_asset());

    let response = routes(site)
        .oneshot(Request::builder().uri("/Resume.pdf").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[CONTENT_DISPOSITION],
        "attachment; filename=\"Aysha_Areej_Resume.pdf\""
    );
}

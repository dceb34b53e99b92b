//! Page rendering, catalog browsing and the middleware stack.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use ubermelon_integration_tests::{MELONS, TestApp};
use ubermelon_storefront::stores::Catalog;

/// The shop's own catalog file.
const SHIPPED_MELONS: &str = include_str!("../../../melons.txt");

/// Schemes (`"http:"`, `"https:"`) the page's `img-src` directive allows.
fn img_src_schemes(csp: &str) -> Vec<&str> {
    csp.split(';')
        .map(str::trim)
        .find_map(|directive| directive.strip_prefix("img-src "))
        .map(|sources| {
            sources
                .split_whitespace()
                .filter(|source| source.ends_with(':'))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn health_check_reports_ok() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn homepage_renders_with_security_headers() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Ubermelon"));
    assert_eq!(resp.header("x-frame-options"), Some("DENY"));
    assert_eq!(resp.header("x-content-type-options"), Some("nosniff"));
    assert!(resp.header("content-security-policy").is_some());
    assert!(resp.header("x-request-id").is_some());
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = TestApp::new();
    let mut visitor = app.visitor();
    let resp = visitor.get("/").await;
    let first = resp.header("x-request-id").unwrap().to_string();
    let second = visitor.get("/").await;
    assert_ne!(second.header("x-request-id"), Some(first.as_str()));
}

#[tokio::test]
async fn melon_listing_keeps_file_order() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/melons").await;

    assert_eq!(resp.status, StatusCode::OK);
    let crenshaw = resp.body.find("Crenshaw").unwrap();
    let yellow = resp.body.find("Yellow Watermelon").unwrap();
    let musk = resp.body.find("Musk").unwrap();
    assert!(crenshaw < yellow && yellow < musk);
    assert!(resp.body.contains("$7.50"));
    assert!(resp.body.contains("href=\"/melon/yell\""));
}

#[tokio::test]
async fn melon_detail_shows_one_melon() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/melon/yell").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Yellow Watermelon"));
    assert!(resp.body.contains("$7.50"));
    assert!(resp.body.contains("/add_to_cart/yell"));
    assert!(!resp.body.contains("Crenshaw"));
}

#[tokio::test]
async fn unknown_melon_redirects_to_listing_with_notice() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/melon/ghost").await;

    assert!(resp.status.is_redirection());
    assert_eq!(resp.location(), Some("/melons"));

    let listing = visitor.get("/melons").await;
    assert!(listing.body.contains("flash-error"));
}

#[tokio::test]
async fn flash_is_shown_once() {
    let mut visitor = TestApp::new().visitor();
    visitor.get("/checkout").await;

    let first = visitor.get("/melons").await;
    assert!(first.body.contains("Checkout will be implemented"));

    let second = visitor.get("/melons").await;
    assert!(!second.body.contains("Checkout will be implemented"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/no/such/page").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_images_are_allowed_by_csp() {
    let mut visitor = TestApp::new().visitor();
    let resp = visitor.get("/melons").await;
    let allowed = img_src_schemes(resp.header("content-security-policy").unwrap());

    for source in [MELONS, SHIPPED_MELONS] {
        let catalog = Catalog::parse(source).unwrap();
        for melon in catalog.get_all() {
            let (scheme, _) = melon.image_url.split_once("//").unwrap();
            assert!(
                allowed.contains(&scheme),
                "{} image {} blocked by img-src {allowed:?}",
                melon.id,
                melon.image_url
            );
        }
    }
}

//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Content hash of `main.css`, computed by the build script (may be empty).
const CSS_HASH: &str = env!("CSS_HASH");

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the URL of the stylesheet, fingerprinted when the build script
/// managed to hash it.
///
/// Usage in templates: `{{ ""|stylesheet_path }}`
#[askama::filter_fn]
pub fn stylesheet_path(
    _value: impl Display,
    _env: &dyn askama::Values,
) -> askama::Result<String> {
    Ok(stylesheet_url(CSS_HASH))
}

fn stylesheet_url(hash: &str) -> String {
    if hash.is_empty() {
        "/static/css/main.css".to_string()
    } else {
        format!("/static/css/derived/main.{hash}.css")
    }
}

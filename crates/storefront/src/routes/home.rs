//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::Visitor;
use crate::models::PageContext;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "homepage.html")]
pub struct HomeTemplate {
    pub page: PageContext,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn index(visitor: Visitor) -> Result<Response> {
    let page = visitor.page().await?;
    Ok(HomeTemplate { page }.into_response())
}

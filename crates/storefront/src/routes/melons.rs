//! Melon catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;
use ubermelon_core::{Melon, MelonId};

use crate::error::Result;
use crate::filters;
use crate::middleware::Visitor;
use crate::models::{FlashMessage, PageContext};
use crate::state::AppState;

/// Melon listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "all_melons.html")]
pub struct AllMelonsTemplate {
    pub page: PageContext,
    pub melons: Vec<Melon>,
}

/// Melon detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "melon_details.html")]
pub struct MelonDetailsTemplate {
    pub page: PageContext,
    pub melon: Melon,
}

/// Display every melon in the catalog.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>, visitor: Visitor) -> Result<Response> {
    let page = visitor.page().await?;
    Ok(AllMelonsTemplate {
        page,
        melons: state.catalog().get_all().to_vec(),
    }
    .into_response())
}

/// Display one melon.
///
/// An unknown ID sends the visitor back to the listing with a notice.
#[instrument(skip(state, visitor))]
pub async fn show(
    State(state): State<AppState>,
    Path(melon_id): Path<String>,
    visitor: Visitor,
) -> Result<Response> {
    let melon_id = MelonId::from(melon_id);

    match state.catalog().get_by_id(&melon_id) {
        Ok(melon) => {
            let melon = melon.clone();
            let page = visitor.page().await?;
            Ok(MelonDetailsTemplate { page, melon }.into_response())
        }
        Err(e) => {
            tracing::info!(error = %e, "Melon detail requested for unknown ID");
            visitor
                .flash(FlashMessage::error("Sorry, we don't have that melon."))
                .await?;
            Ok(Redirect::to("/melons").into_response())
        }
    }
}

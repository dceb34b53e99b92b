//! Cart route handlers.
//!
//! The cart lives in the visitor's session as melon ID -> quantity. It is
//! priced against the catalog every time it is shown.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;
use ubermelon_core::{CartError, CartView, MelonId, compute_cart_view};

use crate::error::Result;
use crate::filters;
use crate::middleware::Visitor;
use crate::models::{FlashMessage, PageContext};
use crate::state::AppState;

/// Shown when the cart page has nothing to list.
pub const EMPTY_CART_MESSAGE: &str = "There are no items in your cart. Go find some melons.";

/// Shown when the stored cart names a melon the catalog no longer has.
pub const UNAVAILABLE_MELON_MESSAGE: &str = "Some melons in your cart are no longer available.";

/// Shown when the checkout link is followed.
pub const CHECKOUT_MESSAGE: &str = "Sorry! Checkout will be implemented in a future version.";

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub page: PageContext,
    pub cart: CartView,
}

/// Display the cart with line and order totals.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, visitor: Visitor) -> Result<Response> {
    let cart = match compute_cart_view(visitor.cart(), state.catalog()) {
        Ok(view) => view,
        Err(e) => {
            tracing::warn!(error = %e, "Cart could not be priced");
            let notice = match e {
                CartError::UnknownMelon(_) => UNAVAILABLE_MELON_MESSAGE,
                CartError::TotalOverflow => "Your cart total is too large to show.",
            };
            visitor.flash(FlashMessage::error(notice)).await?;
            CartView::empty()
        }
    };

    if cart.is_empty() {
        visitor.flash(FlashMessage::info(EMPTY_CART_MESSAGE)).await?;
    }

    let page = visitor.page().await?;
    Ok(CartTemplate { page, cart }.into_response())
}

/// Add one melon to the cart, then show the cart.
#[instrument(skip(state, visitor))]
pub async fn add(
    State(state): State<AppState>,
    Path(melon_id): Path<String>,
    mut visitor: Visitor,
) -> Result<Redirect> {
    let melon_id = MelonId::from(melon_id);

    let Ok(melon) = state.catalog().get_by_id(&melon_id) else {
        tracing::info!(%melon_id, "Add to cart for unknown melon");
        visitor
            .flash(FlashMessage::error("Sorry, we don't have that melon."))
            .await?;
        return Ok(Redirect::to("/melons"));
    };

    let quantity = visitor.add_to_cart(&melon_id).await?;
    tracing::info!(%melon_id, quantity, "Melon added to cart");

    visitor
        .flash(FlashMessage::success(format!(
            "You added one {} to your cart!",
            melon.common_name
        )))
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Checkout placeholder.
#[instrument(skip_all)]
pub async fn checkout(visitor: Visitor) -> Result<Redirect> {
    visitor.flash(FlashMessage::info(CHECKOUT_MESSAGE)).await?;
    Ok(Redirect::to("/melons"))
}

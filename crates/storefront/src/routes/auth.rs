//! Authentication route handlers.
//!
//! Login checks the submitted email and password against the customer list
//! loaded at startup. Only the email is kept in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::Visitor;
use crate::models::{FlashMessage, PageContext};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data. Fields are optional so a hand-crafted or truncated
/// submission gets a notice instead of a rejection page.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Shown when the login form arrives without an email or password.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter your email and password.";

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
}

/// Display the login page.
#[instrument(skip_all)]
pub async fn login_page(visitor: Visitor) -> Result<Response> {
    let page = visitor.page().await?;
    Ok(LoginTemplate { page }.into_response())
}

/// Handle login form submission.
///
/// A wrong password lands on `/melons` while an unknown email goes back to
/// `/login`; existing clients rely on that difference.
#[instrument(skip_all, fields(email))]
pub async fn login(
    State(state): State<AppState>,
    mut visitor: Visitor,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let (Some(email), Some(password)) = (
        form.email.filter(|e| !e.is_empty()),
        form.password.filter(|p| !p.is_empty()),
    ) else {
        visitor
            .flash(FlashMessage::error(MISSING_CREDENTIALS_MESSAGE))
            .await?;
        return Ok(Redirect::to("/login"));
    };
    tracing::Span::current().record("email", email.as_str());

    let auth = AuthService::new(state.customers());

    match auth.authenticate(&email, &password) {
        Ok(customer) => {
            visitor.log_in(&customer.email).await?;
            set_sentry_user(&customer.email);
            tracing::info!("Customer logged in");
            visitor
                .flash(FlashMessage::success(
                    "You've logged in successfully. Welcome to your Ubermelons account.",
                ))
                .await?;
            Ok(Redirect::to("/melons"))
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Login failed: wrong password");
            visitor
                .flash(FlashMessage::error("Incorrect password. Please try again."))
                .await?;
            Ok(Redirect::to("/melons"))
        }
        Err(AuthError::UnknownAccount) => {
            tracing::info!("Login failed: unknown account");
            visitor
                .flash(FlashMessage::error(
                    "No account with that email exists. Please create one or try again.",
                ))
                .await?;
            Ok(Redirect::to("/login"))
        }
    }
}

/// Log the customer out.
#[instrument(skip_all)]
pub async fn logout(mut visitor: Visitor) -> Result<Redirect> {
    if visitor.log_out().await?.is_some() {
        clear_sentry_user();
        visitor
            .flash(FlashMessage::info("You have been logged out."))
            .await?;
    }
    Ok(Redirect::to("/melons"))
}

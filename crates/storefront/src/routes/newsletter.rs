//! Newsletter subscription route handler.

use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::extract::AppJson;
use crate::interactions::{self, NewsletterOutcome};

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Subscribe to the newsletter.
///
/// Signups are acknowledged but not stored.
#[instrument(skip(form))]
pub async fn subscribe(AppJson(form): AppJson<SubscribeForm>) -> Result<Json<NewsletterOutcome>> {
    Ok(Json(interactions::newsletter_signup(&form.email)?))
}

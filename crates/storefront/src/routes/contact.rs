//! Contact form route handler.

use axum::Json;
use tracing::instrument;

use crate::error::Result;
use crate::extract::AppJson;
use crate::interactions::{self, ContactForm, ContactSubmission};

/// Validate a contact form submission.
#[instrument(skip(form))]
pub async fn submit(AppJson(form): AppJson<ContactForm>) -> Result<Json<ContactSubmission>> {
    Ok(Json(interactions::validate_contact_form(&form)?))
}

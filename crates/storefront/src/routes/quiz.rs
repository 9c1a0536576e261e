//! Recommendation quiz route handler.

use axum::Json;
use tracing::instrument;

use crate::quiz::{QuizSession, start_quiz};

/// Open the quiz.
#[instrument]
pub async fn show() -> Json<QuizSession> {
    Json(start_quiz())
}

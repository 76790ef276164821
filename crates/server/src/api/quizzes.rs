//! Quiz play.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::debug;
use trivia_api_types::{LenientInt, QuestionPayload, QuizRequest, QuizResponse};
use trivia_core::domain::{QuestionId, QuizCategory, QuizRound};

use super::error::ApiError;
use super::state::AppState;

pub fn create_quizzes_router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}

fn quiz_round(request: QuizRequest) -> QuizRound {
    let category = match request.quiz_category {
        Some(category) => QuizCategory::from_parts(
            category.id.and_then(LenientInt::as_i32),
            category.kind.as_deref(),
        ),
        None => QuizCategory::All,
    };
    let previous = request
        .previous_questions
        .into_iter()
        .filter_map(LenientInt::as_i32)
        .map(QuestionId::new);

    QuizRound::new(category, previous)
}

async fn play_quiz(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = body?;
    let round = quiz_round(request);

    let candidates = state.questions.quiz_candidates(&round).await?;
    let question = round.pick(&candidates, &mut rand::thread_rng()).cloned();
    debug!(
        category = ?round.category(),
        remaining = candidates.len(),
        exhausted = question.is_none(),
        "quiz round"
    );

    Ok(Json(QuizResponse {
        success: true,
        question: question.map(QuestionPayload::from),
    }))
}

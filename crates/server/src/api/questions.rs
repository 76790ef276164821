//! Question routes: listing, search, create and delete.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use trivia_api_types::{
    CreatedResponse, DeletedResponse, NewQuestionRequest, QuestionListResponse, QuestionsCommand,
    QuestionsPageResponse, SearchRequest,
};
use trivia_core::domain::{AnswerText, CategoryId, Difficulty, Page, QuestionId, QuestionText};

use super::error::ApiError;
use super::format::{category_map, question_payloads};
use super::state::AppState;
use crate::repository::NewQuestion;

pub fn create_questions_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/{id}", delete(delete_question))
}

/// `?page=N`. Kept as a string so junk falls back to the first page instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsPageResponse>, ApiError> {
    let page = Page::parse_lenient(query.page.as_deref())
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    let result = state.questions.list_page(None, page, state.page_size).await?;
    if result.questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no questions on page {}",
            page.number()
        )));
    }

    let categories = state.categories.list_all().await?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions: question_payloads(result.questions),
        total_questions: result.total,
        categories: category_map(categories),
        current_category: None,
    }))
}

async fn post_questions(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let command =
        QuestionsCommand::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    match command {
        QuestionsCommand::Search(request) => {
            search_questions(&state, request).await.map(IntoResponse::into_response)
        }
        QuestionsCommand::Create(request) => {
            create_question(&state, request).await.map(IntoResponse::into_response)
        }
    }
}

async fn search_questions(
    state: &AppState,
    request: SearchRequest,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let matches = state.questions.search(&request.search_term).await?;
    if matches.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no questions match '{}'",
            request.search_term
        )));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: matches.len() as u64,
        questions: question_payloads(matches),
        current_category: None,
    }))
}

async fn create_question(
    state: &AppState,
    request: NewQuestionRequest,
) -> Result<Json<CreatedResponse>, ApiError> {
    let question = QuestionText::new(request.question)?;
    let answer = AnswerText::new(request.answer)?;
    let difficulty = Difficulty::new(request.difficulty.value())?;

    let category_id = request
        .category
        .as_i32()
        .map(CategoryId::new)
        .ok_or_else(|| {
            ApiError::Unprocessable(format!("category {} is out of range", request.category.value()))
        })?;
    if state.categories.find_by_id(category_id).await?.is_none() {
        return Err(ApiError::Unprocessable(format!(
            "category {category_id} does not exist"
        )));
    }

    let record = state
        .questions
        .create(NewQuestion {
            question,
            answer,
            category: category_id,
            difficulty,
        })
        .await?;
    info!(question_id = %record.id, category_id = %category_id, "created question");

    Ok(Json(CreatedResponse {
        success: true,
        created: record.id.into_inner(),
    }))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(id) = id?;
    // Ids beyond the column width cannot exist.
    let Ok(id) = i32::try_from(id) else {
        return Err(ApiError::Unprocessable(format!("question {id} does not exist")));
    };
    let question_id = QuestionId::new(id);

    let Some(existing) = state.questions.find_by_id(question_id).await? else {
        return Err(ApiError::Unprocessable(format!(
            "question {question_id} does not exist"
        )));
    };
    if !state.questions.delete(question_id).await? {
        return Err(ApiError::Unprocessable(format!(
            "question {question_id} was already removed"
        )));
    }
    info!(
        question_id = %question_id,
        category_id = %existing.category,
        "deleted question"
    );

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id.into_inner(),
    }))
}

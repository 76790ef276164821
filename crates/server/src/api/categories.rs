//! Category routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::PathRejection},
    routing::get,
};
use trivia_api_types::{CategoriesResponse, QuestionListResponse};
use trivia_core::domain::{CategoryId, Page};

use super::error::ApiError;
use super::format::{category_map, question_payloads};
use super::questions::PageQuery;
use super::state::AppState;

pub fn create_categories_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.categories.list_all().await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".to_string()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Path(id) = id?;
    let category_id = CategoryId::new(id);
    let page = Page::parse_lenient(query.page.as_deref())
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    let Some(category) = state.categories.find_by_id(category_id).await? else {
        return Err(ApiError::NotFound(format!("category {category_id} does not exist")));
    };

    let result = state
        .questions
        .list_page(Some(category_id), page, state.page_size)
        .await?;
    if result.questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "category {category_id} has no questions on page {}",
            page.number()
        )));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: question_payloads(result.questions),
        total_questions: result.total,
        current_category: Some(category.kind),
    }))
}

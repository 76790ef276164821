//! Shared request/response types used by API-facing crates.

mod lenient;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use lenient::LenientInt;

/// Categories keyed by id. Serialized as a JSON object: `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i32, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// A question as rendered to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionPayload>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// Category listing and search results share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionPayload>,
    pub total_questions: u64,
    pub current_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: LenientInt,
    pub difficulty: LenientInt,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizCategoryPayload {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<LenientInt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<LenientInt>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryPayload>,
}

/// `POST /questions` is overloaded: a body carrying `searchTerm` searches, anything else creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsCommand {
    Search(SearchRequest),
    Create(NewQuestionRequest),
}

impl QuestionsCommand {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let is_search = value
            .as_object()
            .is_some_and(|body| body.contains_key("searchTerm"));

        if is_search {
            serde_json::from_value(value).map(Self::Search)
        } else {
            serde_json::from_value(value).map(Self::Create)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_check_ok_payload() {
        let response = HealthCheckResponse::ok();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn error_response_shape() {
        let response = ErrorResponse::new(404, "resource not found");

        let json = serde_json::to_value(&response).expect("serialize error response");

        assert_eq!(
            json,
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[test]
    fn category_map_serializes_as_object_with_string_keys() {
        let response = CategoriesResponse {
            success: true,
            categories: CategoryMap::from([(1, "Science".to_string()), (4, "History".to_string())]),
        };

        let json = serde_json::to_value(&response).expect("serialize categories");

        assert_eq!(json["categories"], json!({"1": "Science", "4": "History"}));
    }

    #[test]
    fn empty_quiz_question_serializes_as_null() {
        let response = QuizResponse {
            success: true,
            question: None,
        };

        let json = serde_json::to_value(&response).expect("serialize quiz response");

        assert_eq!(json, json!({"success": true, "question": null}));
    }

    #[test]
    fn search_term_body_is_a_search() {
        let command = QuestionsCommand::from_value(json!({"searchTerm": "How"}))
            .expect("search body should parse");

        assert_eq!(
            command,
            QuestionsCommand::Search(SearchRequest {
                search_term: "How".to_string()
            })
        );
    }

    #[test]
    fn create_body_accepts_stringly_numbers() {
        let command = QuestionsCommand::from_value(json!({
            "question": "Say my name!",
            "answer": "Shino",
            "difficulty": "1",
            "category": 3
        }))
        .expect("create body should parse");

        let QuestionsCommand::Create(request) = command else {
            panic!("expected a create command");
        };
        assert_eq!(request.difficulty.value(), 1);
        assert_eq!(request.category.value(), 3);
    }

    #[test]
    fn null_body_is_rejected() {
        assert!(QuestionsCommand::from_value(Value::Null).is_err());
    }

    #[test]
    fn create_body_missing_answer_is_rejected() {
        let result = QuestionsCommand::from_value(json!({
            "question": "Hello World!",
            "difficulty": 1,
            "category": 1
        }));

        assert!(result.is_err());
    }

    #[test]
    fn quiz_request_defaults() {
        let request: QuizRequest = serde_json::from_value(json!({})).expect("empty quiz body");

        assert!(request.previous_questions.is_empty());
        assert!(request.quiz_category.is_none());
    }

    #[test]
    fn quiz_request_with_string_category_id() {
        let request: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [5, "9"],
            "quiz_category": {"type": "History", "id": "4"}
        }))
        .expect("quiz body should parse");

        let previous: Vec<i64> = request.previous_questions.iter().map(|q| q.value()).collect();
        assert_eq!(previous, vec![5, 9]);

        let category = request.quiz_category.expect("category present");
        assert_eq!(category.kind.as_deref(), Some("History"));
        assert_eq!(category.id.map(|id| id.value()), Some(4));
    }
}

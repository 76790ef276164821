#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;
use trivia_core::domain::{AnswerText, CategoryId, Difficulty, QuestionId, QuestionText};
use trivia_server::api::{AppState, create_router};
use trivia_server::config::ServerConfig;
use trivia_server::db::init_pool_and_migrate;
use trivia_server::repository::NewQuestion;

pub const SCIENCE: i32 = 1;
pub const ART: i32 = 2;
pub const GEOGRAPHY: i32 = 3;
pub const HISTORY: i32 = 4;
pub const ENTERTAINMENT: i32 = 5;
pub const SPORTS: i32 = 6;

/// (question, answer, difficulty, category)
pub const QUESTIONS: [(&str, &str, i64, i32); 15] = [
    ("What is the heaviest organ in the human body?", "The Liver", 4, SCIENCE),
    ("Who discovered penicillin?", "Alexander Fleming", 3, SCIENCE),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, SCIENCE),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, ART),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, ART),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, GEOGRAPHY),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, GEOGRAPHY),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, HISTORY),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, HISTORY),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, HISTORY),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, HISTORY),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, ENTERTAINMENT),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, SPORTS),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, SPORTS),
    ("how many players does a volleyball team field at once?", "Six", 2, SPORTS),
];

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    /// Ids of `QUESTIONS`, in order.
    pub question_ids: Vec<QuestionId>,
}

impl TestApp {
    pub fn ids_in_category(&self, category: i32) -> Vec<i32> {
        QUESTIONS
            .iter()
            .zip(&self.question_ids)
            .filter(|((_, _, _, c), _)| *c == category)
            .map(|(_, id)| id.into_inner())
            .collect()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router should answer")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build GET request");
        read_json(self.send(request).await).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("build POST request");
        read_json(self.send(request).await).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("build DELETE request");
        read_json(self.send(request).await).await
    }
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let json = serde_json::from_slice(&bytes).expect("response body should be JSON");
    (status, json)
}

pub fn decode<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("response should match payload type")
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(true).await
}

/// In-memory SQLite app; `seed` fills it with `QUESTIONS`.
pub async fn spawn_app_with(seed: bool) -> TestApp {
    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..ServerConfig::default()
    };
    let db = init_pool_and_migrate(&config)
        .await
        .expect("in-memory database should migrate");
    let state = Arc::new(AppState::from_connection(db, config.page_size));

    let mut question_ids = Vec::new();
    if seed {
        for (question, answer, difficulty, category) in QUESTIONS {
            let record = state
                .questions
                .create(NewQuestion {
                    question: QuestionText::new(question).expect("fixture question"),
                    answer: AnswerText::new(answer).expect("fixture answer"),
                    category: CategoryId::new(category),
                    difficulty: Difficulty::new(difficulty).expect("fixture difficulty"),
                })
                .await
                .expect("insert fixture question");
            question_ids.push(record.id);
        }
    }

    TestApp {
        router: create_router(state.clone()),
        state,
        question_ids,
    }
}

pub fn assert_error(status: StatusCode, body: &Value, code: u16, message: &str) {
    assert_eq!(status.as_u16(), code);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}

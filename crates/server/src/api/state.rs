//! Shared application state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{
    CategoryRepository, QuestionRepository, SeaOrmCategoryRepository, SeaOrmQuestionRepository,
};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    /// Questions per listing page.
    pub page_size: u64,
}

impl AppState {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        page_size: u64,
    ) -> Self {
        Self {
            questions,
            categories,
            page_size,
        }
    }

    /// Wires the sea-orm repositories onto one connection pool.
    pub fn from_connection(db: DatabaseConnection, page_size: u64) -> Self {
        Self::new(
            Arc::new(SeaOrmQuestionRepository::new(db.clone())),
            Arc::new(SeaOrmCategoryRepository::new(db)),
            page_size,
        )
    }
}

mod category_repository;
mod question_repository;

pub use category_repository::{CategoryRecord, CategoryRepository, SeaOrmCategoryRepository};
pub use question_repository::{
    NewQuestion, QuestionPage, QuestionRecord, QuestionRepository, SeaOrmQuestionRepository,
};

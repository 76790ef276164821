mod difficulty;
mod error;
mod ids;
mod page;
mod quiz;
mod text;

pub use difficulty::Difficulty;
pub use error::DomainError;
pub use ids::{CategoryId, QuestionId};
pub use page::Page;
pub use quiz::{QuizCandidate, QuizCategory, QuizRound};
pub use text::{AnswerText, QuestionText};
